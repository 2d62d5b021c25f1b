pub mod fs;
pub mod graph;
pub mod report;
pub mod search;
pub mod sets;
pub mod statistics;
