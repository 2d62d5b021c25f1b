//! File system I/O operations for loading graphs.
//!
//! Graphs are stored as whitespace-separated unsigned integers: the vertex
//! count, the edge count, then one `v w` pair per edge.

mod graph_load;

pub use graph_load::*;
