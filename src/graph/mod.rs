//! Undirected graphs over dense vertex indices.
//!
//! Traversals only ever see a graph through the [`Graph`] trait. The
//! [`AdjacencyGraph`] type is the in-memory implementation used by the loader,
//! the random generator and the tests.

mod adjacency_graph;
mod generate;
mod traits;

pub use adjacency_graph::*;
pub use traits::*;
