//! Counters collected while traversing a graph.
//!
//! This module provides a structure for recording how much work a traversal
//! performed: vertices discovered, adjacency entries scanned, and how the
//! explicit frontier grew and shrank.

mod stats;
pub use stats::*;
