//! Reachability and path reconstruction from a single source vertex.
//!
//! [`PathFinder`] runs one iterative depth-first search at construction and
//! answers `has_path_to` / `path_to` queries afterwards. How the traversal
//! looks for the next unmarked neighbor is chosen through [`NeighborScan`].

mod neighbor_scan;
mod path_finder;

pub use neighbor_scan::*;
pub use path_finder::*;
