//! Specialized data structures for graph traversal.
//!
//! # Submodules
//!
//! - [`marks`]: Bit-packed, write-once vertex marks for tracking discovered vertices
pub mod marks;
