//! An adjacency-list representation of a directed graph with dense
//! integer vertices. Construction is either empty (a vertex count) or bulk
//! from a serialized edge list; edges can be added but never removed.
//! Traversal algorithms are layered on top of [`Digraph::adjacent_to`] by
//! consumers of this crate.

mod digraph;
mod error;

pub use crate::digraph::Digraph;
pub use crate::error::{GraphError, Result};
