//! Directed graph vertices.
//!
//! A `Node` holds a value and a set of one-way connections to other
//! nodes. Connections are identity handles (`NodeId`), so nodes never
//! own each other.

pub mod error;
pub use crate::error::{ElementNotFoundError, NodeError};

pub mod node;
pub use crate::node::{Adjacents, AsNodeId, Node, NodeId};
