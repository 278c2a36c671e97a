//! A typed run of edges between two block boundaries.

use serde::{Deserialize, Serialize};

use super::{BlockType, Edge};

/// A finished block: the edges listed between two boundaries, and the block's type.
///
/// Duplicate edges are kept; the same pair may be traversed more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
  pub edges: Vec<Edge>,
  pub block_type: BlockType,
}

impl Block {
  pub fn new(edges: Vec<Edge>, block_type: BlockType) -> Self {
    Self { edges, block_type }
  }

  pub fn len(&self) -> usize {
    self.edges.len()
  }

  pub fn is_empty(&self) -> bool {
    self.edges.is_empty()
  }
}
