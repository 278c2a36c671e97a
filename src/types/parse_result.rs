//! Output of the trace parser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Block, BlockType};

/// Blocks recovered from one trace, in the order their boundaries appeared.
///
/// Each block carries its own type, so types can never drift out of alignment
/// with the blocks they describe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
  pub blocks: Vec<Block>,
  /// True when input ended inside a block with no closing marker.
  pub truncated: bool,
  /// Edges of the trailing block discarded because of truncation.
  pub dropped_edges: usize,
}

impl ParseResult {
  /// Block types aligned by position with `blocks`.
  pub fn block_types(&self) -> Vec<BlockType> {
    self.blocks.iter().map(|b| b.block_type).collect()
  }

  pub fn len(&self) -> usize {
    self.blocks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.blocks.is_empty()
  }

  /// Total number of edges over all blocks.
  pub fn edge_count(&self) -> usize {
    self.blocks.iter().map(Block::len).sum()
  }

  /// Number of blocks of each type.
  pub fn type_counts(&self) -> BTreeMap<BlockType, usize> {
    let mut counts = BTreeMap::new();
    for block in &self.blocks {
      *counts.entry(block.block_type).or_insert(0) += 1;
    }
    counts
  }
}
