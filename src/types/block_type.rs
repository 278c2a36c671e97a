//! Structural classification of a block.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural classification of a block, as announced by the analyzer trace.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
  RecursivePk,
  NonRecursivePk,
  Regular,
  /// No type phrase was seen before the block closed.
  #[default]
  Unknown,
}

impl BlockType {
  /// Type phrases in match priority order. The first phrase contained in a line wins.
  pub const PHRASES: [(&'static str, BlockType); 3] = [
    ("The block is a recursive PK", BlockType::RecursivePk),
    ("this block represents a regular-region", BlockType::Regular),
    ("this block represents a pseudoknot", BlockType::NonRecursivePk),
  ];

  /// Returns the type announced by `line`, if it contains one of the fixed phrases.
  pub fn from_phrase(line: &str) -> Option<BlockType> {
    Self::PHRASES
      .iter()
      .find(|(phrase, _)| line.contains(phrase))
      .map(|(_, ty)| *ty)
  }

  /// Human-readable legend label.
  pub fn label(&self) -> &'static str {
    match self {
      BlockType::RecursivePk => "Recursive PK",
      BlockType::NonRecursivePk => "Non-recursive PK",
      BlockType::Regular => "Regular",
      BlockType::Unknown => "Unknown",
    }
  }
}

impl fmt::Display for BlockType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}
