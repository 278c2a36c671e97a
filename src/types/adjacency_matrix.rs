//! Square weight matrix describing the base graph.

use serde::{Deserialize, Serialize};

use super::VertexId;
use crate::error::{Error, Result};

/// Square matrix of non-negative edge weights; row/column index is the vertex id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
  rows: Vec<Vec<u32>>,
}

impl AdjacencyMatrix {
  /// Builds a matrix from rows, failing unless it is non-empty and square.
  pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
    if rows.is_empty() {
      return Err(Error::EmptyMatrix);
    }
    let expected = rows.len();
    for (row, cells) in rows.iter().enumerate() {
      if cells.len() != expected {
        return Err(Error::RaggedMatrix {
          row,
          expected,
          found: cells.len(),
        });
      }
    }
    Ok(Self { rows })
  }

  /// Number of vertices (rows).
  pub fn dimension(&self) -> usize {
    self.rows.len()
  }

  pub fn get(&self, row: VertexId, col: VertexId) -> Option<u32> {
    self.rows.get(row).and_then(|r| r.get(col)).copied()
  }

  pub fn rows(&self) -> &[Vec<u32>] {
    &self.rows
  }

  /// Whether `m[i][j] == m[j][i]` for every cell.
  pub fn is_symmetric(&self) -> bool {
    let n = self.dimension();
    (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
  }

  /// Largest off-diagonal weight, or 0 if there is none.
  pub fn max_weight(&self) -> u32 {
    self.weighted_pairs().map(|(_, _, w)| w).max().unwrap_or(0)
  }

  /// Off-diagonal vertex pairs `(i, j)` with `i < j` and their undirected weight,
  /// the larger of `m[i][j]` and `m[j][i]`. Pairs of weight zero are skipped.
  pub fn weighted_pairs(&self) -> impl Iterator<Item = (VertexId, VertexId, u32)> + '_ {
    let n = self.dimension();
    (0..n).flat_map(move |i| {
      (i + 1..n).filter_map(move |j| {
        let w = self.rows[i][j].max(self.rows[j][i]);
        (w > 0).then_some((i, j, w))
      })
    })
  }
}
