//! Reader for whitespace-separated adjacency matrix text.
//!
//! One row per line, integers separated by whitespace. Blank lines are skipped.

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::AdjacencyMatrix;

/// Parses one matrix row. `row` is the zero-based row index used in errors.
pub(crate) fn parse_row(row: usize, line: &str) -> Result<Vec<u32>> {
  line
    .split_whitespace()
    .enumerate()
    .map(|(col, token)| {
      token.parse::<u32>().map_err(|_| Error::InvalidMatrixEntry {
        row,
        col,
        token: token.to_string(),
      })
    })
    .collect()
}

/// Parses a full matrix from lines, failing on bad tokens or a non-square shape.
pub fn parse_matrix_lines<I, S>(lines: I) -> Result<AdjacencyMatrix>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut rows = Vec::new();
  for line in lines {
    let line = line.as_ref();
    if line.trim().is_empty() {
      continue;
    }
    rows.push(parse_row(rows.len(), line)?);
  }
  let matrix = AdjacencyMatrix::from_rows(rows)?;
  debug!(dimension = matrix.dimension(), "adjacency matrix parsed");
  Ok(matrix)
}

/// Parses a full matrix held in memory.
pub fn parse_matrix(text: &str) -> Result<AdjacencyMatrix> {
  parse_matrix_lines(text.lines())
}
