//! Errors raised while loading inputs or writing exports.
//!
//! Trace parsing never fails; these cover structural problems with files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("I/O error on {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("I/O error reading stream: {0}")]
  Stream(#[from] std::io::Error),

  #[error("adjacency matrix is empty")]
  EmptyMatrix,

  #[error("adjacency matrix row {row}, column {col}: '{token}' is not a non-negative integer")]
  InvalidMatrixEntry {
    row: usize,
    col: usize,
    token: String,
  },

  #[error("adjacency matrix row {row} has {found} entries, expected {expected}")]
  RaggedMatrix {
    row: usize,
    expected: usize,
    found: usize,
  },

  #[error("JSON serialization error: {0}")]
  Json(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Error::Io {
      path: path.into(),
      source,
    }
  }
}

pub type Result<T> = std::result::Result<T, Error>;
