//! A vertex pair as printed in the analyzer trace.

use serde::{Deserialize, Serialize};

/// Vertex id: row/column index in the adjacency matrix.
pub type VertexId = usize;

/// A vertex pair `(v1, v2)` in the order it appears in the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
  pub v1: VertexId,
  pub v2: VertexId,
}

impl Edge {
  pub fn new(v1: VertexId, v2: VertexId) -> Self {
    Self { v1, v2 }
  }

  pub fn is_self_loop(&self) -> bool {
    self.v1 == self.v2
  }
}

impl From<(VertexId, VertexId)> for Edge {
  fn from((v1, v2): (VertexId, VertexId)) -> Self {
    Self::new(v1, v2)
  }
}
