//! Weighted multigraph with per-edge block provenance.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{BlockType, VertexId};

/// Index of an edge instance in [`AnnotatedGraph::edges`].
pub type EdgeId = usize;

/// One edge instance of the multigraph. Parallel edges are separate instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
  pub source: VertexId,
  pub target: VertexId,
  /// Matrix weight; `None` for edges asserted only by a block.
  pub weight: Option<u32>,
}

impl GraphEdge {
  /// True if this edge joins `a` and `b` in either direction.
  pub fn joins(&self, a: VertexId, b: VertexId) -> bool {
    (self.source == a && self.target == b) || (self.source == b && self.target == a)
  }
}

/// Undirected multigraph handed to renderers.
///
/// Edge instances that came from a block are listed in `provenance`, mapping the
/// edge id to the index of the block that asserted it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedGraph {
  pub vertices: BTreeSet<VertexId>,
  pub edges: Vec<GraphEdge>,
  pub provenance: BTreeMap<EdgeId, usize>,
  /// Type of each block, indexed by block index.
  pub block_types: Vec<BlockType>,
}

impl AnnotatedGraph {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds an edge instance (and its endpoints) and returns its id.
  pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: Option<u32>) -> EdgeId {
    self.vertices.insert(source);
    self.vertices.insert(target);
    self.edges.push(GraphEdge {
      source,
      target,
      weight,
    });
    self.edges.len() - 1
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  /// All edge instances joining `a` and `b`, with their ids.
  pub fn edges_between(&self, a: VertexId, b: VertexId) -> Vec<(EdgeId, &GraphEdge)> {
    self
      .edges
      .iter()
      .enumerate()
      .filter(|(_, e)| e.joins(a, b))
      .collect()
  }

  /// Number of parallel edge instances joining `a` and `b`.
  pub fn multiplicity(&self, a: VertexId, b: VertexId) -> usize {
    self.edges.iter().filter(|e| e.joins(a, b)).count()
  }

  /// Block index that asserted edge `id`, if any.
  pub fn block_of(&self, id: EdgeId) -> Option<usize> {
    self.provenance.get(&id).copied()
  }

  /// Edge instances asserted by block `block`, in insertion order.
  pub fn edges_of_block(&self, block: usize) -> Vec<(EdgeId, &GraphEdge)> {
    self
      .provenance
      .iter()
      .filter(|(_, b)| **b == block)
      .filter_map(|(id, _)| self.edges.get(*id).map(|e| (*id, e)))
      .collect()
  }

  /// `(block index, type)` pairs in block order, for legends.
  pub fn legend(&self) -> Vec<(usize, BlockType)> {
    self.block_types.iter().copied().enumerate().collect()
  }

  pub fn self_loop_count(&self) -> usize {
    self.edges.iter().filter(|e| e.source == e.target).count()
  }
}
