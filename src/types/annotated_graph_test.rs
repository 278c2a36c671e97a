//! Tests for `AnnotatedGraph`.

use super::{AnnotatedGraph, BlockType};

fn sample() -> AnnotatedGraph {
  let mut g = AnnotatedGraph::new();
  g.add_edge(0, 1, Some(2));
  g.add_edge(0, 1, Some(2));
  let e = g.add_edge(1, 0, None);
  g.provenance.insert(e, 0);
  let e = g.add_edge(2, 3, None);
  g.provenance.insert(e, 1);
  g.block_types = vec![BlockType::Regular, BlockType::Unknown];
  g
}

#[test]
fn add_edge_registers_vertices() {
  let g = sample();
  assert_eq!(g.vertex_count(), 4);
  assert_eq!(g.edge_count(), 4);
}

#[test]
fn multiplicity_is_undirected() {
  let g = sample();
  assert_eq!(g.multiplicity(0, 1), 3);
  assert_eq!(g.multiplicity(1, 0), 3);
  assert_eq!(g.multiplicity(0, 3), 0);
}

#[test]
fn edges_between_returns_ids() {
  let g = sample();
  let ids: Vec<_> = g.edges_between(1, 0).into_iter().map(|(id, _)| id).collect();
  assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn provenance_lookup() {
  let g = sample();
  assert_eq!(g.block_of(0), None);
  assert_eq!(g.block_of(2), Some(0));
  assert_eq!(g.block_of(3), Some(1));
  let block1 = g.edges_of_block(1);
  assert_eq!(block1.len(), 1);
  assert_eq!(block1[0].1.source, 2);
}

#[test]
fn legend_in_block_order() {
  let g = sample();
  assert_eq!(
    g.legend(),
    vec![(0, BlockType::Regular), (1, BlockType::Unknown)]
  );
}

#[test]
fn self_loops_counted() {
  let mut g = AnnotatedGraph::new();
  g.add_edge(4, 4, None);
  assert_eq!(g.self_loop_count(), 1);
  assert_eq!(g.vertex_count(), 1);
}
