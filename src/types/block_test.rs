//! Tests for `Block` and `ParseResult`.

use super::{Block, BlockType, Edge, ParseResult};

fn block(pairs: &[(usize, usize)], ty: BlockType) -> Block {
  Block::new(pairs.iter().copied().map(Edge::from).collect(), ty)
}

#[test]
fn block_keeps_duplicates() {
  let b = block(&[(0, 1), (0, 1)], BlockType::Regular);
  assert_eq!(b.len(), 2);
  assert!(!b.is_empty());
}

#[test]
fn block_types_align_with_blocks() {
  let r = ParseResult {
    blocks: vec![
      block(&[(0, 1)], BlockType::Unknown),
      block(&[(2, 3), (3, 4)], BlockType::RecursivePk),
    ],
    truncated: false,
    dropped_edges: 0,
  };
  assert_eq!(
    r.block_types(),
    vec![BlockType::Unknown, BlockType::RecursivePk]
  );
  assert_eq!(r.len(), 2);
  assert_eq!(r.edge_count(), 3);
}

#[test]
fn type_counts_per_type() {
  let r = ParseResult {
    blocks: vec![
      block(&[(0, 1)], BlockType::Regular),
      block(&[(1, 2)], BlockType::Regular),
      block(&[(2, 3)], BlockType::NonRecursivePk),
    ],
    ..Default::default()
  };
  let counts = r.type_counts();
  assert_eq!(counts.get(&BlockType::Regular), Some(&2));
  assert_eq!(counts.get(&BlockType::NonRecursivePk), Some(&1));
  assert_eq!(counts.get(&BlockType::RecursivePk), None);
}

#[test]
fn edge_self_loop() {
  let e = Edge::new(5, 2);
  assert!(!e.is_self_loop());
  assert!(Edge::new(3, 3).is_self_loop());
}
