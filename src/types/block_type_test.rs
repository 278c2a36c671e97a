//! Tests for `BlockType`.

use super::BlockType;

#[test]
fn default_is_unknown() {
  assert_eq!(BlockType::default(), BlockType::Unknown);
}

#[test]
fn from_phrase_recursive() {
  assert_eq!(
    BlockType::from_phrase("  The block is a recursive PK with 3 arcs"),
    Some(BlockType::RecursivePk)
  );
}

#[test]
fn from_phrase_regular() {
  assert_eq!(
    BlockType::from_phrase("this block represents a regular-region"),
    Some(BlockType::Regular)
  );
}

#[test]
fn from_phrase_pseudoknot() {
  assert_eq!(
    BlockType::from_phrase("so this block represents a pseudoknot."),
    Some(BlockType::NonRecursivePk)
  );
}

#[test]
fn from_phrase_is_case_sensitive() {
  assert_eq!(BlockType::from_phrase("THE BLOCK IS A RECURSIVE PK"), None);
  assert_eq!(BlockType::from_phrase("nothing to see"), None);
}

#[test]
fn from_phrase_priority_recursive_first() {
  let line = "this block represents a pseudoknot; The block is a recursive PK";
  assert_eq!(BlockType::from_phrase(line), Some(BlockType::RecursivePk));
}

#[test]
fn from_phrase_priority_regular_before_pseudoknot() {
  let line = "this block represents a pseudoknot or this block represents a regular-region";
  assert_eq!(BlockType::from_phrase(line), Some(BlockType::Regular));
}

#[test]
fn display_labels() {
  assert_eq!(BlockType::RecursivePk.to_string(), "Recursive PK");
  assert_eq!(BlockType::NonRecursivePk.to_string(), "Non-recursive PK");
  assert_eq!(BlockType::Regular.to_string(), "Regular");
  assert_eq!(BlockType::Unknown.to_string(), "Unknown");
}

#[test]
fn serializes_snake_case() {
  let json = serde_json::to_string(&BlockType::NonRecursivePk).unwrap();
  assert_eq!(json, "\"non_recursive_pk\"");
}
