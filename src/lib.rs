//! # pk-block-trace
//!
//! Typed model of the block decomposition printed by a pseudoknot structure
//! analyzer, and assembly of that model into a weighted multigraph.
//!
//! ## Pipeline
//!
//! trace text → [`trace_parser`] → [`ParseResult`] (typed blocks)
//! adjacency matrix text → [`matrix_parser`] → [`AdjacencyMatrix`]
//! both → [`assembler::assemble`] → [`AnnotatedGraph`] → [`graph_io`] export.
//!
//! Each stage is a plain function over typed values, so every stage can be
//! used without touching files.

pub mod assembler;
pub mod error;
pub mod graph_io;
#[cfg(test)]
mod graph_io_test;
pub mod matrix_parser;
pub mod trace_io;
pub mod trace_parser;
pub mod types;

pub use assembler::assemble;
pub use error::{Error, Result};
pub use trace_parser::{TraceParser, parse, parse_str};
pub use types::{
  AdjacencyMatrix, AnnotatedGraph, Block, BlockType, Edge, GraphEdge, ParseResult, VertexId,
};
