//! Data model for analyzer traces: blocks, their types, the adjacency matrix and
//! the annotated multigraph assembled from both.

mod adjacency_matrix;
mod annotated_graph;
#[cfg(test)]
mod annotated_graph_test;
mod block;
#[cfg(test)]
mod block_test;
mod block_type;
#[cfg(test)]
mod block_type_test;
mod edge;
mod parse_result;

pub use adjacency_matrix::AdjacencyMatrix;
pub use annotated_graph::{AnnotatedGraph, EdgeId, GraphEdge};
pub use block::Block;
pub use block_type::BlockType;
pub use edge::{Edge, VertexId};
pub use parse_result::ParseResult;
