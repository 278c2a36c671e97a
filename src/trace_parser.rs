//! Line-oriented parser for pseudoknot analyzer traces.
//!
//! The trace mixes free-form prose with a small fixed vocabulary:
//! - `New Block` opens a block (and closes the previous one),
//! - `(a,b)` tokens list the block's edges, several per line allowed,
//! - one of the [`BlockType::PHRASES`] names the block's type,
//! - `Summary information` closes the last block and ends the scan.
//!
//! Anything else is ignored. Parsing never fails; a trace that ends inside a
//! block without a closing marker drops that block and is flagged `truncated`.

use std::ops::ControlFlow;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::types::{Block, BlockType, Edge, ParseResult};

/// Marker that opens a new block.
pub const BLOCK_START_MARKER: &str = "New Block";

/// Marker that closes the last block and ends the trace.
pub const SUMMARY_MARKER: &str = "Summary information";

static EDGE_TOKEN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\(([0-9]+),([0-9]+)\)").expect("edge token pattern is valid"));

/// What a single line means to a parser that is inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind {
  /// One or more edge tokens, left to right.
  Edges(Vec<Edge>),
  /// A type phrase.
  Type(BlockType),
  Summary,
  BlockStart,
  Other,
}

/// Classifies a line in fixed order: edges, type phrase, summary, block start.
pub(crate) fn classify_line(line: &str) -> LineKind {
  if EDGE_TOKEN.is_match(line) {
    return LineKind::Edges(extract_edges(line));
  }
  if let Some(ty) = BlockType::from_phrase(line) {
    return LineKind::Type(ty);
  }
  if line.contains(SUMMARY_MARKER) {
    return LineKind::Summary;
  }
  if line.contains(BLOCK_START_MARKER) {
    return LineKind::BlockStart;
  }
  LineKind::Other
}

/// Extracts every `(a,b)` token on `line`, left to right.
///
/// Tokens whose numbers do not fit a vertex id are skipped.
pub fn extract_edges(line: &str) -> Vec<Edge> {
  EDGE_TOKEN
    .captures_iter(line)
    .filter_map(|caps| {
      let v1 = caps[1].parse().ok();
      let v2 = caps[2].parse().ok();
      match (v1, v2) {
        (Some(v1), Some(v2)) => Some(Edge::new(v1, v2)),
        _ => {
          warn!(token = &caps[0], "edge token out of vertex id range, skipped");
          None
        }
      }
    })
    .collect()
}

/// Scanner phase.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
  /// Waiting for the first block boundary.
  Idle,
  /// Accumulating edges of the current block.
  InBlock {
    edges: Vec<Edge>,
    block_type: Option<BlockType>,
  },
  /// Summary marker seen; remaining input is ignored.
  Terminated,
}

/// Incremental trace parser. Feed lines with [`feed_line`](Self::feed_line) and
/// collect the result with [`finish`](Self::finish).
#[derive(Debug, Clone)]
pub struct TraceParser {
  state: State,
  blocks: Vec<Block>,
}

impl Default for TraceParser {
  fn default() -> Self {
    Self::new()
  }
}

impl TraceParser {
  pub fn new() -> Self {
    Self {
      state: State::Idle,
      blocks: Vec::new(),
    }
  }

  /// True once the summary marker has been seen.
  pub fn is_terminated(&self) -> bool {
    self.state == State::Terminated
  }

  /// Number of blocks finished so far.
  pub fn blocks_finished(&self) -> usize {
    self.blocks.len()
  }

  /// Consumes one line. Returns `Break` once the scan has terminated.
  pub fn feed_line(&mut self, line: &str) -> ControlFlow<()> {
    let state = std::mem::replace(&mut self.state, State::Terminated);
    self.state = match state {
      State::Terminated => State::Terminated,
      State::Idle => self.step_idle(line),
      State::InBlock { edges, block_type } => self.step_in_block(line, edges, block_type),
    };
    if self.is_terminated() {
      ControlFlow::Break(())
    } else {
      ControlFlow::Continue(())
    }
  }

  fn step_idle(&mut self, line: &str) -> State {
    if line.contains(BLOCK_START_MARKER) {
      debug!("block boundary, entering block");
      State::InBlock {
        edges: Vec::new(),
        block_type: None,
      }
    } else if line.contains(SUMMARY_MARKER) {
      debug!("summary marker before any block");
      State::Terminated
    } else {
      State::Idle
    }
  }

  fn step_in_block(
    &mut self,
    line: &str,
    mut edges: Vec<Edge>,
    mut block_type: Option<BlockType>,
  ) -> State {
    match classify_line(line) {
      LineKind::Edges(found) => {
        edges.extend(found);
      }
      LineKind::Type(ty) => {
        if let Some(prev) = block_type
          && prev != ty
        {
          debug!(previous = %prev, current = %ty, "block type phrase overridden");
        }
        block_type = Some(ty);
      }
      LineKind::Summary => {
        self.flush(edges, block_type);
        return State::Terminated;
      }
      LineKind::BlockStart => {
        self.flush(edges, block_type);
        return State::InBlock {
          edges: Vec::new(),
          block_type: None,
        };
      }
      LineKind::Other => {}
    }
    State::InBlock { edges, block_type }
  }

  /// Appends the accumulated block unless it has no edges.
  fn flush(&mut self, edges: Vec<Edge>, block_type: Option<BlockType>) {
    if edges.is_empty() {
      debug!("empty block discarded");
      return;
    }
    let block_type = block_type.unwrap_or_default();
    debug!(
      index = self.blocks.len(),
      edges = edges.len(),
      block_type = %block_type,
      "block finished"
    );
    self.blocks.push(Block::new(edges, block_type));
  }

  /// Ends the scan. A block still open at this point is dropped and the result
  /// is flagged as truncated.
  pub fn finish(self) -> ParseResult {
    let (truncated, dropped_edges) = match &self.state {
      State::InBlock { edges, .. } => {
        warn!(
          dropped_edges = edges.len(),
          "trace ended inside a block without a summary marker; trailing block dropped"
        );
        (true, edges.len())
      }
      State::Idle | State::Terminated => (false, 0),
    };
    ParseResult {
      blocks: self.blocks,
      truncated,
      dropped_edges,
    }
  }
}

/// Parses a sequence of trace lines.
pub fn parse<I, S>(lines: I) -> ParseResult
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut parser = TraceParser::new();
  for line in lines {
    if parser.feed_line(line.as_ref()).is_break() {
      break;
    }
  }
  parser.finish()
}

/// Parses a whole trace held in memory.
pub fn parse_str(text: &str) -> ParseResult {
  parse(text.lines())
}
