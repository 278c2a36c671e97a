//! Loading traces and matrices from files or async streams.

use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};

use crate::error::{Error, Result};
use crate::matrix_parser::parse_matrix;
use crate::trace_parser::TraceParser;
use crate::types::{AdjacencyMatrix, ParseResult};

/// Parses a trace from an async line source, e.g. the analyzer's stdout.
/// Stops reading at the summary marker.
///
/// Lines are decoded lossily, so invalid UTF-8 in prose never fails the parse.
#[instrument(level = "trace", skip(reader))]
pub async fn read_trace<R>(mut reader: R) -> Result<ParseResult>
where
  R: AsyncBufRead + Unpin,
{
  let mut parser = TraceParser::new();
  let mut buf = Vec::new();
  let mut lines_read = 0usize;
  loop {
    buf.clear();
    if reader.read_until(b'\n', &mut buf).await? == 0 {
      break;
    }
    lines_read += 1;
    let line = String::from_utf8_lossy(&buf);
    let line = line.trim_end_matches(['\n', '\r']);
    if parser.feed_line(line).is_break() {
      break;
    }
  }
  debug!(
    lines_read,
    blocks = parser.blocks_finished(),
    terminated = parser.is_terminated(),
    "trace stream consumed"
  );
  Ok(parser.finish())
}

/// Reads and parses the trace file at `path`.
#[instrument(level = "trace", skip(path))]
pub async fn load_trace(path: &Path) -> Result<ParseResult> {
  let file = tokio::fs::File::open(path)
    .await
    .map_err(|e| Error::io(path, e))?;
  let parsed = read_trace(BufReader::new(file)).await.map_err(|e| match e {
    Error::Stream(source) => Error::io(path, source),
    other => other,
  })?;
  info!(
    path = %path.display(),
    blocks = parsed.len(),
    truncated = parsed.truncated,
    "trace loaded"
  );
  Ok(parsed)
}

/// Reads and parses the adjacency matrix file at `path`.
#[instrument(level = "trace", skip(path))]
pub async fn load_matrix(path: &Path) -> Result<AdjacencyMatrix> {
  let text = tokio::fs::read_to_string(path)
    .await
    .map_err(|e| Error::io(path, e))?;
  let matrix = parse_matrix(&text)?;
  info!(path = %path.display(), dimension = matrix.dimension(), "matrix loaded");
  Ok(matrix)
}
