//! CLI: Parse an analyzer trace, assemble it with its adjacency matrix, and export the graph.
//!
//! Usage: `trace_blocks [OPTIONS] <trace> <matrix>`
//! Example: trace_blocks PKB236_out.txt PKB236.txt --json out/graph.json
//!
//! Set RUST_LOG=pk_block_trace=debug to see block boundaries and flushes.

use clap::Parser;
use pk_block_trace::{assemble, graph_io, trace_io};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Parse an analyzer trace into typed blocks and assemble the annotated multigraph.
#[derive(Parser, Debug)]
#[command(name = "trace_blocks")]
#[command(
  after_help = r#"Environment variables (override --json and --dot when set):
  TRACE_BLOCKS_JSON   Path to write the annotated graph as JSON.
  TRACE_BLOCKS_DOT    Path to write the annotated graph as Graphviz DOT.

Examples:
  trace_blocks PKB236_out.txt PKB236.txt
  trace_blocks --json out/graph.json --dot out/graph.dot PKB236_out.txt PKB236.txt"#
)]
struct Args {
  /// Write the annotated graph as JSON. Overridden by TRACE_BLOCKS_JSON if set.
  #[arg(long, value_name = "PATH")]
  json: Option<PathBuf>,

  /// Write the annotated graph as DOT. Overridden by TRACE_BLOCKS_DOT if set.
  #[arg(long, value_name = "PATH")]
  dot: Option<PathBuf>,

  /// Analyzer output (trace) file
  #[arg(value_name = "trace")]
  trace_path: PathBuf,

  /// Adjacency matrix file, one whitespace-separated row per line
  #[arg(value_name = "matrix")]
  matrix_path: PathBuf,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let json_out = env::var("TRACE_BLOCKS_JSON")
    .ok()
    .map(PathBuf::from)
    .or(args.json);
  let dot_out = env::var("TRACE_BLOCKS_DOT")
    .ok()
    .map(PathBuf::from)
    .or(args.dot);
  info!(json = ?json_out, dot = ?dot_out, "options (env or flags)");

  let parsed = match trace_io::load_trace(&args.trace_path).await {
    Ok(p) => p,
    Err(e) => {
      eprintln!("Error reading trace: {}", e);
      process::exit(1);
    }
  };

  let matrix = match trace_io::load_matrix(&args.matrix_path).await {
    Ok(m) => m,
    Err(e) => {
      eprintln!("Error reading matrix: {}", e);
      process::exit(1);
    }
  };

  let graph = assemble(&matrix, &parsed);

  if let Some(path) = &json_out
    && let Err(e) = graph_io::save_json(path, &graph)
  {
    eprintln!("Error writing JSON: {}", e);
    process::exit(1);
  }
  if let Some(path) = &dot_out
    && let Err(e) = graph_io::save_dot(path, &graph)
  {
    eprintln!("Error writing DOT: {}", e);
    process::exit(1);
  }

  println!("Blocks: {}", parsed.len());
  for (index, block) in parsed.blocks.iter().enumerate() {
    println!("  [{}] {} ({} edges)", index, block.block_type, block.len());
  }
  println!("By type:");
  for (ty, count) in parsed.type_counts() {
    println!("  {}: {}", ty, count);
  }
  println!("Truncated: {}", parsed.truncated);
  println!(
    "Graph: {} vertices, {} edges ({} from blocks)",
    graph.vertex_count(),
    graph.edge_count(),
    graph.provenance.len()
  );
}
