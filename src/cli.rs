//! Command-line surface and run orchestration.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::adapters::dot;
use crate::adapters::json::JsonSymbolSource;
use crate::app::engine::AnalysisSession;
use crate::domain::ignore::IgnoreSet;
use crate::domain::ports::SymbolSource as _;

/// Default denylist: ubiquitous standard-library types that would otherwise
/// dominate every graph.
const DEFAULT_IGNORED: &str = "_.error,fmt.State,hash.Hash,fmt.Stringer,hash.Hash32";

/// Draws the dependency graph of the named data types in a codebase.
#[derive(Debug, Parser)]
#[command(name = "typedep", version, about)]
pub struct Cli {
    /// Resolved symbol dumps (JSON), one per front-end export; merged in
    /// order.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// What data types to ignore? (comma delimited canonical names)
    #[arg(long, default_value = DEFAULT_IGNORED)]
    pub ignored: String,

    /// Output file name.
    #[arg(long, default_value = "deps.dot")]
    pub out: PathBuf,
}

pub fn run(cli: Cli) -> Result<()> {
    let ignore = IgnoreSet::from_comma_delimited(&cli.ignored);
    if !ignore.is_empty() {
        info!(ignored = %cli.ignored, "ignoring data types");
    }

    let data = JsonSymbolSource::new(cli.inputs).load()?;
    let graph = AnalysisSession::new(ignore).run(&data);
    dot::write_file(&graph, &cli.out)?;

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        out = %cli.out.display(),
        "wrote dependency graph"
    );
    Ok(())
}
