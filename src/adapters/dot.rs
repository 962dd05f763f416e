//! DOT writer: renders the assembled graph as a graph-description document.
//!
//! Serialization itself is generic (petgraph's dot encoder); this adapter
//! only supplies the per-node label and the per-edge `weight`/`color`
//! attributes.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use petgraph::dot::{Config, Dot};

use crate::domain::graph::DepGraph;

/// Render one node statement per registered type (label = canonical name)
/// and one directed edge statement per retained edge, annotated with its
/// weight and color.
pub fn render(graph: &DepGraph) -> String {
    let dot = Dot::with_attr_getters(
        &graph.graph,
        &[Config::NodeNoLabel, Config::EdgeNoLabel],
        &|_, edge| {
            let dep = edge.weight();
            format!(
                "weight = \"{}\", color = \"{}\"",
                dep.weight_label(),
                dep.color()
            )
        },
        &|_, (_, node)| format!("label = \"{}\"", escape_label(&node.canonical())),
    );
    format!("{dot}")
}

pub fn write_file(graph: &DepGraph, path: &Path) -> Result<()> {
    fs::write(path, render(graph))
        .with_context(|| format!("failed to write graph to {}", path.display()))
}

/// Escape special characters for DOT labels.
fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
