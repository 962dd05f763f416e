//! Analysis session: owns the per-run state and drives the passes.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::info;

use crate::domain::builder::EdgeBuilder;
use crate::domain::graph::DepGraph;
use crate::domain::ignore::IgnoreSet;
use crate::domain::registry::TypeRegistry;
use crate::domain::semantic::{SemanticData, TypeDef, TypeIndex};

/// One analysis run over a pre-loaded symbol set. The session owns the node
/// registry, edge map, and ignore set; constructing a fresh session gives a
/// fresh graph, so independent runs can share a process.
pub struct AnalysisSession {
    ignore: IgnoreSet,
}

impl AnalysisSession {
    pub fn new(ignore: IgnoreSet) -> Self {
        Self { ignore }
    }

    /// Build the dependency graph: a type pass over every named type
    /// definition, then a method pass over every function definition, then
    /// assembly. Each unit's traversal is independent, so both passes fan
    /// out across workers; the registry and edge map are the only shared
    /// state.
    pub fn run(&self, data: &SemanticData) -> DepGraph {
        let index = TypeIndex::from_semantic_data(data);
        let registry = TypeRegistry::new();
        let builder = EdgeBuilder::new(&registry, &index, &self.ignore);

        let types: Vec<Arc<TypeDef>> = data
            .modules
            .iter()
            .flat_map(|module| module.types.iter())
            .filter_map(|def| index.resolve(&def.name).cloned())
            .collect();
        types.par_iter().for_each(|def| builder.process_type(def));

        let functions: Vec<_> = data
            .modules
            .iter()
            .flat_map(|module| module.functions.iter())
            .collect();
        functions
            .par_iter()
            .for_each(|func| builder.process_function(func));

        let graph = DepGraph::assemble(&registry, builder.into_edges());
        info!(
            types = types.len(),
            functions = functions.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "analysis complete"
        );
        graph
    }
}
