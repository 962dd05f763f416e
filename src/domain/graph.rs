//! Graph assembler: materializes the registry and edge map as a weighted
//! directed petgraph, ready for a generic serializer.

use petgraph::graph::{DiGraph, NodeIndex};

use crate::domain::builder::EdgeMap;
use crate::domain::cost::METHOD_DEP;
use crate::domain::registry::{TypeNode, TypeRegistry};

/// One retained dependency edge with its coupling weight.
#[derive(Debug, Clone, PartialEq)]
pub struct DepEdge {
    pub weight: f64,
}

impl DepEdge {
    /// Weight rendered losslessly for the output document.
    pub fn weight_label(&self) -> String {
        format!("{}", self.weight)
    }

    /// Rendering color: "red" for the weight associated with method-derived
    /// edges, "blue" otherwise. The distinction is keyed on the weight value,
    /// not on edge provenance.
    pub fn color(&self) -> &'static str {
        if self.weight == METHOD_DEP { "red" } else { "blue" }
    }
}

impl std::fmt::Display for DepEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.weight.fmt(f)
    }
}

/// The final dependency graph: nodes are registered named types, edges are
/// directed "source structurally references destination" relations.
pub struct DepGraph {
    pub graph: DiGraph<TypeNode, DepEdge>,
}

impl DepGraph {
    /// Add every registered node once, then every edge triple except
    /// self-edges. Node indices follow registration order, so registry ids
    /// map directly onto petgraph indices.
    pub fn assemble(registry: &TypeRegistry, edges: EdgeMap) -> Self {
        let mut graph = DiGraph::new();
        for node in registry.nodes() {
            graph.add_node(node);
        }

        for (to, froms) in edges {
            for (from, weight) in froms {
                if from == to {
                    continue;
                }
                graph.add_edge(
                    NodeIndex::new(from as usize),
                    NodeIndex::new(to as usize),
                    DepEdge { weight },
                );
            }
        }

        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
