//! Test fixture generators and graph query helpers for integration tests.
#![allow(dead_code)]

use typedep::domain::graph::DepGraph;
use typedep::domain::semantic::{
    Field, FuncDef, MethodDecl, ModuleData, SemanticData, TypeDef, TypeName, TypeRef, TypeShape,
};

/// Module path shared by all fixture types.
pub const MODULE: &str = "example.com/app";

pub fn name(local: &str) -> TypeName {
    TypeName::new(MODULE, local)
}

pub fn named(local: &str) -> TypeRef {
    TypeRef::named(name(local))
}

pub fn basic(local: &str, exported: bool) -> TypeDef {
    TypeDef {
        name: name(local),
        exported,
        shape: TypeShape::Basic,
    }
}

pub fn record(local: &str, exported: bool, fields: Vec<(&str, TypeRef)>) -> TypeDef {
    TypeDef {
        name: name(local),
        exported,
        shape: TypeShape::Record {
            fields: fields
                .into_iter()
                .map(|(field_name, ty)| Field {
                    name: field_name.to_string(),
                    ty,
                })
                .collect(),
        },
    }
}

pub fn interface(
    local: &str,
    exported: bool,
    embedded: Vec<TypeRef>,
    methods: Vec<(&str, bool)>,
) -> TypeDef {
    TypeDef {
        name: name(local),
        exported,
        shape: TypeShape::Interface {
            embedded,
            methods: methods
                .into_iter()
                .map(|(method_name, method_exported)| MethodDecl {
                    name: method_name.to_string(),
                    exported: method_exported,
                })
                .collect(),
        },
    }
}

pub fn method(receiver: &str, by_pointer: bool, params: Vec<TypeRef>, results: Vec<TypeRef>) -> FuncDef {
    let receiver_ref = if by_pointer {
        TypeRef::Pointer {
            elem: Box::new(named(receiver)),
        }
    } else {
        named(receiver)
    };
    FuncDef {
        name: format!("{MODULE}.({receiver}).Method"),
        receiver: Some(receiver_ref),
        params,
        results,
    }
}

pub fn semantic_data(types: Vec<TypeDef>, functions: Vec<FuncDef>) -> SemanticData {
    SemanticData {
        modules: vec![ModuleData {
            path: MODULE.to_string(),
            types,
            functions,
        }],
    }
}

/// All node labels in the final graph, by canonical name.
pub fn node_names(graph: &DepGraph) -> Vec<String> {
    graph
        .graph
        .node_weights()
        .map(|node| node.canonical())
        .collect()
}

pub fn has_node(graph: &DepGraph, local: &str) -> bool {
    node_names(graph).contains(&name(local).canonical())
}

/// Weight of the edge `from → to` in the final graph, if retained.
pub fn edge_weight(graph: &DepGraph, from: &str, to: &str) -> Option<f64> {
    let from_canonical = name(from).canonical();
    let to_canonical = name(to).canonical();
    let from_idx = graph
        .graph
        .node_indices()
        .find(|&idx| graph.graph[idx].canonical() == from_canonical)?;
    let to_idx = graph
        .graph
        .node_indices()
        .find(|&idx| graph.graph[idx].canonical() == to_canonical)?;
    let edge = graph.graph.find_edge(from_idx, to_idx)?;
    Some(graph.graph[edge].weight)
}

/// Number of parallel edges `from → to` (the dedup invariant says 0 or 1).
pub fn edge_multiplicity(graph: &DepGraph, from: &str, to: &str) -> usize {
    let from_canonical = name(from).canonical();
    let to_canonical = name(to).canonical();
    graph
        .graph
        .edge_indices()
        .filter(|&edge| {
            let (a, b) = graph.graph.edge_endpoints(edge).unwrap();
            graph.graph[a].canonical() == from_canonical
                && graph.graph[b].canonical() == to_canonical
        })
        .count()
}
