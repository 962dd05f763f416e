//! Edge builder: structural traversal of type definitions and method
//! signatures, discovering every named-type reference one level deep.
//!
//! Each discovered reference flows through the same pipeline: ignore check
//! on the destination, resolution of both endpoints through the registry,
//! weight via the cost heuristic, then insertion into the destination-keyed
//! edge map. The map holds at most one weight per ordered (source,
//! destination) pair; a later discovery of the same pair overwrites the
//! earlier weight.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

use crate::domain::cost::cost;
use crate::domain::ignore::IgnoreSet;
use crate::domain::registry::{NodeId, TypeRegistry};
use crate::domain::semantic::{FuncDef, TypeDef, TypeIndex, TypeName, TypeRef, TypeShape};

/// Accumulated edges, keyed destination → source → weight.
pub type EdgeMap = HashMap<NodeId, HashMap<NodeId, f64>>;

/// Discovers dependency edges for one analysis run. Shares the session's
/// registry, type index, and ignore set; safe to drive from parallel workers
/// (the edge map sits behind its own mutex).
pub struct EdgeBuilder<'a> {
    registry: &'a TypeRegistry,
    index: &'a TypeIndex,
    ignore: &'a IgnoreSet,
    edges: Mutex<EdgeMap>,
}

impl<'a> EdgeBuilder<'a> {
    pub fn new(registry: &'a TypeRegistry, index: &'a TypeIndex, ignore: &'a IgnoreSet) -> Self {
        Self {
            registry,
            index,
            ignore,
            edges: Mutex::new(EdgeMap::new()),
        }
    }

    /// Walk the underlying shape of one named type definition, recording an
    /// edge per named-type reference reachable one level deep.
    pub fn process_type(&self, def: &Arc<TypeDef>) {
        match &def.shape {
            TypeShape::Record { fields } => {
                for field in fields {
                    match &field.ty {
                        TypeRef::Named { name } => self.add(def, name),
                        TypeRef::Basic { .. } => continue,
                        TypeRef::Pointer { elem } => {
                            if let Some(name) = elem.as_named() {
                                self.add(def, name);
                            } else {
                                warn!("field {} of *{} unhandled", field.name, elem);
                            }
                        }
                        TypeRef::Slice { elem } | TypeRef::Chan { elem } => {
                            if let Some(name) = elem.as_named() {
                                self.add(def, name);
                            }
                        }
                        TypeRef::Map { key, elem } => {
                            if let Some(name) = elem.as_named() {
                                self.add(def, name);
                            }
                            if let Some(name) = key.as_named() {
                                self.add(def, name);
                            }
                        }
                        other => {
                            warn!("field {} of {} unhandled", field.name, other);
                        }
                    }
                }
            }
            TypeShape::Interface { embedded, .. } => {
                for embed in embedded {
                    if let Some(name) = embed.as_named() {
                        self.add(def, name);
                    }
                }
            }
            TypeShape::Slice { elem } => {
                if let Some(name) = elem.as_named() {
                    self.add(def, name);
                }
            }
            TypeShape::Signature { params, results } => {
                for param in params {
                    if let Some(name) = param.as_named() {
                        self.add(def, name);
                    }
                }
                for result in results {
                    if let Some(name) = result.as_named() {
                        self.add(def, name);
                    }
                }
            }
            other => {
                warn!("{} of kind {} unhandled", def.canonical(), other.kind_name());
            }
        }
    }

    /// Record method edges: the receiver's named type (dereferencing one
    /// pointer level) is the source, each named parameter and result type a
    /// destination. Functions without a receiver contribute nothing.
    pub fn process_function(&self, func: &FuncDef) {
        let Some(receiver) = &func.receiver else {
            return;
        };

        let from_name = match receiver {
            TypeRef::Named { name } => name,
            TypeRef::Pointer { elem } => match elem.as_named() {
                Some(name) => name,
                None => {
                    warn!("receiver of {} is not named", func.name);
                    return;
                }
            },
            other => {
                warn!("receiver type {} of {} not handled", other, func.name);
                return;
            }
        };
        let Some(from) = self.index.resolve(from_name) else {
            warn!(
                "receiver type {} of {} has no definition",
                from_name, func.name
            );
            return;
        };
        let from = Arc::clone(from);

        for param in &func.params {
            if let Some(name) = param.as_named() {
                self.add(&from, name);
            }
        }
        for result in &func.results {
            if let Some(name) = result.as_named() {
                self.add(&from, name);
            }
        }
    }

    /// Record one dependency `from → to`, unless the destination is ignored.
    /// An ignored destination still registers the (non-ignored) source so it
    /// stays visible as an isolated node.
    fn add(&self, from: &Arc<TypeDef>, to_name: &TypeName) {
        let to_canonical = to_name.canonical();
        if self.ignore.is_ignored(&to_canonical) {
            if !self.ignore.is_ignored(&from.canonical()) {
                self.registry.register(from);
            }
            return;
        }

        // Fully resolved input always has a definition for every reference;
        // a missing one is treated like an unrecognized shape.
        let Some(to) = self.index.resolve(to_name) else {
            warn!("reference to {to_canonical} has no definition, skipped");
            return;
        };

        let from_id = self.registry.register(from);
        let to_id = self.registry.register(to);
        let weight = cost(from, to);

        self.edges
            .lock()
            .entry(to_id)
            .or_default()
            .insert(from_id, weight);
    }

    /// Consume the builder, yielding the accumulated edge map.
    pub fn into_edges(self) -> EdgeMap {
        self.edges.into_inner()
    }
}
