//! Node registry: canonical type name → stable node id.
//!
//! Ids are 0-based, assigned at first sighting, and never reused; canonical
//! name → id is a bijection for the lifetime of a run. The registry is shared
//! mutable state across traversal workers, so lookup-or-insert runs as a
//! single critical section over both the map and the node list.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::semantic::TypeDef;

/// Node identifier, dense and 0-based in registration order.
pub type NodeId = u32;

/// One registered named type: its id and a handle on its definition for
/// later traversal and rendering.
#[derive(Debug, Clone)]
pub struct TypeNode {
    pub id: NodeId,
    pub def: Arc<TypeDef>,
}

impl TypeNode {
    pub fn canonical(&self) -> String {
        self.def.canonical()
    }
}

impl std::fmt::Display for TypeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.def.name.fmt(f)
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    ids: HashMap<String, NodeId>,
    nodes: Vec<TypeNode>,
}

/// Grow-only registry of every named type sighted during a run, either as a
/// traversal source or as a non-ignored dependency target. Owned by the
/// analysis session; there is no removal operation.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    inner: Mutex<RegistryInner>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `def` to its node id, creating the node on first sighting.
    /// Idempotent: the same canonical name always yields the same id, even
    /// under concurrent registration from multiple workers.
    pub fn register(&self, def: &Arc<TypeDef>) -> NodeId {
        let canonical = def.canonical();
        let mut inner = self.inner.lock();
        if let Some(&id) = inner.ids.get(&canonical) {
            return id;
        }
        let id = inner.nodes.len() as NodeId;
        inner.nodes.push(TypeNode {
            id,
            def: Arc::clone(def),
        });
        inner.ids.insert(canonical, id);
        id
    }

    pub fn lookup(&self, canonical: &str) -> Option<NodeId> {
        self.inner.lock().ids.get(canonical).copied()
    }

    /// Snapshot of all registered nodes in id order.
    pub fn nodes(&self) -> Vec<TypeNode> {
        self.inner.lock().nodes.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
