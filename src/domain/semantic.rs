//! Resolved symbol representation: contract between the front-end (semantic
//! analysis / type checking, external to this crate) and the graph engine.
//!
//! The engine never parses source. A front-end exports, per compilation unit,
//! every named type definition with its underlying structural shape and every
//! function/method definition with its signature; this module is the shape of
//! that handoff (serde-serializable so it can travel as JSON).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Identity of a named type: defining module path plus local name.
///
/// Types in universe scope (built-ins like `error`) have no module; their
/// identity falls back to the bare intrinsic name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeName {
    pub module: Option<String>,
    pub name: String,
}

impl TypeName {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: Some(module.into()),
            name: name.into(),
        }
    }

    /// A type belonging to no module (universe scope).
    pub fn intrinsic(name: impl Into<String>) -> Self {
        Self {
            module: None,
            name: name.into(),
        }
    }

    /// Canonical rendering, unique across a codebase: `module.name`, or the
    /// intrinsic name when there is no defining module.
    pub fn canonical(&self) -> String {
        match &self.module {
            Some(module) => format!("{}.{}", module, self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{}.{}", module, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// One type *usage* in a field, parameter, or result position. Container
/// wrappers carry one level of structure; the builder unwraps exactly one
/// level when hunting for named element types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// Reference to a named type (resolvable through the [`TypeIndex`]).
    Named { name: TypeName },
    /// A basic/primitive type (`int`, `string`, ...); never a dependency.
    Basic { name: String },
    Pointer { elem: Box<TypeRef> },
    Slice { elem: Box<TypeRef> },
    Map { key: Box<TypeRef>, elem: Box<TypeRef> },
    Chan { elem: Box<TypeRef> },
    /// A shape the builder does not recognize (anonymous struct, unnamed
    /// function type, ...). Carries a printable description for the log line.
    Other { desc: String },
}

impl TypeRef {
    pub fn named(name: TypeName) -> Self {
        TypeRef::Named { name }
    }

    /// The named type directly at this reference, if any (no unwrapping).
    pub fn as_named(&self) -> Option<&TypeName> {
        match self {
            TypeRef::Named { name } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named { name } => write!(f, "{name}"),
            TypeRef::Basic { name } => f.write_str(name),
            TypeRef::Pointer { elem } => write!(f, "*{elem}"),
            TypeRef::Slice { elem } => write!(f, "[]{elem}"),
            TypeRef::Map { key, elem } => write!(f, "map[{key}]{elem}"),
            TypeRef::Chan { elem } => write!(f, "chan {elem}"),
            TypeRef::Other { desc } => f.write_str(desc),
        }
    }
}

/// One entry of an interface's complete method set. Only the visibility
/// matters to the engine: a single unexported method makes the interface
/// closed (unimplementable outside its defining module).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    pub exported: bool,
}

/// A field of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// Underlying structural kind of a named type definition. Closed sum: the
/// builder dispatches one handler per variant, with an explicit catch-all
/// for kinds that contribute no edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeShape {
    Basic,
    Record {
        fields: Vec<Field>,
    },
    Interface {
        /// Embedded named interfaces (dependency targets).
        embedded: Vec<TypeRef>,
        /// Complete method set, including methods from embedded interfaces.
        methods: Vec<MethodDecl>,
    },
    Slice {
        elem: TypeRef,
    },
    Map {
        key: TypeRef,
        elem: TypeRef,
    },
    Chan {
        elem: TypeRef,
    },
    Pointer {
        elem: TypeRef,
    },
    Signature {
        params: Vec<TypeRef>,
        results: Vec<TypeRef>,
    },
}

impl TypeShape {
    /// Human-readable kind tag, used in skip-log lines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeShape::Basic => "basic",
            TypeShape::Record { .. } => "record",
            TypeShape::Interface { .. } => "interface",
            TypeShape::Slice { .. } => "slice",
            TypeShape::Map { .. } => "map",
            TypeShape::Chan { .. } => "chan",
            TypeShape::Pointer { .. } => "pointer",
            TypeShape::Signature { .. } => "signature",
        }
    }
}

/// A named type definition as resolved by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: TypeName,
    /// Whether the name is part of its module's public contract.
    pub exported: bool,
    pub shape: TypeShape,
}

impl TypeDef {
    pub fn canonical(&self) -> String {
        self.name.canonical()
    }
}

/// A function or method definition. Only functions with a receiver produce
/// edges; plain functions are accepted but contribute nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncDef {
    /// Fully qualified name, for log lines only.
    pub name: String,
    /// Receiver type, present for methods. May be a pointer to a named type;
    /// the builder dereferences exactly one level.
    pub receiver: Option<TypeRef>,
    #[serde(default)]
    pub params: Vec<TypeRef>,
    #[serde(default)]
    pub results: Vec<TypeRef>,
}

/// Resolved symbols of one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleData {
    /// Module path (e.g. `example.com/pkg/store`).
    pub path: String,
    #[serde(default)]
    pub types: Vec<TypeDef>,
    #[serde(default)]
    pub functions: Vec<FuncDef>,
}

/// Everything the engine consumes for one run: the merged output of the
/// front-end over the selected compilation units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticData {
    pub modules: Vec<ModuleData>,
}

impl SemanticData {
    /// Merge another dump into this one, keeping module order.
    pub fn merge(&mut self, other: SemanticData) {
        self.modules.extend(other.modules);
    }
}

/// Canonical name → definition, built once before traversal so the builder
/// can resolve any discovered reference to its definition (needed by the
/// cost heuristic and for node creation).
#[derive(Debug, Default)]
pub struct TypeIndex {
    defs: HashMap<String, Arc<TypeDef>>,
}

impl TypeIndex {
    pub fn from_semantic_data(data: &SemanticData) -> Self {
        let mut defs = HashMap::new();
        for module in &data.modules {
            for def in &module.types {
                defs.insert(def.canonical(), Arc::new(def.clone()));
            }
        }
        Self { defs }
    }

    pub fn resolve(&self, name: &TypeName) -> Option<&Arc<TypeDef>> {
        self.defs.get(&name.canonical())
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
