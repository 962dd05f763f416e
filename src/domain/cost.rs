//! Cost heuristic: how tightly/dangerously coupled is one edge.
//!
//! The weight of a dependency edge is decided entirely by the visibility of
//! its two endpoints, plus one refinement on the destination: an interface
//! whose complete method set declares an unexported method is *closed* —
//! code outside its defining module cannot supply an implementation, so
//! depending on it is the heaviest coupling of all.

use crate::domain::semantic::{TypeDef, TypeShape};

/// Weight constant associated with method-derived edges; keys the edge color
/// in the rendered document.
pub const METHOD_DEP: f64 = 1.0;

/// Compute the coupling weight of an edge `from → to`.
///
/// First match wins, in this order:
/// 1.0  both endpoints exported
/// 3.0  destination unexported, not a closed interface
/// 4.0  destination unexported and a closed interface
/// 2.0  destination exported, source unexported
///
/// Any other combination indicates broken visibility/closedness
/// classification and aborts the run.
pub fn cost(from: &TypeDef, to: &TypeDef) -> f64 {
    let from_exported = from.exported;
    let to_exported = to.exported;
    let to_closed = is_closed_interface(to);

    if from_exported && to_exported {
        1.0
    } else if !to_exported && !to_closed {
        3.0
    } else if !to_exported && to_closed {
        4.0 // most heavy
    } else if !from_exported {
        2.0
    } else {
        unreachable!(
            "visibility classification broke down for edge {} -> {}",
            from.canonical(),
            to.canonical()
        )
    }
}

/// An interface is closed when its complete method set contains at least one
/// unexported method. Non-interface shapes are never closed.
fn is_closed_interface(def: &TypeDef) -> bool {
    match &def.shape {
        TypeShape::Interface { methods, .. } => methods.iter().any(|m| !m.exported),
        _ => false,
    }
}
