//! Ignore filter: configured denylist of canonical type names.
//!
//! Ignoring is an edge-*target* decision: a dependency into an ignored name
//! is dropped entirely (no edge, no node for the target), but the source of
//! that dependency is still registered so isolated types stay visible.

use std::collections::HashSet;

/// Exact-match membership test over canonical names.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the host CLI's comma-delimited form. An empty string yields an
    /// empty set; surrounding whitespace on entries is not trimmed (names
    /// are matched exactly).
    pub fn from_comma_delimited(list: &str) -> Self {
        if list.is_empty() {
            return Self::default();
        }
        Self::new(list.split(','))
    }

    pub fn is_ignored(&self, canonical: &str) -> bool {
        self.names.contains(canonical)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
