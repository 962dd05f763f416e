//! JSON symbol source: loads the front-end's resolved symbol dumps.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::domain::ports::SymbolSource;
use crate::domain::semantic::SemanticData;

/// Reads one or more `SemanticData` JSON documents and merges them in input
/// order. Any unreadable or malformed file fails the whole load; the engine
/// never sees partial results.
pub struct JsonSymbolSource {
    paths: Vec<PathBuf>,
}

impl JsonSymbolSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl SymbolSource for JsonSymbolSource {
    fn load(&self) -> Result<SemanticData> {
        let mut merged = SemanticData::default();
        for path in &self.paths {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read symbol dump {}", path.display()))?;
            let data: SemanticData = serde_json::from_str(&content)
                .with_context(|| format!("malformed symbol dump {}", path.display()))?;
            merged.merge(data);
        }
        Ok(merged)
    }
}
