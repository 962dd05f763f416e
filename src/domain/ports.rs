use anyhow::Result;

use crate::domain::semantic::SemanticData;

/// Symbol ingestion port (implemented by Infrastructure). A failure here is
/// fatal to the whole run; the engine is never invoked on partial input.
pub trait SymbolSource {
    fn load(&self) -> Result<SemanticData>;
}
