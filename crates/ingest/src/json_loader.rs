//! JSON ingestion: whole-document loads.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use stocktally_core::{DomainError, DomainResult};

/// Load a whole JSON document, returned as-is (no schema enforced).
///
/// Auxiliary utility: the report flow reads CSV only, but a JSON source can
/// be loaded here and consumed by callers directly (domain types derive
/// `Deserialize`, so `serde_json::from_value` takes it the rest of the way).
pub fn load_json<P: AsRef<Path>>(path: P) -> DomainResult<serde_json::Value> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DomainError::io(format!("{}: {e}", path.display())))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| DomainError::parse(format!("{}: {e}", path.display())))
}
