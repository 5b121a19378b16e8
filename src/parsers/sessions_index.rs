use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::SessionsIndex;

/// Load a precomputed `sessions-index.json`
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid index
/// (`entries` missing, an entry without `sessionId`/`fullPath`, bad JSON).
pub fn read_sessions_index(path: &Path) -> Result<SessionsIndex> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session index: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse session index: {}", path.display()))
}
