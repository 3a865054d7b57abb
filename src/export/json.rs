use crate::errors::{AppError, AppResult};
use crate::export::model::StatusExport;
use std::fs;
use std::path::Path;

/// Write the session rows as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[StatusExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
