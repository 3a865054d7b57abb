use crate::errors::{AppError, AppResult};
use crate::export::model::StatusExport;
use csv::Writer;
use std::path::Path;

/// Write the session rows as CSV, headers taken from the row struct.
pub fn write_csv(path: &Path, rows: &[StatusExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
