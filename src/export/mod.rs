// src/export/mod.rs

mod csv;
mod json;
mod model;

pub use model::StatusExport;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use clap::ValueEnum;
use std::io::{self, Write};
use std::path::Path;

/// Shared completion message for all export formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the rows in the requested format after the overwrite guard passes.
pub fn write_rows(format: &ExportFormat, path: &Path, rows: &[StatusExport]) -> AppResult<()> {
    match format {
        ExportFormat::Csv => csv::write_csv(path, rows),
        ExportFormat::Json => json::write_json(path, rows),
    }?;

    notify_export_success(format.as_str(), path);
    Ok(())
}

/// Check whether a file can be created or overwritten.
///
/// - missing file, or `force` set: Ok
/// - otherwise ask the user before clobbering it.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".into(),
        ))
    }
}
