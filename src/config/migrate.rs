//! Configuration file migrations: fill in keys introduced after the file
//! was first written, without discarding anything the user customized.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Report the top-level keys a default config has and the given file lacks.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut missing = Vec::new();
    for (key, _) in defaults.iter() {
        if !current.contains_key(key) {
            if let Some(name) = key.as_str() {
                missing.push(name.to_string());
            }
        }
    }

    Ok(missing)
}

/// Insert every missing key with its default value and write the file back.
/// Returns the names of the keys that were added. Idempotent: a complete
/// file is rewritten unchanged (and reported as zero additions).
pub fn apply_defaults(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut added = Vec::new();
    for (key, value) in defaults.iter() {
        if !current.contains_key(key) {
            current.insert(key.clone(), value.clone());
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, document_poll_interval(&serialized)).map_err(|_| AppError::ConfigSave)?;

    Ok(added)
}

fn read_mapping(path: &Path) -> AppResult<serde_yaml::Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let value: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))?;

    match value {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<serde_yaml::Mapping> {
    let value = serde_yaml::to_value(Config::default()).map_err(|_| AppError::ConfigSave)?;
    match value {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}

/// Inject a documentation comment right after the `poll_interval_secs` line.
fn document_poll_interval(serialized: &str) -> String {
    let mut out = String::new();

    for line in serialized.lines() {
        out.push_str(line);
        out.push('\n');

        if line.starts_with("poll_interval_secs:") {
            out.push_str(
                "# poll_interval_secs controls how often 'status --watch'\n\
                 # refetches the day from the server.\n",
            );
        }
    }

    out
}
