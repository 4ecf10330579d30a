//! Config file upgrades: report keys missing from an older file and write
//! them back with their default values.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys of `Config::default()` in serialization order.
fn expected_keys() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default config is not a mapping".into())),
    }
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("config file must be a YAML mapping".into())),
    }
}

/// Names of the keys the file does not set.
pub fn missing_fields(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;
    let missing = expected_keys()?
        .into_iter()
        .filter(|(k, _)| !current.contains_key(k))
        .filter_map(|(k, _)| k.as_str().map(str::to_string))
        .collect();
    Ok(missing)
}

/// Add every missing key to the YAML text, keeping existing values untouched.
/// Returns the new text and the keys that were added.
pub fn migrate_content(content: &str) -> AppResult<(String, Vec<String>)> {
    let mut current = parse_mapping(content)?;
    let mut added = Vec::new();

    for (key, default) in expected_keys()? {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, default);
        }
    }

    Ok((serde_yaml::to_string(&Value::Mapping(current))?, added))
}

/// Migrate the config file in place. A missing file is left alone.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        info(format!("No configuration file at {}", path.display()));
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let (updated, added) = migrate_content(&content)?;

    if added.is_empty() {
        info("Configuration is up to date.");
    } else {
        fs::write(path, updated)?;
        success(format!(
            "Configuration migrated, added: {}",
            added.join(", ")
        ));
    }

    Ok(added)
}
