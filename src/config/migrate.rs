//! Config file maintenance: detect and fill in missing fields after an
//! upgrade, so old config files keep working without manual edits.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Fields every complete config file carries, with their default YAML
/// value rendered from `Config::default()`.
const REQUIRED_FIELDS: &[&str] = &[
    "database",
    "day_threshold_hour",
    "theme",
    "first_reminder_hours",
    "second_reminder_hours",
    "retention_days",
];

/// Return the list of fields missing from the config file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;

    let yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    let Some(map) = yaml.as_mapping() else {
        return Err(AppError::Config("config file is not a YAML mapping".into()));
    };

    let mut missing = Vec::new();
    for field in REQUIRED_FIELDS {
        let key = Value::String((*field).to_string());
        if !map.contains_key(&key) {
            missing.push((*field).to_string());
        }
    }

    Ok(missing)
}

/// Report missing fields and invalid values without modifying anything.
pub fn check_config(path: &Path) -> AppResult<()> {
    let missing = missing_fields(path)?;

    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        info(format!(
            "Configuration file is missing fields: {}",
            missing.join(", ")
        ));
        info("Run `carbtracker config --migrate` to fill them in with defaults.");
    }

    let cfg = super::Config::load();
    if cfg.day_threshold_hour > 23 {
        return Err(AppError::InvalidThresholdHour(cfg.day_threshold_hour));
    }

    Ok(())
}

/// Fill in any missing fields with their defaults and rewrite the file.
/// Returns true when the file was actually updated.
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        success("Configuration file is already up to date.");
        return Ok(false);
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let mut yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    // Render the defaults once and graft the missing keys over.
    let defaults_yaml = serde_yaml::to_string(&super::Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?;
    let defaults: Value =
        serde_yaml::from_str(&defaults_yaml).map_err(|e| AppError::Config(e.to_string()))?;

    if let (Some(map), Some(default_map)) = (yaml.as_mapping_mut(), defaults.as_mapping()) {
        for field in &missing {
            let key = Value::String(field.clone());
            if let Some(default_value) = default_map.get(&key) {
                map.insert(key, default_value.clone());
            }
        }
    }

    let serialized = serde_yaml::to_string(&yaml).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated, added: {}",
        missing.join(", ")
    ));

    Ok(true)
}
