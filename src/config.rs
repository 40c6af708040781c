//! Configuration file support for fw-compare.
//!
//! Provides YAML-based configuration through `fw-compare.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use fw_compare::comparison::domain::SortDirection;
use fw_compare::shared::security::read_input_file;
use fw_compare::shared::Result;

pub const CONFIG_FILENAME: &str = "fw-compare.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub catalog: Option<PathBuf>,
    pub vendors: Option<Vec<String>>,
    pub tiers: Option<Vec<String>>,
    pub form_factors: Option<Vec<String>>,
    pub search: Option<String>,
    pub sort: Option<SortConfig>,
    /// appliance id -> metric key -> value
    pub overrides: Option<BTreeMap<String, BTreeMap<String, f64>>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Initial sort column and direction.
#[derive(Debug, Deserialize, Default)]
pub struct SortConfig {
    pub key: Option<String>,
    pub direction: Option<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_input_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let lists = [
        ("vendors", &config.vendors),
        ("tiers", &config.tiers),
        ("form_factors", &config.form_factors),
    ];
    for (name, list) in lists {
        if let Some(entries) = list {
            for (i, entry) in entries.iter().enumerate() {
                if entry.trim().is_empty() {
                    bail!(
                        "Invalid config: {}[{}] must not be empty.\n\n\
                         💡 Hint: Remove the empty entry or omit '{}' to include everything.",
                        name,
                        i,
                        name
                    );
                }
            }
        }
    }

    if let Some(direction) = config.sort.as_ref().and_then(|s| s.direction.as_deref()) {
        if let Err(e) = direction.parse::<SortDirection>() {
            bail!("Invalid config: sort.direction: {}", e);
        }
    }

    if let Some(ref overrides) = config.overrides {
        for (id, fields) in overrides {
            for (field, value) in fields {
                if !value.is_finite() {
                    bail!(
                        "Invalid config: overrides.{}.{} must be a finite number.\n\n\
                         💡 Hint: Use a plain number such as 12500.",
                        id,
                        field
                    );
                }
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
