//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.vta/config.yaml)
//! 3. Explicit config file (`--config`)
//! 4. Environment variables (VTA_* prefix)
//! 5. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::ScaffoldConfig;
use crate::utils::get_vta_dir;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "scaffold-defaults.yaml";
const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,
    /// Explicit config file given on the command line
    config_file: Option<Utf8PathBuf>,
}

impl HierarchicalConfigLoader {
    /// Create a new hierarchical config loader rooted at ~/.vta
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_dir: get_vta_dir()?,
            config_file: None,
        })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir,
            config_file: None,
        }
    }

    /// Layer an explicit config file on top of the user config
    pub fn with_config_file(mut self, path: Option<Utf8PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    /// Load scaffold configuration with hierarchical precedence
    pub fn load(&self) -> Result<ScaffoldConfig> {
        let mut merged = Self::load_embedded_value(DEFAULTS_FILE)?;

        let user_config_path = self.config_dir.join(USER_CONFIG_FILE);
        if user_config_path.exists() {
            debug!("Merging user config: {}", user_config_path);
            merge_values(&mut merged, Self::load_yaml_value(&user_config_path)?);
        }

        if let Some(path) = &self.config_file {
            if !path.exists() {
                return Err(Error::config_not_found(path.as_str()));
            }
            debug!("Merging config file: {}", path);
            merge_values(&mut merged, Self::load_yaml_value(path)?);
        }

        let config: ScaffoldConfig = serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Failed to parse configuration: {}", e)))?;

        self.apply_env_overrides(config)
    }

    /// Load an embedded configuration file as a raw YAML value
    fn load_embedded_value(filename: &str) -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    /// Load a YAML file as a raw value
    fn load_yaml_value(path: &Utf8Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;
        let value: Value = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;
        Ok(value)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, mut config: ScaffoldConfig) -> Result<ScaffoldConfig> {
        if let Ok(val) = env::var("VTA_TEMPLATE_REPOSITORY") {
            config.template.repository = val;
        }

        if let Ok(val) = env::var("VTA_TEMPLATE_BRANCH") {
            config.template.branch = Some(val).filter(|v| !v.is_empty());
        }

        if let Ok(val) = env::var("VTA_TEMP_DIR") {
            config.template.temp_dir = Some(Utf8PathBuf::from(val));
        }

        if let Ok(val) = env::var("VTA_FETCH_TIMEOUT_SECS") {
            config.template.timeout_secs = Some(val.parse().map_err(|_| {
                Error::invalid_config("VTA_FETCH_TIMEOUT_SECS must be a valid number")
            })?);
        }

        if let Ok(val) = env::var("VTA_INSTALL_COMMAND") {
            config.install.command = val;
        }

        // An empty registry disables the flag
        if let Ok(val) = env::var("VTA_NPM_REGISTRY") {
            config.install.registry = Some(val).filter(|v| !v.is_empty());
        }

        Ok(config)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

/// Deep-merge `overlay` into `base`; mappings merge key by key, anything else replaces
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (base, overlay) => *base = overlay,
    }
}
