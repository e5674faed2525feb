use crate::discover::Discovery;
use crate::source::SourceKind;
use crate::sysfs::SysfsRoot;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level nicinfo configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NicinfoConfig {
    pub discovery: DiscoveryConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Filesystem root that `sys/` and `proc/` are resolved against.
    pub root: PathBuf,
    /// Discovery sources in fallback order.
    pub sources: Vec<SourceKind>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/"),
            sources: vec![SourceKind::Sysfs, SourceKind::Procfs],
        }
    }
}

impl DiscoveryConfig {
    pub fn build(&self) -> Discovery {
        Discovery::from_kinds(SysfsRoot::new(self.root.clone()), &self.sources)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print JSON instead of formatted text.
    pub json: bool,
}

const SYSTEM_CONFIG: &str = "/etc/nicinfo/config.toml";

fn load_system() -> Option<toml::Value> {
    read_value(Path::new(SYSTEM_CONFIG))
}

/// ~/.config/nicinfo/config.toml
fn load_user() -> Option<toml::Value> {
    let path = dirs::config_dir()?.join("nicinfo").join("config.toml");
    read_value(&path)
}

fn read_value(path: &Path) -> Option<toml::Value> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("ignoring invalid config {}: {}", path.display(), e);
            None
        }
    }
}

/// Recursively merge two TOML values. Tables are merged key-by-key;
/// all other types in `overlay` replace `base`.
fn merge_values(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_values(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load config from a specific path, ignoring system/user files.
fn load_from_path(path: &Path) -> NicinfoConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("failed to parse config at {}: {}", path.display(), e);
            NicinfoConfig::default()
        }),
        Err(e) => {
            tracing::warn!("failed to read config at {}: {}", path.display(), e);
            NicinfoConfig::default()
        }
    }
}

/// Load the merged config: system file, then user overrides.
/// If `override_path` is provided, use only that file instead.
pub fn load(override_path: Option<&PathBuf>) -> NicinfoConfig {
    if let Some(path) = override_path {
        return load_from_path(path);
    }

    let mut merged: Option<toml::Value> = None;
    for (layer, value) in [("system", load_system()), ("user", load_user())] {
        let Some(value) = value else { continue };
        tracing::debug!("applying {} config layer", layer);
        merged = Some(match merged {
            Some(base) => merge_values(base, value),
            None => value,
        });
    }

    match merged {
        Some(value) => value.try_into().unwrap_or_else(|e| {
            tracing::warn!("failed to deserialize config: {}", e);
            NicinfoConfig::default()
        }),
        None => NicinfoConfig::default(),
    }
}
