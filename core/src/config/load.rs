use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::plugin::PluginRecord;

use super::types::{AppConfig, BugsField};

pub const CONFIG_FILE_NAME: &str = "envreport.toml";

fn candidate_paths() -> Vec<PathBuf> {
    let mut out = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        out.push(dir.join("envreport").join("config.toml"));
    }
    out
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let parse_err = |source: anyhow::Error| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    };
    let s = std::fs::read_to_string(path).map_err(|e| parse_err(e.into()))?;
    toml::from_str::<AppConfig>(&s).map_err(|e| parse_err(e.into()))
}

fn read_manifest(path: &Path) -> Result<Vec<PluginRecord>, ConfigError> {
    let manifest_err = |source: anyhow::Error| ConfigError::Manifest {
        path: path.display().to_string(),
        source,
    };
    let s = std::fs::read_to_string(path).map_err(|e| manifest_err(e.into()))?;
    serde_json::from_str(&s).map_err(|e| manifest_err(e.into()))
}

/// Apply `ENVREPORT_*` overrides; blank values are ignored.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get("ENVREPORT_PROJECT_NAME") {
        cfg.project.name = Some(v);
    }
    if let Some(v) = get("ENVREPORT_BUGS_URL") {
        cfg.project.bugs = Some(BugsField::Url(v));
    }
    if let Some(v) = get("ENVREPORT_PLUGINS_MANIFEST") {
        cfg.plugins_manifest = Some(v);
    }
}

/// Load configuration from `explicit` if given, otherwise from the first
/// existing default location, falling back to built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let found = match explicit {
        Some(p) if !p.exists() => return Err(ConfigError::NotFound(p.display().to_string())),
        Some(p) => Some(p.to_path_buf()),
        None => candidate_paths().into_iter().find(|p| p.exists()),
    };

    let mut cfg = match &found {
        Some(path) => {
            tracing::debug!(target: "envreport.config", path = %path.display(), "loading config");
            read_config(path)?
        }
        None => {
            tracing::debug!(target: "envreport.config", "no config file, using defaults");
            AppConfig::default()
        }
    };

    apply_env_overrides(&mut cfg, |k| std::env::var(k).ok());

    if let Some(manifest) = cfg.plugins_manifest.clone() {
        let manifest = PathBuf::from(manifest);
        let resolved = match (&found, manifest.is_relative()) {
            (Some(cfg_path), true) => cfg_path
                .parent()
                .map(|dir| dir.join(&manifest))
                .unwrap_or(manifest),
            _ => manifest,
        };
        let records = read_manifest(&resolved)?;
        tracing::debug!(
            target: "envreport.config",
            path = %resolved.display(),
            count = records.len(),
            "loaded plugin manifest"
        );
        cfg.plugins.extend(records);
    }

    Ok(cfg)
}

pub fn load_default() -> Result<AppConfig, ConfigError> {
    load(None)
}
