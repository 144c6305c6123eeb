use serde::Deserialize;

use crate::advisory::NodeSupport;
use crate::error::ConfigError;
use crate::plugin::{CorePluginRegistry, PluginRecord};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub project: ProjectMetadata,

    /// Installed plugins declared inline.
    #[serde(default)]
    pub plugins: Vec<PluginRecord>,

    /// JSON file holding an array of plugin records, appended to `plugins`.
    #[serde(default)]
    pub plugins_manifest: Option<String>,

    /// Browser command for `report`; `$BROWSER` or the platform launcher otherwise.
    #[serde(default)]
    pub browser: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectMetadata {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub core_plugins: Option<Vec<String>>,

    #[serde(default)]
    pub bugs: Option<BugsField>,

    #[serde(default)]
    pub engines: EnginesConfig,
}

/// Bug tracker location: either a bare URL or a table carrying `url`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BugsField {
    Url(String),
    Object {
        #[serde(default)]
        url: Option<String>,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnginesConfig {
    #[serde(default)]
    pub node: Option<NodeSupport>,

    #[serde(default)]
    pub node_warning: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ProjectMetadata {
    pub fn require_name(&self) -> Result<&str, ConfigError> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(ConfigError::Missing("project.name"))
    }

    pub fn bug_url(&self) -> Result<&str, ConfigError> {
        let url = match &self.bugs {
            Some(BugsField::Url(url)) => Some(url.as_str()),
            Some(BugsField::Object { url }) => url.as_deref(),
            None => None,
        };
        url.map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::BugUrlNotFound)
    }

    pub fn core_registry(&self) -> CorePluginRegistry {
        CorePluginRegistry::from_optional(self.core_plugins.as_deref())
    }
}
