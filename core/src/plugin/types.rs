use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginType {
    Core,
    User,
    Link,
}

impl PluginType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginType::Core => "core",
            PluginType::User => "user",
            PluginType::Link => "link",
        }
    }
}

/// Snapshot of one installed plugin as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRecord {
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub plugin_type: PluginType,
    /// Name of the plugin that pulled this one in; `None` for top-level installs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl PluginRecord {
    pub fn new(name: impl Into<String>, version: impl Into<String>, plugin_type: PluginType) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            plugin_type,
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// Plugin names the project itself declares as bundled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorePluginRegistry {
    names: Vec<String>,
}

impl CorePluginRegistry {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn from_optional(names: Option<&[String]>) -> Self {
        Self::new(names.map(<[String]>::to_vec).unwrap_or_default())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPlugin {
    pub record: PluginRecord,
    pub overrides_core: bool,
}

impl ClassifiedPlugin {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn version(&self) -> &str {
        &self.record.version
    }

    pub fn plugin_type(&self) -> PluginType {
        self.record.plugin_type
    }
}
