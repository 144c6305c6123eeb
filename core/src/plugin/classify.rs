use super::types::{ClassifiedPlugin, CorePluginRegistry, PluginRecord, PluginType};

/// Top-level plugins split by install type, each group sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedPlugins {
    pub core: Vec<ClassifiedPlugin>,
    pub user: Vec<ClassifiedPlugin>,
    pub link: Vec<ClassifiedPlugin>,
}

impl ClassifiedPlugins {
    /// Groups in render order, paired with their section key.
    pub fn groups(&self) -> [(&'static str, &[ClassifiedPlugin]); 3] {
        [
            (PluginType::Core.as_str(), self.core.as_slice()),
            (PluginType::User.as_str(), self.user.as_slice()),
            (PluginType::Link.as_str(), self.link.as_slice()),
        ]
    }

    pub fn len(&self) -> usize {
        self.core.len() + self.user.len() + self.link.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn classify_plugins(plugins: &[PluginRecord], registry: &CorePluginRegistry) -> ClassifiedPlugins {
    let mut top_level: Vec<&PluginRecord> = plugins.iter().filter(|p| p.parent.is_none()).collect();
    // Vec::sort_by is stable; equal names keep their input order.
    top_level.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = ClassifiedPlugins::default();
    for record in top_level {
        let overrides_core = match record.plugin_type {
            PluginType::Core => false,
            PluginType::User | PluginType::Link => registry.contains(&record.name),
        };
        let classified = ClassifiedPlugin {
            record: record.clone(),
            overrides_core,
        };
        match record.plugin_type {
            PluginType::Core => out.core.push(classified),
            PluginType::User => out.user.push(classified),
            PluginType::Link => out.link.push(classified),
        }
    }

    tracing::debug!(
        target: "envreport.plugins",
        core = out.core.len(),
        user = out.user.len(),
        link = out.link.len(),
        skipped = plugins.len() - out.len(),
        "classified plugins"
    );
    out
}
