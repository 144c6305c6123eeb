pub mod classify;
pub mod types;

pub use classify::{classify_plugins, ClassifiedPlugins};
pub use types::{ClassifiedPlugin, CorePluginRegistry, PluginRecord, PluginType};
