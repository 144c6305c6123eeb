//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `envreport_core::api` instead of reaching into internal modules.

pub use crate::advisory::NodeSupport;
pub use crate::commands::{
    run_info, run_report, CommandOutcome, InfoContext, InfoFlags, InfoServices, ReportContext,
    ReportFlags, ReportServices,
};
pub use crate::config::{AppConfig, LoggingConfig, ProjectMetadata};
pub use crate::error::{CliError, ConfigError, OpenError, ProbeError};
pub use crate::issue::ReportKind;
pub use crate::opener::UrlOpener;
pub use crate::plugin::{PluginRecord, PluginType};
pub use crate::probe::{Category, EnvFacts, EnvProbe, FactValue, ProbeOptions, ProbeRequest};
pub use crate::proxy::ProxyResolver;
pub use crate::render::OutputFormat;
