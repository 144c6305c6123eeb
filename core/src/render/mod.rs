pub mod structured;
pub mod text;

use crate::error::CliError;
use crate::plugin::ClassifiedPlugins;
use crate::proxy::ProxyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn is_structured(&self) -> bool {
        !matches!(self, OutputFormat::Text)
    }
}

/// Everything `info` prints, gathered before any formatting happens.
pub struct ReportInput<'a> {
    /// Raw probe output: JSON object text for structured formats, text otherwise.
    pub facts: &'a str,
    pub proxies: &'a ProxyConfig,
    pub plugins: &'a ClassifiedPlugins,
}

pub fn render_report(format: OutputFormat, input: &ReportInput<'_>) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(text::render_text(input)),
        OutputFormat::Json => {
            let doc = structured::build_document(input)?;
            Ok(structured::to_json(&doc)?)
        }
        OutputFormat::Yaml => {
            let doc = structured::build_document(input)?;
            Ok(structured::to_yaml(&doc)?)
        }
    }
}
