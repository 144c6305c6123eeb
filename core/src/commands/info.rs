use crate::config::ProjectMetadata;
use crate::error::CliError;
use crate::plugin::{classify_plugins, PluginRecord};
use crate::probe::{EnvProbe, ProbeOptions, ProbeRequest};
use crate::proxy::{inspect_proxies, ProxyResolver};
use crate::render::{render_report, OutputFormat, ReportInput};

use super::CommandOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoFlags {
    pub json: bool,
    pub yml: bool,
}

impl InfoFlags {
    pub fn output_format(&self) -> Result<OutputFormat, CliError> {
        match (self.json, self.yml) {
            (true, true) => Err(CliError::Usage(
                "--json and --yml cannot be used together".to_string(),
            )),
            (true, false) => Ok(OutputFormat::Json),
            (false, true) => Ok(OutputFormat::Yaml),
            (false, false) => Ok(OutputFormat::Text),
        }
    }
}

pub struct InfoContext<'a> {
    pub flags: InfoFlags,
    pub project: &'a ProjectMetadata,
    pub plugins: &'a [PluginRecord],
}

pub struct InfoServices {
    pub probe: Box<dyn EnvProbe>,
    pub proxy: Box<dyn ProxyResolver>,
}

pub async fn run_info(ctx: InfoContext<'_>, services: &InfoServices) -> Result<CommandOutcome, CliError> {
    let format = ctx.flags.output_format()?;
    let package_name = ctx.project.require_name()?;

    let options = if format.is_structured() {
        ProbeOptions::json()
    } else {
        ProbeOptions::text()
    };
    tracing::debug!(
        target: "envreport.info",
        probe = services.probe.name(),
        proxy = services.proxy.name(),
        ?format,
        "collecting environment"
    );
    let facts = services
        .probe
        .run(&ProbeRequest::standard(package_name), options)
        .await?;

    let plugins = classify_plugins(ctx.plugins, &ctx.project.core_registry());
    let proxies = inspect_proxies(services.proxy.as_ref());

    let rendered = render_report(
        format,
        &ReportInput {
            facts: &facts,
            proxies: &proxies,
            plugins: &plugins,
        },
    )?;
    let mut outcome = CommandOutcome::printed(rendered);

    let engines = &ctx.project.engines;
    if let Some(support) = &engines.node {
        match services.probe.node_info().await {
            Ok((_, Some(version))) => {
                if let Some(warning) = support.advise(&version, engines.node_warning.as_deref()) {
                    outcome.warn(warning);
                }
            }
            Ok((_, None)) => {
                tracing::debug!(target: "envreport.info", "node not found, skipping version advisory")
            }
            Err(e) => tracing::debug!(
                target: "envreport.info",
                error = %e,
                "node lookup failed, skipping version advisory"
            ),
        }
    }

    Ok(outcome)
}
