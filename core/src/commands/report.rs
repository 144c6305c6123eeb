use crate::config::ProjectMetadata;
use crate::error::CliError;
use crate::issue::{bug_report_url, feature_request_url, ReportKind};
use crate::opener::UrlOpener;
use crate::probe::{EnvProbe, ProbeOptions, ProbeRequest};

use super::CommandOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportFlags {
    pub bug: bool,
    pub feature: bool,
}

impl Default for ReportFlags {
    fn default() -> Self {
        Self {
            bug: true,
            feature: false,
        }
    }
}

impl ReportFlags {
    /// `feature` wins over the default-on `bug`.
    pub fn kind(&self) -> ReportKind {
        if self.feature {
            ReportKind::Feature
        } else {
            ReportKind::Bug
        }
    }
}

pub struct ReportContext<'a> {
    pub flags: ReportFlags,
    pub project: &'a ProjectMetadata,
}

pub struct ReportServices {
    pub probe: Box<dyn EnvProbe>,
    pub opener: Box<dyn UrlOpener>,
}

pub async fn run_report(ctx: ReportContext<'_>, services: &ReportServices) -> Result<CommandOutcome, CliError> {
    let bug_url = ctx.project.bug_url()?;

    let url = match ctx.flags.kind() {
        ReportKind::Feature => feature_request_url(bug_url),
        ReportKind::Bug => {
            let request = ProbeRequest::for_project(ctx.project.require_name().ok());
            let env_info = services.probe.run(&request, ProbeOptions::text()).await?;
            bug_report_url(bug_url, &env_info)
        }
    };

    tracing::info!(target: "envreport.report", opener = services.opener.name(), kind = ?ctx.flags.kind(), "opening issue form");
    services.opener.open(&url).await?;
    Ok(CommandOutcome::silent())
}
