use envreport_core::api::{
    run_info, run_report, AppConfig, CliError, CommandOutcome, InfoContext, LoggingConfig, ReportContext,
};
use envreport_core::config;
use std::io::{self, Write};
use envreport_plugins::factory;
use tracing_subscriber::EnvFilter;

use crate::commands::cli::{Args, Commands};

fn init_logging(cfg: &LoggingConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level))
    };
    // Ignored when a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// A reader that went away early (`envreport info | head`) is not a failure.
fn write_report<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    match writeln!(out, "{text}").and_then(|_| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn emit(outcome: CommandOutcome) -> i32 {
    if let Some(stdout) = outcome.stdout {
        if let Err(e) = write_report(&mut io::stdout().lock(), &stdout) {
            tracing::error!(target: "envreport.cli", error = %e, "failed to write report");
            return 1;
        }
    }
    for warning in &outcome.warnings {
        eprintln!("Warning: {warning}");
    }
    outcome.exit_code
}

pub async fn run_app(args: Args) -> Result<i32, CliError> {
    let cfg: AppConfig = config::load(args.config.as_deref())?;
    init_logging(&cfg.logging, args.verbose);
    tracing::debug!(
        target: "envreport.cli",
        plugins = cfg.plugins.len(),
        project = ?cfg.project.name,
        "config loaded"
    );

    let outcome = match &args.command {
        Commands::Info(info) => {
            let services = factory::build_info_services();
            run_info(
                InfoContext {
                    flags: info.into(),
                    project: &cfg.project,
                    plugins: &cfg.plugins,
                },
                &services,
            )
            .await?
        }
        Commands::Report(report) => {
            let services = factory::build_report_services(&cfg);
            run_report(
                ReportContext {
                    flags: report.into(),
                    project: &cfg.project,
                },
                &services,
            )
            .await?
        }
    };

    Ok(emit(outcome))
}
