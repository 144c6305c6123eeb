use std::error::Error as _;

use clap::Parser;
mod app;
mod commands;
use commands::cli;
use envreport_core::error::CliError;

fn report_error(err: &CliError) {
    eprintln!("Error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    let exit = match app::run_app(args).await {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(target: "envreport.cli", error = ?err, "command failed");
            report_error(&err);
            err.exit_code()
        }
    };
    std::process::exit(exit);
}
