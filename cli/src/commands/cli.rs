use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use envreport_core::api::{InfoFlags, ReportFlags};

#[derive(Parser, Debug, Clone)]
#[command(name = "envreport", version, about = "Dev environment diagnostics and issue reporting")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./envreport.toml, then the user config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level to stderr.
    #[arg(short, long, default_value_t = false, global = true)]
    pub verbose: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct InfoArgs {
    /// output raw json
    #[arg(short, long, default_value_t = false)]
    pub json: bool,

    /// output yml
    #[arg(short, long, default_value_t = false, conflicts_with = "json")]
    pub yml: bool,
}

impl From<&InfoArgs> for InfoFlags {
    fn from(a: &InfoArgs) -> Self {
        InfoFlags {
            json: a.json,
            yml: a.yml,
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ReportArgs {
    /// report an issue
    #[arg(short, long, default_value_t = true, conflicts_with = "feature")]
    pub bug: bool,

    /// request a feature
    #[arg(short, long, default_value_t = false)]
    pub feature: bool,
}

impl From<&ReportArgs> for ReportFlags {
    fn from(a: &ReportArgs) -> Self {
        ReportFlags {
            bug: a.bug,
            feature: a.feature,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Display dev environment version information
    Info(InfoArgs),
    /// Report an issue with the CLI or submit a feature request
    Report(ReportArgs),
}
