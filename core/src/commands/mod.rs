pub mod info;
pub mod outcome;
pub mod report;

pub use info::{run_info, InfoContext, InfoFlags, InfoServices};
pub use outcome::CommandOutcome;
pub use report::{run_report, ReportContext, ReportFlags, ReportServices};
