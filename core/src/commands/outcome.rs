/// What a command hands back to the CLI for printing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Written to stdout in one piece.
    pub stdout: Option<String>,
    /// Non-fatal; printed to stderr after stdout.
    pub warnings: Vec<String>,
    pub exit_code: i32,
}

impl CommandOutcome {
    pub fn printed(stdout: String) -> Self {
        Self {
            stdout: Some(stdout),
            ..Self::default()
        }
    }

    pub fn silent() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(target: "envreport.command", warning = %message, "advisory");
        self.warnings.push(message);
    }
}
