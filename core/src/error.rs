use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("config parse error: {path}")]
    Parse {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("required config missing: {0}")]
    Missing(&'static str),

    #[error("bug reporting url not found")]
    BugUrlNotFound,

    #[error("plugin manifest unreadable: {path}")]
    Manifest {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("environment probe failed")]
    Failed(#[source] anyhow::Error),

    #[error("environment probe returned malformed json")]
    Malformed(#[source] serde_json::Error),

    #[error("environment probe returned {0}, expected a json object")]
    NotAnObject(&'static str),
}

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("no browser launcher available for this platform")]
    NoLauncher,

    #[error("failed to launch browser: {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("browser launcher exited with code {code}")]
    Exit { code: i32 },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("json serialization failed")]
    Json(#[source] serde_json::Error),

    #[error("yaml serialization failed")]
    Yaml(#[source] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Open(#[from] OpenError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl CliError {
    /// Process exit code for this failure; usage errors follow clap's convention.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}
