use async_trait::async_trait;

use crate::error::ProbeError;

use super::{ProbeOptions, ProbeRequest};

#[async_trait]
pub trait EnvProbe: Send + Sync {
    fn name(&self) -> &str;

    /// Gather the requested facts. Returns JSON object text when
    /// `options.json` is set, otherwise the indented text block.
    async fn run(&self, request: &ProbeRequest, options: ProbeOptions) -> Result<String, ProbeError>;

    /// `("Node", version)`; the version is `None` when no interpreter is on PATH.
    async fn node_info(&self) -> Result<(String, Option<String>), ProbeError>;
}
