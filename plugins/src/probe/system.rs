use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use envreport_core::api::{Category, EnvFacts, EnvProbe, FactValue, ProbeError, ProbeOptions, ProbeRequest};

use super::binary;
use super::host::{self, HostFacts};

/// Probes the local machine: `sysinfo` for host facts, PATH lookups and
/// `--version` runs for binaries, `npm ls -g` for global packages.
pub struct SystemProbe;

impl Default for SystemProbe {
    fn default() -> Self {
        Self
    }
}

impl SystemProbe {
    pub fn new() -> Self {
        Self
    }

    fn shell_path() -> Option<PathBuf> {
        let var = if cfg!(windows) { "COMSPEC" } else { "SHELL" };
        std::env::var_os(var)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    async fn shell(&self) -> FactValue {
        match Self::shell_path() {
            // cmd.exe has no --version; report the path alone there.
            Some(path) if cfg!(windows) => FactValue::Text(path.display().to_string()),
            Some(path) => binary::located(&path).await,
            None => FactValue::NotFound,
        }
    }

    async fn binary_field(&self, field: &str) -> FactValue {
        let bin = match field {
            "Node" => "node",
            "Yarn" => "yarn",
            "npm" => "npm",
            "Docker" => "docker",
            other => {
                tracing::debug!(target: "envreport.probe", field = other, "unknown binary field");
                return FactValue::NotFound;
            }
        };
        binary::probe_binary(bin).await
    }

    async fn global_packages(&self, names: &[String]) -> Vec<(String, FactValue)> {
        let listing = match binary::resolve("npm") {
            Some(npm) => binary::capture(&npm, &["ls", "-g", "--depth=0", "--json"]).await,
            None => None,
        };
        let parsed: Option<Value> = listing.and_then(|raw| match serde_json::from_str(&raw) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::debug!(target: "envreport.probe", error = %e, "unreadable npm ls output");
                None
            }
        });
        names
            .iter()
            .map(|name| {
                let version = parsed.as_ref().and_then(|v| global_package_version(v, name));
                let fact = version.map(FactValue::Text).unwrap_or(FactValue::NotFound);
                (name.clone(), fact)
            })
            .collect()
    }
}

/// `dependencies.<name>.version` from `npm ls -g --json` output.
pub fn global_package_version(listing: &Value, name: &str) -> Option<String> {
    listing
        .get("dependencies")?
        .get(name)?
        .get("version")?
        .as_str()
        .map(str::to_string)
}

fn host_field(host: &HostFacts, field: &str) -> Option<FactValue> {
    match field {
        "OS" => Some(host.os.clone()),
        "CPU" => Some(host.cpu.clone()),
        "Memory" => Some(host.memory.clone()),
        _ => None,
    }
}

#[async_trait]
impl EnvProbe for SystemProbe {
    fn name(&self) -> &str {
        "system"
    }

    async fn run(&self, request: &ProbeRequest, options: ProbeOptions) -> Result<String, ProbeError> {
        let mut facts = EnvFacts::new();

        for section in &request.sections {
            match section.category {
                Category::System => {
                    let host = tokio::task::spawn_blocking(host::gather)
                        .await
                        .map_err(|e| {
                            ProbeError::Failed(anyhow::Error::new(e).context("host facts collection did not finish"))
                        })?;
                    for field in &section.fields {
                        let value = match field.as_str() {
                            "Shell" => self.shell().await,
                            other => host_field(&host, other).unwrap_or(FactValue::NotFound),
                        };
                        facts.push(Category::System, field.clone(), value);
                    }
                }
                Category::Binaries | Category::Virtualization => {
                    for field in &section.fields {
                        let value = self.binary_field(field).await;
                        facts.push(section.category, field.clone(), value);
                    }
                }
                Category::NpmGlobalPackages => {
                    for (name, value) in self.global_packages(&section.fields).await {
                        facts.push(Category::NpmGlobalPackages, name, value);
                    }
                }
            }
        }

        tracing::debug!(target: "envreport.probe", json = options.json, "environment collected");
        Ok(facts.render(options))
    }

    async fn node_info(&self) -> Result<(String, Option<String>), ProbeError> {
        let version = match binary::resolve("node") {
            Some(node) => binary::version_of(&node).await,
            None => None,
        };
        Ok(("Node".to_string(), version))
    }
}
