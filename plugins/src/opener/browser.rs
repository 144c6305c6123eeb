use async_trait::async_trait;
use tokio::process::Command;

use envreport_core::api::{OpenError, UrlOpener};

/// Opens URLs with the platform launcher, or `$BROWSER` when set.
pub struct BrowserOpener {
    browser: Option<String>,
}

impl Default for BrowserOpener {
    fn default() -> Self {
        Self::from_env()
    }
}

impl BrowserOpener {
    pub fn from_env() -> Self {
        Self::new(std::env::var("BROWSER").ok())
    }

    pub fn new(browser: Option<String>) -> Self {
        Self {
            browser: browser.filter(|b| !b.trim().is_empty()),
        }
    }

    /// Program and arguments that open `url`.
    pub fn launcher(&self, url: &str) -> Result<(String, Vec<String>), OpenError> {
        if let Some(browser) = &self.browser {
            return Ok((browser.clone(), vec![url.to_string()]));
        }
        let (program, mut args): (&str, Vec<String>) = if cfg!(target_os = "macos") {
            ("open", vec![])
        } else if cfg!(windows) {
            // rundll32 avoids cmd.exe treating `&` in the query as a separator.
            ("rundll32", vec!["url.dll,FileProtocolHandler".to_string()])
        } else if cfg!(unix) {
            ("xdg-open", vec![])
        } else {
            return Err(OpenError::NoLauncher);
        };
        args.push(url.to_string());
        Ok((program.to_string(), args))
    }
}

#[async_trait]
impl UrlOpener for BrowserOpener {
    fn name(&self) -> &str {
        "browser"
    }

    async fn open(&self, url: &str) -> Result<(), OpenError> {
        let (program, args) = self.launcher(url)?;
        tracing::debug!(target: "envreport.opener", program = %program, "launching browser");

        let status = Command::new(&program)
            .args(&args)
            .status()
            .await
            .map_err(|source| OpenError::Spawn {
                program: program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(OpenError::Exit {
                code: status.code().unwrap_or(1),
            });
        }
        Ok(())
    }
}
