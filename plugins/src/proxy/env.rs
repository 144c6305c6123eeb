use envreport_core::api::ProxyResolver;
use url::Url;

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves proxies from `*_proxy` / `NO_PROXY` variables, the way npm-era
/// tooling does.
pub struct EnvProxyResolver {
    lookup: Lookup,
}

impl Default for EnvProxyResolver {
    fn default() -> Self {
        Self::from_process_env()
    }
}

impl EnvProxyResolver {
    pub fn from_process_env() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Box::new(lookup),
        }
    }

    /// Lowercase name first, then uppercase; empty when neither is set.
    fn env(&self, key: &str) -> String {
        (self.lookup)(&key.to_ascii_lowercase())
            .or_else(|| (self.lookup)(&key.to_ascii_uppercase()))
            .unwrap_or_default()
    }

    fn first_env(&self, keys: &[String]) -> String {
        keys.iter()
            .map(|k| self.env(k))
            .find(|v| !v.is_empty())
            .unwrap_or_default()
    }

    fn should_proxy(&self, host: &str, port: u16) -> bool {
        let no_proxy = self
            .first_env(&["npm_config_no_proxy".to_string(), "no_proxy".to_string()])
            .to_ascii_lowercase();
        if no_proxy.is_empty() {
            return true;
        }
        if no_proxy == "*" {
            return false;
        }

        no_proxy
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|entry| !entry.is_empty())
            .all(|entry| {
                let (entry_host, entry_port) = split_port(entry);
                if let Some(p) = entry_port {
                    if p != port {
                        return true;
                    }
                }
                if !entry_host.starts_with('.') && !entry_host.starts_with('*') {
                    return host != entry_host;
                }
                let suffix = entry_host.strip_prefix('*').unwrap_or(entry_host);
                !host.ends_with(suffix)
            })
    }
}

/// `host:port` -> (`host`, Some(port)); anything else is all host.
fn split_port(s: &str) -> (&str, Option<u16>) {
    if let Some((host, port)) = s.rsplit_once(':') {
        let plain_host = !host.is_empty() && !host.contains(':');
        if plain_host || host.ends_with(']') {
            if let Ok(p) = port.parse::<u16>() {
                return (host, Some(p));
            }
        }
    }
    (s, None)
}

impl ProxyResolver for EnvProxyResolver {
    fn name(&self) -> &str {
        "env"
    }

    fn proxy_for_url(&self, url: &str) -> String {
        let target = match Url::parse(url) {
            Ok(u) => u,
            Err(e) => {
                tracing::debug!(target: "envreport.proxy", url, error = %e, "unparseable target url");
                return String::new();
            }
        };
        let (Some(host), Some(port)) = (target.host_str(), target.port_or_known_default()) else {
            return String::new();
        };
        let scheme = target.scheme();
        if !self.should_proxy(&host.to_ascii_lowercase(), port) {
            return String::new();
        }

        let proxy = self.first_env(&[
            format!("npm_config_{scheme}_proxy"),
            format!("{scheme}_proxy"),
            "npm_config_proxy".to_string(),
            "all_proxy".to_string(),
        ]);
        if !proxy.is_empty() && !proxy.contains("://") {
            return format!("{scheme}://{proxy}");
        }
        proxy
    }
}
