use serde_json::{Map, Value};

/// Schemes inspected by `info`, in output order.
pub const SCHEMES: [&str; 2] = ["http", "https"];

pub trait ProxyResolver: Send + Sync {
    fn name(&self) -> &str;

    /// Proxy URL that would be used for `url`, or an empty string when none applies.
    fn proxy_for_url(&self, url: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEntry {
    pub scheme: &'static str,
    pub url: String,
}

impl ProxyEntry {
    pub fn is_set(&self) -> bool {
        !self.url.is_empty()
    }

    /// Only a configured proxy can mismatch.
    pub fn mismatch(&self) -> bool {
        self.is_set() && !proxy_is_valid(self.scheme, &self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub entries: Vec<ProxyEntry>,
}

impl ProxyConfig {
    pub fn get(&self, scheme: &str) -> Option<&ProxyEntry> {
        self.entries.iter().find(|e| e.scheme == scheme)
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|e| (e.scheme.to_string(), Value::String(e.url.clone())))
            .collect();
        Value::Object(map)
    }
}

pub fn proxy_is_valid(scheme: &str, value: &str) -> bool {
    value.trim().starts_with(&format!("{scheme}://"))
}

pub fn inspect_proxies(resolver: &dyn ProxyResolver) -> ProxyConfig {
    let entries = SCHEMES
        .into_iter()
        .map(|scheme| {
            let url = resolver.proxy_for_url(&format!("{scheme}://anyhost"));
            let entry = ProxyEntry { scheme, url };
            if entry.mismatch() {
                tracing::debug!(target: "envreport.proxy", scheme, url = %entry.url, "proxy scheme mismatch");
            }
            entry
        })
        .collect();
    ProxyConfig { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedResolver(HashMap<&'static str, &'static str>);

    impl ProxyResolver for FixedResolver {
        fn name(&self) -> &str {
            "fixed"
        }

        fn proxy_for_url(&self, url: &str) -> String {
            self.0.get(url).map(|s| s.to_string()).unwrap_or_default()
        }
    }

    #[test]
    fn validity_requires_matching_scheme_prefix() {
        assert!(proxy_is_valid("http", "http://x"));
        assert!(!proxy_is_valid("http", "https://x"));
        assert!(proxy_is_valid("https", "https://x"));
        assert!(!proxy_is_valid("https", "http://x"));
        assert!(proxy_is_valid("http", "  http://padded:8080 "));
        assert!(!proxy_is_valid("http", "socks5://x"));
    }

    #[test]
    fn inspects_both_schemes_in_order() {
        let resolver = FixedResolver(HashMap::from([
            ("http://anyhost", "https://proxy:443"),
            ("https://anyhost", "https://proxy:443"),
        ]));
        let proxies = inspect_proxies(&resolver);
        let schemes: Vec<&str> = proxies.entries.iter().map(|e| e.scheme).collect();
        assert_eq!(schemes, vec!["http", "https"]);
        assert!(proxies.get("http").unwrap().mismatch());
        assert!(!proxies.get("https").unwrap().mismatch());
    }

    #[test]
    fn unset_proxy_is_not_a_mismatch() {
        let proxies = inspect_proxies(&FixedResolver(HashMap::new()));
        assert!(proxies.entries.iter().all(|e| !e.is_set() && !e.mismatch()));
        assert_eq!(proxies.to_json(), serde_json::json!({"http": "", "https": ""}));
    }
}
