#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use envreport_core::api::{
    EnvProbe, OpenError, ProbeError, ProbeOptions, ProbeRequest, ProxyResolver, UrlOpener,
};

#[derive(Debug, Clone)]
pub struct ProbeCall {
    pub request: ProbeRequest,
    pub options: ProbeOptions,
}

/// Probe double returning canned text/json and recording each call.
#[derive(Clone, Default)]
pub struct MockProbe {
    pub text: String,
    pub json: String,
    pub node_version: Option<String>,
    pub fail: bool,
    pub node_fail: bool,
    calls: Arc<Mutex<Vec<ProbeCall>>>,
    node_calls: Arc<Mutex<usize>>,
}

impl MockProbe {
    pub fn new() -> Self {
        Self {
            text: "  System:\n    OS: TestOS".to_string(),
            json: r#"{"System":{"OS":"TestOS"}}"#.to_string(),
            node_version: Some("14.5.0".to_string()),
            ..Self::default()
        }
    }

    pub fn with_node(mut self, version: Option<&str>) -> Self {
        self.node_version = version.map(str::to_string);
        self
    }

    pub fn with_failing_node(mut self) -> Self {
        self.node_fail = true;
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<ProbeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn node_calls(&self) -> usize {
        *self.node_calls.lock().unwrap()
    }
}

#[async_trait]
impl EnvProbe for MockProbe {
    fn name(&self) -> &str {
        "mock"
    }

    async fn run(&self, request: &ProbeRequest, options: ProbeOptions) -> Result<String, ProbeError> {
        self.calls.lock().unwrap().push(ProbeCall {
            request: request.clone(),
            options,
        });
        if self.fail {
            return Err(ProbeError::Failed(anyhow::anyhow!("probe exploded")));
        }
        Ok(if options.json { self.json.clone() } else { self.text.clone() })
    }

    async fn node_info(&self) -> Result<(String, Option<String>), ProbeError> {
        *self.node_calls.lock().unwrap() += 1;
        if self.node_fail {
            return Err(ProbeError::Failed(anyhow::anyhow!("node exploded")));
        }
        Ok(("Node".to_string(), self.node_version.clone()))
    }
}

#[derive(Clone, Default)]
pub struct MockProxy {
    pub by_url: HashMap<String, String>,
}

impl MockProxy {
    pub fn with(mut self, url: &str, proxy: &str) -> Self {
        self.by_url.insert(url.to_string(), proxy.to_string());
        self
    }
}

impl ProxyResolver for MockProxy {
    fn name(&self) -> &str {
        "mock"
    }

    fn proxy_for_url(&self, url: &str) -> String {
        self.by_url.get(url).cloned().unwrap_or_default()
    }
}

#[derive(Clone, Default)]
pub struct MockOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl MockOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlOpener for MockOpener {
    fn name(&self) -> &str {
        "mock"
    }

    async fn open(&self, url: &str) -> Result<(), OpenError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
