use serde_json::{Map, Value};

use crate::error::{ProbeError, RenderError};
use crate::plugin::ClassifiedPlugin;

use super::ReportInput;

pub const PROXIES_KEY: &str = "Proxies";
pub const PLUGINS_KEY: &str = "CLI Plugins";

fn plugin_entry(p: &ClassifiedPlugin) -> Value {
    let mut entry = Map::new();
    entry.insert("name".into(), Value::String(p.name().to_string()));
    entry.insert("version".into(), Value::String(p.version().to_string()));
    entry.insert("type".into(), Value::String(p.plugin_type().as_str().to_string()));
    if p.overrides_core {
        entry.insert("overrides_core_plugin".into(), Value::Bool(true));
    }
    Value::Object(entry)
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Probe facts with `Proxies` and `CLI Plugins` appended as top-level keys.
pub fn build_document(input: &ReportInput<'_>) -> Result<Value, ProbeError> {
    let parsed: Value = serde_json::from_str(input.facts).map_err(ProbeError::Malformed)?;
    let mut doc = match parsed {
        Value::Object(map) => map,
        other => return Err(ProbeError::NotAnObject(kind_of(&other))),
    };

    doc.insert(PROXIES_KEY.to_string(), input.proxies.to_json());

    let mut plugins = Map::new();
    for (key, group) in input.plugins.groups() {
        let entries: Vec<Value> = group.iter().map(plugin_entry).collect();
        plugins.insert(key.to_string(), Value::Array(entries));
    }
    doc.insert(PLUGINS_KEY.to_string(), Value::Object(plugins));

    Ok(Value::Object(doc))
}

pub fn to_json(doc: &Value) -> Result<String, RenderError> {
    serde_json::to_string_pretty(doc).map_err(RenderError::Json)
}

pub fn to_yaml(doc: &Value) -> Result<String, RenderError> {
    serde_yaml::to_string(doc)
        .map(|s| s.trim_end().to_string())
        .map_err(RenderError::Yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{classify_plugins, ClassifiedPlugins, CorePluginRegistry, PluginRecord, PluginType};
    use crate::proxy::{ProxyConfig, ProxyEntry};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn proxies() -> ProxyConfig {
        ProxyConfig {
            entries: vec![
                ProxyEntry { scheme: "http", url: "https://wrong".into() },
                ProxyEntry { scheme: "https", url: String::new() },
            ],
        }
    }

    fn plugins() -> ClassifiedPlugins {
        classify_plugins(
            &[
                PluginRecord::new("core-plugin-a", "1.0.0", PluginType::Core),
                PluginRecord::new("core-plugin-b", "1.0.0", PluginType::User),
                PluginRecord::new("user-plugin", "1.0.0", PluginType::User),
                PluginRecord::new("link-plugin", "1.0.0", PluginType::Link),
            ],
            &CorePluginRegistry::new(vec!["core-plugin-a".into(), "core-plugin-b".into()]),
        )
    }

    #[test]
    fn appends_proxies_and_plugins_after_facts() {
        let proxies = proxies();
        let plugins = plugins();
        let doc = build_document(&ReportInput {
            facts: r#"{"System":{"OS":"Linux"}}"#,
            proxies: &proxies,
            plugins: &plugins,
        })
        .unwrap();

        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["System", "Proxies", "CLI Plugins"]);
        // no mismatch marker in structured output
        assert_eq!(doc["Proxies"], json!({"http": "https://wrong", "https": ""}));
        assert_eq!(
            doc["CLI Plugins"],
            json!({
                "core": [{"name": "core-plugin-a", "version": "1.0.0", "type": "core"}],
                "user": [
                    {"name": "core-plugin-b", "version": "1.0.0", "type": "user", "overrides_core_plugin": true},
                    {"name": "user-plugin", "version": "1.0.0", "type": "user"}
                ],
                "link": [{"name": "link-plugin", "version": "1.0.0", "type": "link"}]
            })
        );
    }

    #[test]
    fn rejects_non_object_facts() {
        let proxies = proxies();
        let plugins = plugins();
        let err = build_document(&ReportInput {
            facts: "ok",
            proxies: &proxies,
            plugins: &plugins,
        })
        .unwrap_err();
        assert!(matches!(err, ProbeError::Malformed(_)));

        let err = build_document(&ReportInput {
            facts: "[1]",
            proxies: &proxies,
            plugins: &plugins,
        })
        .unwrap_err();
        assert!(matches!(err, ProbeError::NotAnObject("an array")));
    }

    #[test]
    fn json_is_two_space_pretty() {
        let out = to_json(&json!({"a": {"b": 1}})).unwrap();
        assert_eq!(out, "{\n  \"a\": {\n    \"b\": 1\n  }\n}");
    }

    #[test]
    fn yaml_uses_block_style() {
        let doc = json!({"CLI Plugins": {"core": [{"name": "x"}]}});
        let out = to_yaml(&doc).unwrap();
        assert!(out.starts_with("CLI Plugins:\n  core:\n"));
        assert!(!out.contains('{'));
        let back: Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(back, doc);
    }
}
