use serde_json::{Map, Value};

use super::request::{Category, ProbeOptions};

pub const NOT_FOUND: &str = "Not Found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactValue {
    NotFound,
    Text(String),
    Versioned { version: String, path: String },
}

impl FactValue {
    fn to_text(&self) -> String {
        match self {
            FactValue::NotFound => NOT_FOUND.to_string(),
            FactValue::Text(s) => s.clone(),
            FactValue::Versioned { version, path } => format!("{version} - {path}"),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            FactValue::NotFound => Value::String(NOT_FOUND.to_string()),
            FactValue::Text(s) => Value::String(s.clone()),
            FactValue::Versioned { version, path } => {
                let mut m = Map::new();
                m.insert("version".into(), Value::String(version.clone()));
                m.insert("path".into(), Value::String(path.clone()));
                Value::Object(m)
            }
        }
    }
}

/// Ordered facts grouped by category, ready to be printed or serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFacts {
    sections: Vec<(Category, Vec<(String, FactValue)>)>,
}

impl EnvFacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category, field: impl Into<String>, value: FactValue) {
        let field = field.into();
        match self.sections.iter_mut().find(|(c, _)| *c == category) {
            Some((_, entries)) => entries.push((field, value)),
            None => self.sections.push((category, vec![(field, value)])),
        }
    }

    pub fn get(&self, category: Category, field: &str) -> Option<&FactValue> {
        self.sections
            .iter()
            .find(|(c, _)| *c == category)
            .and_then(|(_, entries)| entries.iter().find(|(f, _)| f == field))
            .map(|(_, v)| v)
    }

    pub fn render(&self, options: ProbeOptions) -> String {
        if options.json {
            Value::Object(self.to_json(options.show_not_found)).to_string()
        } else {
            self.to_text(options.show_not_found)
        }
    }

    fn visible(show_not_found: bool, value: &FactValue) -> bool {
        show_not_found || *value != FactValue::NotFound
    }

    pub fn to_text(&self, show_not_found: bool) -> String {
        let mut lines = Vec::new();
        for (category, entries) in &self.sections {
            lines.push(format!("  {}:", category.label()));
            for (field, value) in entries.iter().filter(|(_, v)| Self::visible(show_not_found, v)) {
                lines.push(format!("    {field}: {}", value.to_text()));
            }
        }
        lines.join("\n")
    }

    pub fn to_json(&self, show_not_found: bool) -> Map<String, Value> {
        let mut root = Map::new();
        for (category, entries) in &self.sections {
            let mut section = Map::new();
            for (field, value) in entries.iter().filter(|(_, v)| Self::visible(show_not_found, v)) {
                section.insert(field.clone(), value.to_json());
            }
            root.insert(category.label().to_string(), Value::Object(section));
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> EnvFacts {
        let mut facts = EnvFacts::new();
        facts.push(Category::System, "OS", FactValue::Text("Linux 6.1".into()));
        facts.push(
            Category::Binaries,
            "Node",
            FactValue::Versioned {
                version: "18.12.0".into(),
                path: "/usr/bin/node".into(),
            },
        );
        facts.push(Category::Binaries, "Yarn", FactValue::NotFound);
        facts
    }

    #[test]
    fn text_layout_indents_categories_and_fields() {
        let text = sample().to_text(true);
        assert_eq!(
            text,
            "  System:\n    OS: Linux 6.1\n  Binaries:\n    Node: 18.12.0 - /usr/bin/node\n    Yarn: Not Found"
        );
    }

    #[test]
    fn hides_missing_when_asked() {
        let text = sample().to_text(false);
        assert!(!text.contains("Yarn"));
        let json = sample().to_json(false);
        assert!(json["Binaries"].get("Yarn").is_none());
    }

    #[test]
    fn json_keeps_version_and_path_apart() {
        let json = sample().to_json(true);
        assert_eq!(json["Binaries"]["Node"]["version"], "18.12.0");
        assert_eq!(json["Binaries"]["Yarn"], NOT_FOUND);
        let keys: Vec<&String> = json.keys().collect();
        assert_eq!(keys, vec!["System", "Binaries"]);
    }

    #[test]
    fn render_switches_on_json_option() {
        let facts = sample();
        let raw = facts.render(ProbeOptions::json());
        let parsed: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["System"]["OS"], "Linux 6.1");
        assert!(facts.render(ProbeOptions::text()).starts_with("  System:"));
    }
}
