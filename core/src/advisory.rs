//! Non-fatal check that the local Node.js major is one the project supports.

use semver::{Version, VersionReq};
use serde::{Deserialize, Deserializer};

/// Supported Node versions as declared by the project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NodeSupport {
    #[serde(deserialize_with = "deserialize_majors")]
    Majors(Vec<String>),
    Range(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MajorRepr {
    Number(u64),
    Text(String),
}

fn deserialize_majors<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<MajorRepr>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|m| match m {
            MajorRepr::Number(n) => n.to_string(),
            MajorRepr::Text(s) => s.trim().to_string(),
        })
        .collect())
}

pub fn major_of(version: &str) -> &str {
    let v = version.trim().trim_start_matches('v');
    v.split('.').next().unwrap_or(v)
}

fn lenient_version(version: &str) -> Option<Version> {
    let v = version.trim().trim_start_matches('v');
    let padded = match v.matches('.').count() {
        0 => format!("{v}.0.0"),
        1 => format!("{v}.0"),
        _ => v.to_string(),
    };
    Version::parse(&padded).ok()
}

fn range_matches(range: &str, version: &str) -> bool {
    let Some(parsed) = lenient_version(version) else {
        tracing::debug!(target: "envreport.advisory", version, "unparseable node version");
        return false;
    };
    range.split("||").map(str::trim).filter(|alt| !alt.is_empty()).any(|alt| {
        match VersionReq::parse(alt) {
            Ok(req) => req.matches(&parsed),
            Err(e) => {
                tracing::warn!(target: "envreport.advisory", range = alt, error = %e, "ignoring invalid node range");
                false
            }
        }
    })
}

/// "14", "12 and 14", "14, 16, and 18".
pub fn join_versions(majors: &[String]) -> String {
    match majors {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{a} and {b}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

impl NodeSupport {
    pub fn supports(&self, version: &str) -> bool {
        match self {
            NodeSupport::Majors(majors) => {
                let major = major_of(version);
                majors.iter().any(|m| m == major)
            }
            NodeSupport::Range(range) => range_matches(range, version),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            NodeSupport::Majors(majors) => join_versions(majors),
            NodeSupport::Range(range) => range.trim().to_string(),
        }
    }

    fn default_template(&self) -> &'static str {
        match self {
            NodeSupport::Majors(_) => {
                "Node version {version} not supported. Supported versions are {supported}"
            }
            NodeSupport::Range(_) => "Node version {version} not supported. Supported range is {supported}",
        }
    }

    /// Warning text when `version` is unsupported; `template` may use
    /// `{version}` and `{supported}` placeholders.
    pub fn advise(&self, version: &str, template: Option<&str>) -> Option<String> {
        if self.supports(version) {
            return None;
        }
        let template = template.unwrap_or_else(|| self.default_template());
        Some(
            template
                .replace("{version}", version.trim())
                .replace("{supported}", &self.describe()),
        )
    }
}
