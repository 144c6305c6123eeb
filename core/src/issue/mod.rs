use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const PLACEHOLDER: &str = "%replaced%";

pub const ISSUE_TEMPLATE: &str = "### Expected Behaviour\n\n\
### Actual Behaviour\n\n\
### Reproduce Scenario (including but not limited to)\n\n\
#### Steps to Reproduce\n\n\
#### Environment Info\n\
```%replaced%```\n\
#### Sample Code that illustrates the problem\n\n\
#### Logs taken while reproducing problem\n";

/// Characters left intact by a URI component encoder.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Bug,
    Feature,
}

pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Puts the environment report on its own lines inside the code fence.
pub fn fill_template(env_info: &str) -> String {
    let fenced = format!("\n{}\n", env_info.trim_matches('\n'));
    ISSUE_TEMPLATE.replacen(PLACEHOLDER, &fenced, 1)
}

fn new_issue_base(bug_url: &str) -> String {
    format!("{}/new/", bug_url.trim_end_matches('/'))
}

pub fn feature_request_url(bug_url: &str) -> String {
    format!(
        "{}?body=&title=new+feature+request&labels=enhancement",
        new_issue_base(bug_url)
    )
}

pub fn bug_report_url(bug_url: &str, env_info: &str) -> String {
    format!(
        "{}?body={}&title=new+bug+report&labels=bug",
        new_issue_base(bug_url),
        encode_component(&fill_template(env_info))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{Category, EnvFacts, FactValue, ProbeOptions};
    use pretty_assertions::assert_eq;

    #[test]
    fn template_has_single_placeholder() {
        assert_eq!(ISSUE_TEMPLATE.matches(PLACEHOLDER).count(), 1);
        let filled = fill_template("\n  System:\n    OS: Linux\n");
        assert!(filled.contains("#### Environment Info\n```\n  System:\n    OS: Linux\n```\n"));
        assert!(!filled.contains(PLACEHOLDER));
    }

    #[test]
    fn rendered_facts_sit_inside_the_fence() {
        let mut facts = EnvFacts::new();
        facts.push(Category::System, "OS", FactValue::Text("Linux 6.1".into()));
        facts.push(Category::Virtualization, "Docker", FactValue::NotFound);
        let filled = fill_template(&facts.render(ProbeOptions::text()));

        assert!(filled.contains(
            "#### Environment Info\n```\n  System:\n    OS: Linux 6.1\n  Virtualization:\n    Docker: Not Found\n```\n"
        ));
        assert!(filled.lines().all(|l| !l.starts_with("```  ")));
    }

    #[test]
    fn replacement_text_is_not_rescanned() {
        let filled = fill_template("odd %replaced% value");
        assert_eq!(filled.matches(PLACEHOLDER).count(), 1);
    }

    #[test]
    fn encodes_like_uri_component() {
        assert_eq!(encode_component("a b&c=d/e?#"), "a%20b%26c%3Dd%2Fe%3F%23");
        assert_eq!(encode_component("keep-_.!~*'()"), "keep-_.!~*'()");
        assert_eq!(encode_component("\n`é"), "%0A%60%C3%A9");
    }

    #[test]
    fn feature_url_has_empty_body() {
        assert_eq!(
            feature_request_url("some-link"),
            "some-link/new/?body=&title=new+feature+request&labels=enhancement"
        );
        assert_eq!(
            feature_request_url("https://github.com/o/r/issues/"),
            "https://github.com/o/r/issues/new/?body=&title=new+feature+request&labels=enhancement"
        );
    }

    #[test]
    fn bug_url_embeds_encoded_template() {
        let url = bug_report_url("some-link", "ok");
        assert!(url.starts_with("some-link/new/?body="));
        assert!(url.ends_with("&title=new+bug+report&labels=bug"));
        assert!(url.contains(&encode_component("```\nok\n```")));
        assert!(url.contains("%23%23%23%20Expected%20Behaviour"));
    }
}
