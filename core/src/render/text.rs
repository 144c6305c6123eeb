use crate::plugin::ClassifiedPlugin;
use crate::proxy::ProxyEntry;

use super::ReportInput;

const NOT_SET: &str = "(not set)";
const MISMATCH: &str = " (scheme mismatch)";
const OVERRIDE_MARK: &str = " (*)";

pub(crate) fn indent(s: &str, count: usize) -> String {
    format!("{}{}", " ".repeat(count), s)
}

fn proxy_line(entry: &ProxyEntry) -> String {
    let url = if entry.is_set() { entry.url.as_str() } else { NOT_SET };
    let suffix = if entry.mismatch() { MISMATCH } else { "" };
    indent(&format!("{}: {url}{suffix}", entry.scheme), 4)
}

fn plugin_line(plugin: &ClassifiedPlugin) -> String {
    let mark = if plugin.overrides_core { OVERRIDE_MARK } else { "" };
    indent(&format!("{} {}{mark}", plugin.name(), plugin.version()), 6)
}

pub fn render_text(input: &ReportInput<'_>) -> String {
    let mut lines: Vec<String> = vec![input.facts.trim_end().to_string(), String::new()];

    lines.push(indent("Proxies:", 2));
    lines.extend(input.proxies.entries.iter().map(proxy_line));
    lines.push(String::new());

    lines.push(indent("CLI plugins:", 2));
    for (key, group) in input.plugins.groups() {
        lines.push(indent(&format!("{key}:"), 4));
        lines.extend(group.iter().map(plugin_line));
    }
    lines.join("\n")
}
