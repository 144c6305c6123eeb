//! Builds the concrete collaborators each command needs.
use envreport_core::api::{AppConfig, InfoServices, ReportServices};

use crate::opener::BrowserOpener;
use crate::probe::SystemProbe;
use crate::proxy::EnvProxyResolver;

pub fn build_info_services() -> InfoServices {
    InfoServices {
        probe: Box::new(SystemProbe::new()),
        proxy: Box::new(EnvProxyResolver::from_process_env()),
    }
}

pub fn build_report_services(cfg: &AppConfig) -> ReportServices {
    ReportServices {
        probe: Box::new(SystemProbe::new()),
        opener: Box::new(match &cfg.browser {
            Some(browser) => BrowserOpener::new(Some(browser.clone())),
            None => BrowserOpener::from_env(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wires_system_collaborators() {
        let cfg = AppConfig::default();
        let info = build_info_services();
        assert_eq!(info.probe.name(), "system");
        assert_eq!(info.proxy.name(), "env");
        let report = build_report_services(&cfg);
        assert_eq!(report.opener.name(), "browser");
    }
}
