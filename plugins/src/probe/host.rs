//! Host facts read through `sysinfo`.

use sysinfo::System;

use envreport_core::api::FactValue;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Architecture names as Node reports them.
pub fn node_arch(rust_arch: &str) -> &str {
    match rust_arch {
        "x86_64" => "x64",
        "x86" => "ia32",
        "aarch64" => "arm64",
        "powerpc64" => "ppc64",
        other => other,
    }
}

pub fn format_os(long_os: Option<String>, kernel: Option<String>) -> FactValue {
    match (long_os, kernel) {
        (Some(os), Some(kernel)) => FactValue::Text(format!("{os} {kernel}")),
        (Some(os), None) => FactValue::Text(os),
        (None, Some(kernel)) => FactValue::Text(format!("{} {kernel}", std::env::consts::OS)),
        (None, None) => FactValue::Text(std::env::consts::OS.to_string()),
    }
}

pub fn format_cpu(count: usize, arch: &str, brand: Option<&str>) -> FactValue {
    let brand = brand.map(str::trim).filter(|b| !b.is_empty());
    match brand {
        Some(brand) => FactValue::Text(format!("({count}) {} {brand}", node_arch(arch))),
        None => FactValue::Text(format!("({count}) {}", node_arch(arch))),
    }
}

pub fn format_memory(free_bytes: u64, total_bytes: u64) -> FactValue {
    FactValue::Text(format!(
        "{:.2} GB / {:.2} GB",
        free_bytes as f64 / GIB,
        total_bytes as f64 / GIB
    ))
}

pub struct HostFacts {
    pub os: FactValue,
    pub cpu: FactValue,
    pub memory: FactValue,
}

/// Blocking; refreshes CPU and memory only.
pub fn gather() -> HostFacts {
    let mut sys = System::new();
    sys.refresh_memory();
    sys.refresh_cpu();

    let brand = sys.cpus().first().map(|c| c.brand().to_string());
    HostFacts {
        os: format_os(System::long_os_version(), System::kernel_version()),
        cpu: format_cpu(sys.cpus().len(), std::env::consts::ARCH, brand.as_deref()),
        memory: format_memory(sys.free_memory(), sys.total_memory()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_node_tooling() {
        assert_eq!(
            format_cpu(8, "x86_64", Some(" Intel(R) Core(TM) i7 ")),
            FactValue::Text("(8) x64 Intel(R) Core(TM) i7".into())
        );
        assert_eq!(format_cpu(4, "aarch64", Some("")), FactValue::Text("(4) arm64".into()));
        assert_eq!(
            format_memory(512 * 1024 * 1024, 16 * 1024 * 1024 * 1024),
            FactValue::Text("0.50 GB / 16.00 GB".into())
        );
        assert_eq!(
            format_os(Some("Linux 22.04 Ubuntu".into()), Some("6.1.0".into())),
            FactValue::Text("Linux 22.04 Ubuntu 6.1.0".into())
        );
    }

    #[test]
    fn gather_fills_every_field() {
        let facts = gather();
        for fact in [facts.os, facts.cpu, facts.memory] {
            assert!(matches!(fact, FactValue::Text(ref s) if !s.is_empty()));
        }
    }
}
