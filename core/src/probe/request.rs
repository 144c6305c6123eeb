#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    System,
    Binaries,
    Virtualization,
    NpmGlobalPackages,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::System => "System",
            Category::Binaries => "Binaries",
            Category::Virtualization => "Virtualization",
            Category::NpmGlobalPackages => "npmGlobalPackages",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSection {
    pub category: Category,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub sections: Vec<ProbeSection>,
}

impl ProbeRequest {
    /// The request both commands send: host facts, toolchain binaries, Docker,
    /// and the globally installed copy of `package_name`.
    pub fn standard(package_name: &str) -> Self {
        fn section(category: Category, fields: &[&str]) -> ProbeSection {
            ProbeSection {
                category,
                fields: fields.iter().map(|f| f.to_string()).collect(),
            }
        }
        Self {
            sections: vec![
                section(Category::System, &["OS", "CPU", "Memory", "Shell"]),
                section(Category::Binaries, &["Node", "Yarn", "npm"]),
                section(Category::Virtualization, &["Docker"]),
                section(Category::NpmGlobalPackages, &[package_name]),
            ],
        }
    }

    /// Like [`ProbeRequest::standard`], omitting the global package lookup
    /// when the project has no name.
    pub fn for_project(package_name: Option<&str>) -> Self {
        match package_name {
            Some(name) => Self::standard(name),
            None => {
                let mut req = Self::standard("");
                req.sections.retain(|s| s.category != Category::NpmGlobalPackages);
                req
            }
        }
    }

    pub fn section(&self, category: Category) -> Option<&ProbeSection> {
        self.sections.iter().find(|s| s.category == category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOptions {
    pub json: bool,
    pub console: bool,
    pub show_not_found: bool,
}

impl ProbeOptions {
    pub fn text() -> Self {
        Self {
            json: false,
            console: false,
            show_not_found: true,
        }
    }

    pub fn json() -> Self {
        Self {
            json: true,
            ..Self::text()
        }
    }
}
