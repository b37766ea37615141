use serde::Deserialize;

/// GraphListing - the import graph of a root package as `go list -json` reports it
///
/// `go list` omits empty arrays, hence the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GraphListing {
    /// Canonical import path of the root, e.g. the module path when the root
    /// was given as `.`
    #[serde(rename = "ImportPath", default)]
    pub import_path: Option<String>,
    /// Packages imported directly by the root package's source files
    #[serde(rename = "Imports", default)]
    pub imports: Vec<String>,
    /// Every package in the transitive closure, direct imports included
    #[serde(rename = "Deps", default)]
    pub deps: Vec<String>,
}

impl GraphListing {
    pub fn new(imports: Vec<String>, deps: Vec<String>) -> Self {
        Self {
            import_path: None,
            imports,
            deps,
        }
    }

    pub fn with_import_path(mut self, import_path: impl Into<String>) -> Self {
        self.import_path = Some(import_path.into());
        self
    }
}

/// PackageMetadata - the `{{.Name}}:{{.Standard}}` pair reported for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: String,
    pub standard_library: bool,
}

impl PackageMetadata {
    pub fn new(name: impl Into<String>, standard_library: bool) -> Self {
        Self {
            name: name.into(),
            standard_library,
        }
    }
}
