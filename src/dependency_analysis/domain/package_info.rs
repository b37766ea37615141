use super::{Dependency, ImportPath};

/// PackageInfo - a dependency annotated with the metadata `go list` reports for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    name: String,
    import_path: ImportPath,
    directly_imported: bool,
    standard_library: bool,
    sub_package: bool,
}

impl PackageInfo {
    /// Joins a dependency with its metadata.
    ///
    /// Sub-package status is derived from `root`, never supplied by the caller.
    pub fn from_dependency(
        dependency: Dependency,
        name: String,
        standard_library: bool,
        root: &ImportPath,
    ) -> Self {
        let sub_package = dependency.import_path().is_sub_package_of(root);
        let directly_imported = dependency.is_directly_imported();
        Self {
            name,
            import_path: dependency.import_path().clone(),
            directly_imported,
            standard_library,
            sub_package,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn import_path(&self) -> &ImportPath {
        &self.import_path
    }

    pub fn is_directly_imported(&self) -> bool {
        self.directly_imported
    }

    pub fn is_standard_library(&self) -> bool {
        self.standard_library
    }

    pub fn is_sub_package(&self) -> bool {
        self.sub_package
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> ImportPath {
        ImportPath::new(s).unwrap()
    }

    #[test]
    fn test_from_dependency_copies_fields() {
        let dep = Dependency::new(path("bytes"), true);
        let info = PackageInfo::from_dependency(dep, "bytes".to_string(), true, &path("log"));

        assert_eq!(info.name(), "bytes");
        assert_eq!(info.import_path().as_str(), "bytes");
        assert!(info.is_directly_imported());
        assert!(info.is_standard_library());
        assert!(!info.is_sub_package());
    }

    #[test]
    fn test_from_dependency_marks_sub_package() {
        let root = path("github.com/m3ng9i/go-utils");
        let dep = Dependency::new(path("github.com/m3ng9i/go-utils/cmd"), false);
        let info = PackageInfo::from_dependency(dep, "cmd".to_string(), false, &root);

        assert!(info.is_sub_package());
        assert!(!info.is_directly_imported());
        assert!(!info.is_standard_library());
    }
}
