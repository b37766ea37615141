use crate::dependency_analysis::domain::PackageInfo;

/// PackageFilter - Selects which packages appear in the listing
///
/// Each switch widens the result: with every switch off only direct,
/// third-party, non-sub-package imports remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageFilter {
    include_all: bool,
    include_builtin: bool,
    include_sub_packages: bool,
}

impl PackageFilter {
    /// Creates a new PackageFilter
    ///
    /// # Arguments
    /// * `include_all` - keep transitive dependencies, not only direct imports
    /// * `include_builtin` - keep standard-library packages
    /// * `include_sub_packages` - keep sub-packages of the root package
    pub fn new(include_all: bool, include_builtin: bool, include_sub_packages: bool) -> Self {
        Self {
            include_all,
            include_builtin,
            include_sub_packages,
        }
    }

    /// Filters packages, preserving input order
    pub fn filter_packages(&self, packages: Vec<PackageInfo>) -> Vec<PackageInfo> {
        packages
            .into_iter()
            .filter(|pkg| self.matches(pkg))
            .collect()
    }

    /// Checks whether a package passes all enabled criteria
    pub fn matches(&self, package: &PackageInfo) -> bool {
        (self.include_all || package.is_directly_imported())
            && (self.include_builtin || !package.is_standard_library())
            && (self.include_sub_packages || !package.is_sub_package())
    }
}

impl Default for PackageFilter {
    /// Direct imports only, builtin and sub-packages included
    fn default() -> Self {
        Self::new(false, true, true)
    }
}
