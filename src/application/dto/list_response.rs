use crate::dependency_analysis::domain::{ImportPath, PackageInfo};

/// ListResponse - Internal response DTO from the dependency listing use case
#[derive(Debug, Clone)]
pub struct ListResponse {
    /// The package that was inspected
    pub root: ImportPath,
    /// Packages that passed the filter, in `go list` order
    pub packages: Vec<PackageInfo>,
    /// Size of the unfiltered dependency set
    pub total_count: usize,
}

impl ListResponse {
    pub fn new(root: ImportPath, packages: Vec<PackageInfo>, total_count: usize) -> Self {
        Self {
            root,
            packages,
            total_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
