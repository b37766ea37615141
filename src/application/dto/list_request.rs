use crate::dependency_analysis::domain::BatchLimit;
use crate::dependency_analysis::services::PackageFilter;
use crate::shared::Result;

/// ListRequest - Internal request DTO for the dependency listing use case
#[derive(Debug, Clone)]
pub struct ListRequest {
    /// Import path to inspect; `None` means the package in the working directory
    pub package: Option<String>,
    /// Which packages end up in the listing
    pub filter: PackageFilter,
    /// Ceiling on import-path characters per metadata query
    pub batch_limit: BatchLimit,
}

impl ListRequest {
    pub fn new(package: Option<String>, filter: PackageFilter, batch_limit: BatchLimit) -> Self {
        Self {
            package,
            filter,
            batch_limit,
        }
    }

    pub fn builder() -> ListRequestBuilder {
        ListRequestBuilder::default()
    }
}

/// Builder for ListRequest
///
/// Switches default to the CLI defaults: direct imports only, builtin and
/// sub-packages included, 8000 characters per batch.
#[derive(Debug)]
pub struct ListRequestBuilder {
    package: Option<String>,
    include_all: bool,
    include_builtin: bool,
    include_sub_packages: bool,
    max_chars: Option<usize>,
}

impl Default for ListRequestBuilder {
    fn default() -> Self {
        Self {
            package: None,
            include_all: false,
            include_builtin: true,
            include_sub_packages: true,
            max_chars: None,
        }
    }
}

impl ListRequestBuilder {
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn include_all(mut self, include_all: bool) -> Self {
        self.include_all = include_all;
        self
    }

    pub fn include_builtin(mut self, include_builtin: bool) -> Self {
        self.include_builtin = include_builtin;
        self
    }

    pub fn include_sub_packages(mut self, include_sub_packages: bool) -> Self {
        self.include_sub_packages = include_sub_packages;
        self
    }

    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns an error if `max_chars` is below the minimum batch limit
    pub fn build(self) -> Result<ListRequest> {
        let batch_limit = match self.max_chars {
            Some(max_chars) => BatchLimit::new(max_chars)?,
            None => BatchLimit::default(),
        };

        let package = self.package.filter(|p| !p.trim().is_empty());

        Ok(ListRequest::new(
            package,
            PackageFilter::new(
                self.include_all,
                self.include_builtin,
                self.include_sub_packages,
            ),
            batch_limit,
        ))
    }
}
