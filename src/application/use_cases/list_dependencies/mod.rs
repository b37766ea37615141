use crate::application::dto::{ListRequest, ListResponse};
use crate::application::use_cases::CollectDependenciesUseCase;
use crate::dependency_analysis::domain::ImportPath;
use crate::ports::outbound::{PackageQuery, ProgressReporter};
use crate::shared::Result;

/// ListDependenciesUseCase - Core use case for listing a package's dependencies
///
/// Resolves the root package, collects its dependencies through the query
/// batcher, and applies the requested filter.
///
/// # Type Parameters
/// * `Q` - PackageQuery implementation
/// * `PR` - ProgressReporter implementation
pub struct ListDependenciesUseCase<Q, PR> {
    package_query: Q,
    progress_reporter: PR,
}

impl<Q, PR> ListDependenciesUseCase<Q, PR>
where
    Q: PackageQuery,
    PR: ProgressReporter,
{
    /// Creates a new ListDependenciesUseCase with injected dependencies
    pub fn new(package_query: Q, progress_reporter: PR) -> Self {
        Self {
            package_query,
            progress_reporter,
        }
    }

    /// Executes the listing
    ///
    /// # Arguments
    /// * `request` - Root package, filter switches, and batch limit
    ///
    /// # Returns
    /// ListResponse with the filtered packages. An empty list is not an error,
    /// it is announced as `no information` through the progress reporter.
    pub async fn execute(&self, request: ListRequest) -> Result<ListResponse> {
        // Step 1: Resolve the root package
        let root = self.resolve_root(request.package.as_deref()).await?;

        // Step 2: Collect the full dependency set
        let collector = CollectDependenciesUseCase::new(
            &self.package_query,
            &self.progress_reporter,
            request.batch_limit,
        );
        let packages = collector.collect(&root).await?;
        let total_count = packages.len();

        // Step 3: Apply the filter
        let filtered = request.filter.filter_packages(packages);
        tracing::debug!(
            root = %root,
            total = total_count,
            listed = filtered.len(),
            filter = ?request.filter,
            "applied package filter"
        );

        if filtered.is_empty() {
            self.progress_reporter.report_error("no information");
        } else {
            self.progress_reporter.report_completion(&format!(
                "📦 Listing {} of {} package(s)",
                filtered.len(),
                total_count
            ));
        }

        Ok(ListResponse::new(root, filtered, total_count))
    }

    /// Uses the requested package, or asks the toolchain for the one in the
    /// working directory
    async fn resolve_root(&self, package: Option<&str>) -> Result<ImportPath> {
        match package {
            Some(package) => ImportPath::new(package),
            None => {
                self.progress_reporter
                    .report("📂 No package given, using the current directory");
                let current = self.package_query.query_current_package().await?;
                ImportPath::new(current.trim())
            }
        }
    }
}
