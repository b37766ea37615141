use crate::dependency_analysis::domain::{BatchLimit, Dependency, ImportPath, PackageInfo};
use crate::dependency_analysis::services::{BatchPlanner, ImportClassifier};
use crate::ports::outbound::{PackageQuery, ProgressReporter};
use crate::shared::error::GodiError;
use crate::shared::Result;

/// CollectDependenciesUseCase - Query batcher for a root package's dependencies
///
/// Issues one graph query for the root, then as many metadata queries as the
/// batch limit requires, and joins the results into PackageInfo entries.
/// Queries run one after another; the first failure aborts the whole
/// collection and nothing collected so far is returned.
///
/// # Type Parameters
/// * `Q` - PackageQuery implementation
/// * `PR` - ProgressReporter implementation
pub struct CollectDependenciesUseCase<'a, Q, PR> {
    package_query: &'a Q,
    progress_reporter: &'a PR,
    batch_limit: BatchLimit,
}

impl<'a, Q, PR> CollectDependenciesUseCase<'a, Q, PR>
where
    Q: PackageQuery,
    PR: ProgressReporter,
{
    pub fn new(package_query: &'a Q, progress_reporter: &'a PR, batch_limit: BatchLimit) -> Self {
        Self {
            package_query,
            progress_reporter,
            batch_limit,
        }
    }

    /// Collects every package in the root's transitive closure, unfiltered,
    /// in the order the graph query listed them
    ///
    /// Sub-packages are tagged against the root's canonical import path, so a
    /// root given as `.` or `./cmd` still recognizes its own sub-packages.
    pub async fn collect(&self, root: &ImportPath) -> Result<Vec<PackageInfo>> {
        let (canonical_root, dependencies) = self.collect_dependencies(root).await?;
        if dependencies.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch_package_info(&canonical_root, dependencies).await
    }

    /// Runs the graph query and flags direct imports
    ///
    /// # Returns
    /// The root's canonical import path (the requested root when the listing
    /// carries none) and the classified dependencies
    async fn collect_dependencies(
        &self,
        root: &ImportPath,
    ) -> Result<(ImportPath, Vec<Dependency>)> {
        self.progress_reporter
            .report(&format!("🔍 Listing imports of {}", root));

        let listing = self.package_query.query_graph(root.as_str()).await?;
        let canonical_root = match listing.import_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => ImportPath::new(path)?,
            _ => root.clone(),
        };
        if canonical_root != *root {
            tracing::debug!(
                requested = %root,
                canonical = %canonical_root,
                "resolved root import path"
            );
        }
        let dependencies = ImportClassifier::classify(&listing)?;

        let direct = dependencies
            .iter()
            .filter(|d| d.is_directly_imported())
            .count();
        tracing::debug!(
            root = %root,
            total = dependencies.len(),
            direct,
            "classified dependencies"
        );
        self.progress_reporter.report(&format!(
            "✅ Found {} dependency(ies), {} imported directly",
            dependencies.len(),
            direct
        ));

        Ok((canonical_root, dependencies))
    }

    /// Fetches metadata batch by batch and joins it with the dependencies
    async fn fetch_package_info(
        &self,
        root: &ImportPath,
        dependencies: Vec<Dependency>,
    ) -> Result<Vec<PackageInfo>> {
        let batches = BatchPlanner::plan(&dependencies, self.batch_limit);
        let total = batches.len();
        let mut packages = Vec::with_capacity(dependencies.len());
        let mut remaining = dependencies.into_iter();

        for (index, batch) in batches.into_iter().enumerate() {
            let chunk: Vec<Dependency> = remaining.by_ref().take(batch.len()).collect();
            let paths: Vec<String> = chunk
                .iter()
                .map(|d| d.import_path().as_str().to_string())
                .collect();

            tracing::debug!(
                batch = index + 1,
                of = total,
                packages = paths.len(),
                chars = paths.iter().map(String::len).sum::<usize>(),
                "querying package metadata"
            );

            let metadata = self
                .package_query
                .query_metadata(root.as_str(), &paths)
                .await?;

            if metadata.len() != chunk.len() {
                return Err(GodiError::MalformedResponse {
                    command: "package metadata query".to_string(),
                    details: format!(
                        "expected {} result(s), got {}",
                        chunk.len(),
                        metadata.len()
                    ),
                }
                .into());
            }

            packages.extend(chunk.into_iter().zip(metadata).map(|(dependency, meta)| {
                PackageInfo::from_dependency(dependency, meta.name, meta.standard_library, root)
            }));

            self.progress_reporter
                .report_progress(index + 1, total, Some("package metadata"));
        }

        Ok(packages)
    }
}
