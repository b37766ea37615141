use crate::dependency_analysis::domain::{GraphListing, PackageMetadata};
use crate::shared::Result;
use async_trait::async_trait;

/// PackageQuery port for asking the Go toolchain about packages
///
/// This port abstracts the external `go list` command so the batching and
/// classification logic can run against a fake in tests.
///
/// Implementations are called strictly one query at a time.
#[async_trait]
pub trait PackageQuery: Send + Sync {
    /// Lists the import graph of a root package
    ///
    /// # Arguments
    /// * `root` - Import path of the package to inspect
    ///
    /// # Returns
    /// The root's direct imports and its full transitive dependency list
    ///
    /// # Errors
    /// Returns an error if the external command reports anything on stderr,
    /// exits non-zero, or prints output that is not the expected JSON
    async fn query_graph(&self, root: &str) -> Result<GraphListing>;

    /// Fetches name and standard-library flag for a batch of packages
    ///
    /// # Arguments
    /// * `root` - Import path of the root package the batch belongs to
    /// * `import_paths` - Packages to describe; callers keep this within the batch limit
    ///
    /// # Returns
    /// One entry per input path, in input order
    ///
    /// # Errors
    /// Returns an error if the command fails or a line is malformed
    async fn query_metadata(
        &self,
        root: &str,
        import_paths: &[String],
    ) -> Result<Vec<PackageMetadata>>;

    /// Resolves the import path of the package in the working directory
    async fn query_current_package(&self) -> Result<String>;
}
