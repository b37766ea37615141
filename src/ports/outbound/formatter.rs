use crate::dependency_analysis::domain::PackageInfo;
use crate::shared::Result;

/// DependencyFormatter port for rendering the package listing
///
/// Implementations exist for plain import paths, a tab-separated table,
/// and JSON.
pub trait DependencyFormatter {
    /// Renders packages in the order given
    ///
    /// # Arguments
    /// * `packages` - The filtered package listing
    ///
    /// # Returns
    /// Formatted output, newline-terminated
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, packages: &[PackageInfo]) -> Result<String>;
}
