use crate::dependency_analysis::domain::PackageInfo;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;

/// PlainFormatter adapter - one import path per line
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for PlainFormatter {
    fn format(&self, packages: &[PackageInfo]) -> Result<String> {
        let mut output = String::new();
        for package in packages {
            output.push_str(package.import_path().as_str());
            output.push('\n');
        }
        Ok(output)
    }
}
