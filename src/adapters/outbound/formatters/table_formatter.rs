use crate::dependency_analysis::domain::PackageInfo;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;
use std::fmt::Write;

const HEADER: &str = "Name\tDirectly\tBuiltin\tSubPkg\tImportPath";

/// TableFormatter adapter - tab-separated rows under a header
///
/// Columns are not padded; pipe through `column -t` for alignment.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for TableFormatter {
    fn format(&self, packages: &[PackageInfo]) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "{}", HEADER)?;
        for package in packages {
            writeln!(
                output,
                "{}\t{}\t{}\t{}\t{}",
                package.name(),
                package.is_directly_imported(),
                package.is_standard_library(),
                package.is_sub_package(),
                package.import_path()
            )?;
        }
        Ok(output)
    }
}
