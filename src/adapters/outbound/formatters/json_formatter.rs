use crate::dependency_analysis::domain::PackageInfo;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct PackageEntry<'a> {
    name: &'a str,
    import_path: &'a str,
    directly: bool,
    builtin: bool,
    sub_pkg: bool,
}

impl<'a> From<&'a PackageInfo> for PackageEntry<'a> {
    fn from(package: &'a PackageInfo) -> Self {
        Self {
            name: package.name(),
            import_path: package.import_path().as_str(),
            directly: package.is_directly_imported(),
            builtin: package.is_standard_library(),
            sub_pkg: package.is_sub_package(),
        }
    }
}

/// JsonFormatter adapter - a JSON array with one object per package,
/// indented by a single space
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for JsonFormatter {
    fn format(&self, packages: &[PackageInfo]) -> Result<String> {
        let entries: Vec<PackageEntry<'_>> = packages.iter().map(PackageEntry::from).collect();

        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b" "));
        entries.serialize(&mut serializer)?;

        let mut output = String::from_utf8(buffer)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_analysis::domain::{Dependency, ImportPath};

    fn sample() -> Vec<PackageInfo> {
        let root = ImportPath::new("github.com/m3ng9i/go-utils").unwrap();
        vec![
            PackageInfo::from_dependency(
                Dependency::new(ImportPath::new("bufio").unwrap(), true),
                "bufio".to_string(),
                true,
                &root,
            ),
            PackageInfo::from_dependency(
                Dependency::new(ImportPath::new("github.com/m3ng9i/go-utils/cmd").unwrap(), false),
                "cmd".to_string(),
                false,
                &root,
            ),
        ]
    }

    #[test]
    fn test_format_field_names_and_values() {
        let output = JsonFormatter::new().format(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let first = &value[0];
        assert_eq!(first["Name"], "bufio");
        assert_eq!(first["ImportPath"], "bufio");
        assert_eq!(first["Directly"], true);
        assert_eq!(first["Builtin"], true);
        assert_eq!(first["SubPkg"], false);

        let second = &value[1];
        assert_eq!(second["ImportPath"], "github.com/m3ng9i/go-utils/cmd");
        assert_eq!(second["SubPkg"], true);
    }

    #[test]
    fn test_format_single_space_indent() {
        let output = JsonFormatter::new().format(&sample()[..1]).unwrap();
        assert_eq!(
            output,
            "[\n {\n  \"Name\": \"bufio\",\n  \"ImportPath\": \"bufio\",\n  \"Directly\": true,\n  \"Builtin\": true,\n  \"SubPkg\": false\n }\n]\n"
        );
    }

    #[test]
    fn test_format_empty_array() {
        assert_eq!(JsonFormatter::new().format(&[]).unwrap(), "[]\n");
    }
}
