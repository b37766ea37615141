use crate::dependency_analysis::domain::PackageMetadata;
use crate::shared::go_bool::parse_go_bool;
use crate::shared::Result;

/// Separator between the name and standard-library fields of one output line
const FIELD_SEPARATOR: char = ':';

/// MetadataParser - Parses `go list -f "{{.Name}}:{{.Standard}}"` output
pub struct MetadataParser;

impl MetadataParser {
    /// Parses one `name:standard` line per requested package.
    ///
    /// Exactly `expected` results are returned, in output order; lines after
    /// those are ignored. Fewer lines than `expected` is an error.
    pub fn parse(output: &str, expected: usize) -> Result<Vec<PackageMetadata>> {
        let mut result = Vec::with_capacity(expected);

        for (index, line) in output.lines().take(expected).enumerate() {
            let (name, standard) = line.split_once(FIELD_SEPARATOR).ok_or_else(|| {
                anyhow::anyhow!(
                    "line {} is missing the '{}' separator: {:?}",
                    index + 1,
                    FIELD_SEPARATOR,
                    line
                )
            })?;

            let standard_library = parse_go_bool(standard).ok_or_else(|| {
                anyhow::anyhow!(
                    "line {} has a non-boolean standard-library field: {:?}",
                    index + 1,
                    standard
                )
            })?;

            result.push(PackageMetadata::new(name, standard_library));
        }

        if result.len() < expected {
            anyhow::bail!(
                "expected {} line(s) of package metadata, got {}",
                expected,
                result.len()
            );
        }

        Ok(result)
    }
}
