use crate::dependency_analysis::domain::{Dependency, GraphListing, ImportPath};
use crate::shared::Result;
use std::collections::HashSet;

/// ImportClassifier - Splits a root package's transitive closure into
/// direct and indirect dependencies
pub struct ImportClassifier;

impl ImportClassifier {
    /// Builds one Dependency per entry of `listing.deps`, in the same order.
    ///
    /// A dependency is directly imported iff its path occurs in `listing.imports`.
    /// Direct imports missing from `deps` do not produce entries.
    pub fn classify(listing: &GraphListing) -> Result<Vec<Dependency>> {
        let direct: HashSet<&str> = listing.imports.iter().map(String::as_str).collect();

        listing
            .deps
            .iter()
            .map(|path| {
                let directly_imported = direct.contains(path.as_str());
                Ok(Dependency::new(ImportPath::new(path.as_str())?, directly_imported))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classify_marks_direct_imports() {
        let listing = GraphListing::new(
            strings(&["fmt", "os"]),
            strings(&["fmt", "os", "io", "errors"]),
        );

        let deps = ImportClassifier::classify(&listing).unwrap();

        assert_eq!(deps.len(), 4);
        let flags: Vec<(&str, bool)> = deps
            .iter()
            .map(|d| (d.import_path().as_str(), d.is_directly_imported()))
            .collect();
        assert_eq!(
            flags,
            vec![("fmt", true), ("os", true), ("io", false), ("errors", false)]
        );
    }

    #[test]
    fn test_classify_empty_listing() {
        let deps = ImportClassifier::classify(&GraphListing::default()).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_classify_no_direct_imports() {
        let listing = GraphListing::new(vec![], strings(&["unsafe", "internal/abi"]));
        let deps = ImportClassifier::classify(&listing).unwrap();
        assert!(deps.iter().all(|d| !d.is_directly_imported()));
    }

    #[test]
    fn test_classify_flag_matches_membership() {
        let imports = strings(&["bufio", "strings", "github.com/a/b"]);
        let all = strings(&[
            "bufio",
            "bytes",
            "errors",
            "github.com/a/b",
            "github.com/a/b/c",
            "io",
            "strings",
        ]);
        let listing = GraphListing::new(imports.clone(), all);

        for dep in ImportClassifier::classify(&listing).unwrap() {
            let expected = imports.iter().any(|i| i == dep.import_path().as_str());
            assert_eq!(dep.is_directly_imported(), expected, "{}", dep.import_path());
        }
    }

    #[test]
    fn test_classify_rejects_empty_path() {
        let listing = GraphListing::new(vec![], strings(&["fmt", ""]));
        assert!(ImportClassifier::classify(&listing).is_err());
    }
}
