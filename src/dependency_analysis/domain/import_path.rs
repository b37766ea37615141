use crate::shared::Result;

/// Separator between import path segments
const PATH_SEPARATOR: char = '/';

/// NewType wrapper for a Go import path
///
/// Import paths are unique within one query result, so they double as
/// package identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImportPath(String);

impl ImportPath {
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.trim().is_empty() {
            anyhow::bail!("Import path cannot be empty");
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes, as counted against the batch limit
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true when this path is a strict path-segment descendant of `root`.
    ///
    /// `net/http/internal` is a sub-package of `net/http`; `net/httptest` is not,
    /// and neither is `net/http` itself.
    pub fn is_sub_package_of(&self, root: &ImportPath) -> bool {
        self.0
            .strip_prefix(root.as_str())
            .is_some_and(|rest| rest.starts_with(PATH_SEPARATOR))
    }
}

impl std::fmt::Display for ImportPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ImportPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
