use super::ImportPath;

/// Dependency value object: one package in the root's transitive closure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    import_path: ImportPath,
    directly_imported: bool,
}

impl Dependency {
    pub fn new(import_path: ImportPath, directly_imported: bool) -> Self {
        Self {
            import_path,
            directly_imported,
        }
    }

    pub fn import_path(&self) -> &ImportPath {
        &self.import_path
    }

    pub fn is_directly_imported(&self) -> bool {
        self.directly_imported
    }
}
