use godi::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock PackageQuery serving a fixed import graph
///
/// Metadata is looked up per path; unknown paths get their last path
/// segment as name and are treated as third-party packages.
#[derive(Clone, Default)]
pub struct MockPackageQuery {
    graphs: HashMap<String, GraphListing>,
    metadata: HashMap<String, (String, bool)>,
    current_package: Option<String>,
    graph_error: Option<String>,
    pub metadata_calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockPackageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(mut self, root: &str, imports: &[&str], deps: &[&str]) -> Self {
        self.graphs.insert(
            root.to_string(),
            GraphListing::new(
                imports.iter().map(|s| s.to_string()).collect(),
                deps.iter().map(|s| s.to_string()).collect(),
            ),
        );
        self
    }

    /// Sets the canonical import path reported for a registered graph root
    pub fn with_import_path(mut self, root: &str, import_path: &str) -> Self {
        if let Some(listing) = self.graphs.remove(root) {
            self.graphs
                .insert(root.to_string(), listing.with_import_path(import_path));
        }
        self
    }

    pub fn with_package(mut self, path: &str, name: &str, standard: bool) -> Self {
        self.metadata
            .insert(path.to_string(), (name.to_string(), standard));
        self
    }

    /// Registers standard-library packages named after their last segment
    pub fn with_standard(mut self, paths: &[&str]) -> Self {
        for path in paths {
            let name = path.rsplit('/').next().unwrap_or(path);
            self.metadata
                .insert(path.to_string(), (name.to_string(), true));
        }
        self
    }

    pub fn with_current_package(mut self, path: &str) -> Self {
        self.current_package = Some(path.to_string());
        self
    }

    pub fn with_graph_error(mut self, message: &str) -> Self {
        self.graph_error = Some(message.to_string());
        self
    }

    pub fn get_metadata_calls(&self) -> Vec<Vec<String>> {
        self.metadata_calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PackageQuery for MockPackageQuery {
    async fn query_graph(&self, root: &str) -> Result<GraphListing> {
        if let Some(message) = &self.graph_error {
            return Err(GodiError::QueryFailed {
                command: format!("go list -json {}", root),
                details: message.clone(),
            }
            .into());
        }
        match self.graphs.get(root) {
            Some(listing) => Ok(listing.clone()),
            None => Err(GodiError::QueryFailed {
                command: format!("go list -json {}", root),
                details: format!("cannot find package \"{}\"", root),
            }
            .into()),
        }
    }

    async fn query_metadata(
        &self,
        _root: &str,
        import_paths: &[String],
    ) -> Result<Vec<PackageMetadata>> {
        self.metadata_calls
            .lock()
            .unwrap()
            .push(import_paths.to_vec());

        Ok(import_paths
            .iter()
            .map(|path| match self.metadata.get(path) {
                Some((name, standard)) => PackageMetadata::new(name.as_str(), *standard),
                None => {
                    let name = path.rsplit('/').next().unwrap_or(path);
                    PackageMetadata::new(name, false)
                }
            })
            .collect())
    }

    async fn query_current_package(&self) -> Result<String> {
        match &self.current_package {
            Some(path) => Ok(format!("{}\n", path)),
            None => Err(GodiError::QueryFailed {
                command: "go list".to_string(),
                details: "no Go files in current directory".to_string(),
            }
            .into()),
        }
    }
}
