use crate::dependency_analysis::domain::{GraphListing, PackageMetadata};
use crate::dependency_analysis::services::MetadataParser;
use crate::ports::outbound::PackageQuery;
use crate::shared::error::GodiError;
use crate::shared::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Default name of the Go toolchain binary
pub const DEFAULT_GO_COMMAND: &str = "go";

/// Template producing one `name:standard` line per listed package
const METADATA_TEMPLATE: &str = "{{.Name}}:{{.Standard}}";

/// GoListClient adapter answering package queries with `go list`
///
/// Each query spawns one `go list` process and waits for it. Anything the
/// process writes to stderr counts as a failure, as does a non-zero exit.
#[derive(Debug, Clone)]
pub struct GoListClient {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl GoListClient {
    /// Creates a client for the given go command
    ///
    /// # Arguments
    /// * `command` - Binary name looked up on PATH, or a path to the binary
    ///
    /// # Errors
    /// Returns `GodiError::ToolUnavailable` if the command cannot be found
    pub fn new(command: &str) -> Result<Self> {
        let program = which::which(command).map_err(|e| {
            tracing::debug!(command, error = %e, "go command lookup failed");
            GodiError::ToolUnavailable {
                command: command.to_string(),
            }
        })?;

        tracing::debug!(program = %program.display(), "using go command");
        Ok(Self {
            program,
            timeout: None,
        })
    }

    /// Bounds every query by `timeout`; `None` waits indefinitely
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs `go` with the given arguments and returns its stdout
    async fn run(&self, args: &[OsString], description: &str) -> Result<String> {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!(command = description, "running go list");

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| GodiError::QueryTimeout {
                    command: description.to_string(),
                    seconds: limit.as_secs(),
                })?,
            None => command.output().await,
        };

        let output = output.map_err(|e| -> anyhow::Error {
            if e.kind() == ErrorKind::NotFound {
                GodiError::ToolUnavailable {
                    command: self.program.display().to_string(),
                }
                .into()
            } else {
                GodiError::QueryFailed {
                    command: description.to_string(),
                    details: e.to_string(),
                }
                .into()
            }
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            return Err(GodiError::QueryFailed {
                command: description.to_string(),
                details: stderr.trim().to_string(),
            }
            .into());
        }

        if !output.status.success() {
            return Err(GodiError::QueryFailed {
                command: description.to_string(),
                details: output.status.to_string(),
            }
            .into());
        }

        String::from_utf8(output.stdout).map_err(|e| {
            GodiError::MalformedResponse {
                command: description.to_string(),
                details: format!("output is not valid UTF-8: {}", e),
            }
            .into()
        })
    }
}

#[async_trait]
impl PackageQuery for GoListClient {
    async fn query_graph(&self, root: &str) -> Result<GraphListing> {
        let description = format!("go list -json {}", root);
        let args = [OsString::from("list"), "-json".into(), root.into()];
        let stdout = self.run(&args, &description).await?;

        serde_json::from_str(&stdout).map_err(|e| {
            GodiError::MalformedResponse {
                command: description,
                details: e.to_string(),
            }
            .into()
        })
    }

    async fn query_metadata(
        &self,
        root: &str,
        import_paths: &[String],
    ) -> Result<Vec<PackageMetadata>> {
        if import_paths.is_empty() {
            return Ok(Vec::new());
        }

        let description = format!(
            "go list -f {} <{} package(s) of {}>",
            METADATA_TEMPLATE,
            import_paths.len(),
            root
        );
        let mut args = vec![
            OsString::from("list"),
            "-f".into(),
            METADATA_TEMPLATE.into(),
        ];
        args.extend(import_paths.iter().map(OsString::from));

        let stdout = self.run(&args, &description).await?;

        MetadataParser::parse(&stdout, import_paths.len()).map_err(|e| {
            GodiError::MalformedResponse {
                command: description,
                details: e.to_string(),
            }
            .into()
        })
    }

    async fn query_current_package(&self) -> Result<String> {
        let stdout = self.run(&[OsString::from("list")], "go list").await?;
        let current = stdout.trim();
        if current.is_empty() {
            return Err(GodiError::MalformedResponse {
                command: "go list".to_string(),
                details: "no package in the current directory".to_string(),
            }
            .into());
        }
        Ok(current.to_string())
    }
}
