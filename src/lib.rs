//! godi - Go package dependency lister
//!
//! This library lists the packages a Go package imports, directly or
//! transitively, and classifies each one as directly imported, part of the
//! standard library, or a sub-package of the queried package. Package data
//! comes from `go list`, with metadata lookups batched to keep each command
//! line under a configurable length.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_analysis`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use godi::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let package_query = GoListClient::new(DEFAULT_GO_COMMAND)?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ListDependenciesUseCase::new(package_query, progress_reporter);
//!
//! // Execute
//! let request = ListRequest::builder()
//!     .package("net/http")
//!     .include_all(true)
//!     .build()?;
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = FormatterFactory::create(OutputFormat::Verbose);
//! print!("{}", formatter.format(&response.packages)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, PlainFormatter, TableFormatter};
    pub use crate::adapters::outbound::go::{GoListClient, DEFAULT_GO_COMMAND};
    pub use crate::application::dto::{ListRequest, ListRequestBuilder, ListResponse, OutputFormat};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::{CollectDependenciesUseCase, ListDependenciesUseCase};
    pub use crate::dependency_analysis::domain::{
        BatchLimit, Dependency, GraphListing, ImportPath, PackageInfo, PackageMetadata,
    };
    pub use crate::dependency_analysis::services::{
        BatchPlanner, ImportClassifier, MetadataParser, PackageFilter,
    };
    pub use crate::ports::outbound::{
        DependencyFormatter, OutputPresenter, PackageQuery, ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, GodiError};
    pub use crate::shared::Result;
}
