/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (the go toolchain, console, file system).
pub mod formatter;
pub mod output_presenter;
pub mod package_query;
pub mod progress_reporter;

pub use formatter::DependencyFormatter;
pub use output_presenter::OutputPresenter;
pub use package_query::PackageQuery;
pub use progress_reporter::ProgressReporter;
