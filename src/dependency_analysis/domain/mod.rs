pub mod batch_limit;
pub mod dependency;
pub mod import_path;
pub mod listing;
pub mod package_info;

pub use batch_limit::{BatchLimit, DEFAULT_MAX_CHARS, MIN_MAX_CHARS};
pub use dependency::Dependency;
pub use import_path::ImportPath;
pub use listing::{GraphListing, PackageMetadata};
pub use package_info::PackageInfo;
