mod batch_planner;
mod import_classifier;
mod metadata_parser;
mod package_filter;

pub use batch_planner::BatchPlanner;
pub use import_classifier::ImportClassifier;
pub use metadata_parser::MetadataParser;
pub use package_filter::PackageFilter;
