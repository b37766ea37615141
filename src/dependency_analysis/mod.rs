/// Domain layer - dependency model and pure classification rules
///
/// Nothing in here runs processes or touches the file system.
pub mod domain;
pub mod services;
