/// Shared utilities used across all layers
pub mod error;
pub mod go_bool;
pub mod logging;
pub mod result;

pub use result::Result;
