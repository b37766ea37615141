/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures are `GodiError` values carried inside the anyhow error.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
