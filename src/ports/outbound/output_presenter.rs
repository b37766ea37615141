use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout or a file)
/// where the formatted listing ends up.
pub trait OutputPresenter {
    /// Presents the formatted listing
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
