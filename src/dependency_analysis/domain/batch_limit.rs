use crate::shared::error::GodiError;
use crate::shared::Result;

/// Default ceiling on the summed import-path length per metadata query
pub const DEFAULT_MAX_CHARS: usize = 8000;

/// Smallest ceiling that may be configured
pub const MIN_MAX_CHARS: usize = 200;

/// BatchLimit - bounds how many characters of import paths go into one
/// `go list` invocation, keeping the command line under the OS argument limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLimit(usize);

impl BatchLimit {
    pub fn new(max_chars: usize) -> Result<Self> {
        if max_chars < MIN_MAX_CHARS {
            return Err(GodiError::InvalidBatchLimit {
                value: max_chars,
                minimum: MIN_MAX_CHARS,
            }
            .into());
        }
        Ok(Self(max_chars))
    }

    /// Replaces the limit. On rejection the current value stays in effect.
    pub fn set(&mut self, max_chars: usize) -> Result<()> {
        *self = Self::new(max_chars)?;
        Ok(())
    }

    pub fn max_chars(&self) -> usize {
        self.0
    }
}

impl Default for BatchLimit {
    fn default() -> Self {
        Self(DEFAULT_MAX_CHARS)
    }
}
