//! Type definitions for interactive prompts.

use struggle_core::error::{Error, Result};

/// Outcome of a read-validate loop.
///
/// A loop only ends with a value that passed validation, or with the user
/// cancelling input (Ctrl-C, Ctrl-D or end of input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Value(T),
    Cancelled,
}

impl<T> Prompted<T> {
    /// Turns a cancellation into [`Error::Interrupted`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] if the prompt was cancelled.
    pub fn into_result(self) -> Result<T> {
        match self {
            Prompted::Value(value) => Ok(value),
            Prompted::Cancelled => Err(Error::Interrupted),
        }
    }
}

/// Represents the user's answer when asked to confirm a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}
