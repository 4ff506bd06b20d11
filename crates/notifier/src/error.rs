use thiserror::Error;

/// Crate-wide result type for notifier operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations, rejected before any external call is made.
///
/// Expected run outcomes (login rejected, no match, delivery failed) are
/// not errors; they are [`NotifyOutcome`] variants.
///
/// [`NotifyOutcome`]: crate::NotifyOutcome
#[derive(Debug, Error)]
pub enum Error {
    /// Input parameter is invalid.
    #[error("invalid notify input: {message}")]
    InvalidInput { message: String },
}

impl Error {
    #[must_use]
    pub fn invalid_input(message: impl std::fmt::Display) -> Self {
        Self::InvalidInput {
            message: message.to_string(),
        }
    }
}
