//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, GeminiError, JsonError};

/// Every internal failure a driver or the plumbing around it can raise.
///
/// # Examples
///
/// ```
/// use tubeseo_error::{TubeseoError, JsonError};
///
/// let err: TubeseoError = JsonError::new("expected value").into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TubeseoErrorKind {
    /// Gemini transport error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Payload decoding error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// tubeseo error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("tubeseo Error: {}", _0)]
pub struct TubeseoError(Box<TubeseoErrorKind>);

impl TubeseoError {
    /// Create a new error from a kind.
    pub fn new(kind: TubeseoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TubeseoErrorKind {
        &self.0
    }
}

impl<T> From<T> for TubeseoError
where
    T: Into<TubeseoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for tubeseo driver operations.
pub type TubeseoResult<T> = std::result::Result<T, TubeseoError>;
