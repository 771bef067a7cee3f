//! Gemini transport error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in the configured environment variable
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request could not be sent or its body could not be read
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message, prefixed with the API status when available
        message: String,
    },
    /// Response body did not match the expected wire format
    #[display("Failed to decode Gemini response: {}", _0)]
    ResponseDecode(String),
    /// The model returned no text content
    #[display("Gemini response contained no text")]
    EmptyResponse,
    /// Base64 decoding of an image payload failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use tubeseo_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 429,
///     message: "RESOURCE_EXHAUSTED: Quota exceeded".to_string(),
/// });
/// assert!(format!("{}", err).contains("RESOURCE_EXHAUSTED"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
