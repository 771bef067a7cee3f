//! Caller-facing errors of the content generation operations.
//!
//! Exactly three conditions ever reach a caller of the content generator.
//! Transport, decoding and validation failures are logged at the operation
//! boundary and folded into one of these kinds.

/// User-facing explanation attached to [`ContentErrorKind::NoImage`].
pub const NO_IMAGE_MESSAGE: &str = "La respuesta de la IA no contenía una imagen. Esto puede deberse a filtros de seguridad o a un prompt demasiado complejo. Intenta simplificar la idea.";

/// Normalized failure conditions of the content generation operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ContentErrorKind {
    /// The provider reported quota or resource exhaustion
    #[display("Se ha superado la cuota de la API. Revisa tu plan de facturación o inténtalo más tarde.")]
    QuotaExceeded,
    /// The image model returned no image, or an image without bytes
    #[display("{}", NO_IMAGE_MESSAGE)]
    NoImage,
    /// Any other failure, carrying the localized retry message
    #[display("{}", _0)]
    GenerationFailed(String),
}

impl ContentErrorKind {
    /// Stable machine-readable code for this condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use tubeseo_error::ContentErrorKind;
    ///
    /// assert_eq!(ContentErrorKind::QuotaExceeded.code(), "QUOTA_EXCEEDED");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            ContentErrorKind::QuotaExceeded => "QUOTA_EXCEEDED",
            ContentErrorKind::NoImage => "NO_IMAGE",
            ContentErrorKind::GenerationFailed(_) => "GENERATION_FAILED",
        }
    }
}

/// Content generation error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("{}", kind)]
pub struct ContentError {
    /// The normalized condition
    pub kind: ContentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ContentError {
    /// Create a new ContentError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ContentErrorKind {
        &self.kind
    }

    /// True when the provider reported quota exhaustion.
    pub fn is_quota_exceeded(&self) -> bool {
        self.kind == ContentErrorKind::QuotaExceeded
    }
}

/// Result type of the content generation operations.
pub type ContentResult<T> = Result<T, ContentError>;
