//! Failure classification and normalization.
//!
//! Quota detection is a substring match on the rendered error. All matching
//! rules live in [`classify_failure`].

use derive_more::Display;
use tracing::error;
use tubeseo_error::{ContentError, ContentErrorKind, TubeseoError};

/// Case-sensitive markers of provider quota or rate-limit exhaustion.
pub const QUOTA_MARKERS: [&str; 2] = ["RESOURCE_EXHAUSTED", "Quota exceeded"];

/// Coarse category of an underlying failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// The provider refused the call for quota or billing reasons
    QuotaExceeded,
    /// Anything else
    Other,
}

/// Classify a failure from its rendered message.
///
/// # Examples
///
/// ```
/// use tubeseo_content::{FailureClass, classify_failure};
///
/// assert_eq!(
///     classify_failure("HTTP 429 error: RESOURCE_EXHAUSTED: try later"),
///     FailureClass::QuotaExceeded
/// );
/// assert_eq!(classify_failure("resource_exhausted"), FailureClass::Other);
/// ```
pub fn classify_failure(message: &str) -> FailureClass {
    if QUOTA_MARKERS.iter().any(|marker| message.contains(marker)) {
        FailureClass::QuotaExceeded
    } else {
        FailureClass::Other
    }
}

/// The three caller-facing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Operation {
    /// SEO metadata generation
    #[display("seo_content")]
    SeoContent,
    /// A/B title generation
    #[display("alternative_titles")]
    AlternativeTitles,
    /// Thumbnail generation
    #[display("thumbnail")]
    Thumbnail,
}

impl Operation {
    /// Generic user-facing message for a non-quota failure of this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::SeoContent => "No se pudo generar el contenido. Inténtalo de nuevo.",
            Operation::AlternativeTitles => {
                "No se pudo generar títulos alternativos. Inténtalo de nuevo."
            }
            Operation::Thumbnail => "Ocurrió un error inesperado al generar la miniatura.",
        }
    }
}

/// Log an underlying failure and map it to the caller-facing taxonomy.
///
/// Quota failures become [`ContentErrorKind::QuotaExceeded`]; everything else
/// becomes [`ContentErrorKind::GenerationFailed`] with the operation's
/// generic message. The original error is only written to the log.
#[track_caller]
pub fn normalize_failure(operation: Operation, err: &TubeseoError) -> ContentError {
    let message = err.to_string();
    error!(%operation, error = %message, "Content generation failed");
    match classify_failure(&message) {
        FailureClass::QuotaExceeded => ContentError::new(ContentErrorKind::QuotaExceeded),
        FailureClass::Other => ContentError::new(ContentErrorKind::GenerationFailed(
            operation.failure_message().to_string(),
        )),
    }
}
