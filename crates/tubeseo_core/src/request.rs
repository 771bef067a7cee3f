//! SEO generation request.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tubeseo_error::{BuilderError, BuilderErrorKind};

/// Input of an SEO content generation.
///
/// # Examples
///
/// ```
/// use tubeseo_core::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .topic("Cómo hacer pan de masa madre")
///     .custom_instruction("Usa un tono humorístico")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.topic(), "Cómo hacer pan de masa madre");
///
/// assert!(GenerationRequest::builder().topic("   ").build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Video topic
    topic: String,
    /// Free text appended to the prompt as a higher-priority instruction
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_instruction: Option<String>,
}

impl GenerationRequest {
    /// Creates a new builder for `GenerationRequest`.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.topic {
            Some(topic) if topic.trim().is_empty() => Err("topic must not be empty".to_string()),
            _ => Ok(()),
        }
    }
}

impl From<GenerationRequestBuilderError> for BuilderError {
    #[track_caller]
    fn from(err: GenerationRequestBuilderError) -> Self {
        match err {
            GenerationRequestBuilderError::UninitializedField(field) => {
                BuilderError::new(BuilderErrorKind::MissingField(field.to_string()))
            }
            GenerationRequestBuilderError::ValidationError(reason) => {
                BuilderError::new(BuilderErrorKind::ValidationFailed(reason))
            }
        }
    }
}
