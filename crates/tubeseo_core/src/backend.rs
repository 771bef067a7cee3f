//! Request and response records exchanged with a generative backend.

use crate::{AspectRatio, JPEG_MIME};
use serde::{Deserialize, Serialize};

/// Text generation constrained to a JSON response schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonGenerationRequest {
    /// Prompt text
    pub prompt: String,
    /// Schema the response must conform to
    pub response_schema: serde_json::Value,
    /// Model override; the backend default is used when `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl JsonGenerationRequest {
    /// Create a request for the backend's default text model.
    pub fn new(prompt: impl Into<String>, response_schema: serde_json::Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema,
            model: None,
        }
    }
}

/// Image generation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGenerationRequest {
    /// Prompt text
    pub prompt: String,
    /// Number of images to generate
    pub number_of_images: u32,
    /// Requested output encoding
    pub output_mime_type: String,
    /// Requested aspect ratio
    pub aspect_ratio: AspectRatio,
    /// Model override; the backend default is used when `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ImageGenerationRequest {
    /// Request a single JPEG image for the backend's default image model.
    pub fn single_jpeg(prompt: impl Into<String>, aspect_ratio: AspectRatio) -> Self {
        Self {
            prompt: prompt.into(),
            number_of_images: 1,
            output_mime_type: JPEG_MIME.to_string(),
            aspect_ratio,
            model: None,
        }
    }
}

/// One image returned by the backend.
///
/// `bytes` is `None` when the provider withheld the image, typically because
/// a safety filter fired.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    /// Decoded image bytes
    pub bytes: Option<Vec<u8>>,
    /// MIME type reported by the provider
    pub mime_type: Option<String>,
    /// Reason the provider filtered the image, if any
    pub filtered_reason: Option<String>,
}

/// Images returned by the backend, in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    /// Generated images
    pub images: Vec<GeneratedImage>,
}
