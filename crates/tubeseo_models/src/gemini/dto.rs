//! Wire types for the Gemini `generateContent` and Imagen `predict` endpoints.

use serde::{Deserialize, Serialize};

//
// ─── GENERATE CONTENT ───────────────────────────────────────────────────────────
//

/// A single text part.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeminiPart {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One turn of content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeminiContent {
    /// `user` or `model`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// Structured-output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always `application/json` for schema-constrained output
    pub response_mime_type: String,
    /// OpenAPI-subset schema the response must match
    pub response_schema: serde_json::Value,
}

/// Body of `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents
    pub contents: Vec<GeminiContent>,
    /// Output constraints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    /// Generated content; absent when the candidate was blocked
    #[serde(default)]
    pub content: Option<GeminiContent>,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Response of `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates, best first
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, `None` when there is none.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }
}

//
// ─── PREDICT (IMAGEN) ───────────────────────────────────────────────────────────
//

/// One prompt instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictInstance {
    /// Image prompt
    pub prompt: String,
}

/// Output encoding options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictOutputOptions {
    /// Requested MIME type
    pub mime_type: String,
}

/// Imagen sampling parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    /// Number of images
    pub sample_count: u32,
    /// `16:9` or `9:16`
    pub aspect_ratio: String,
    /// Output encoding
    pub output_options: PredictOutputOptions,
}

/// Body of `models/{model}:predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Prompt instances
    pub instances: Vec<PredictInstance>,
    /// Sampling parameters
    pub parameters: PredictParameters,
}

/// One generated image.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Base64 image bytes; absent when filtered
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,
    /// MIME type of the image
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Responsible-AI filter reason
    #[serde(default)]
    pub rai_filtered_reason: Option<String>,
}

/// Response of `models/{model}:predict`.
///
/// The API omits `predictions` entirely when every image was filtered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Generated images
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

//
// ─── ERRORS ─────────────────────────────────────────────────────────────────────
//

/// Body of a Google API error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// HTTP status code
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Canonical status, e.g. `RESOURCE_EXHAUSTED`
    #[serde(default)]
    pub status: Option<String>,
}

/// Envelope `{"error": {...}}` of a Google API error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
    /// Error details
    pub error: ApiErrorBody,
}

impl ApiErrorEnvelope {
    /// Render an error body as `"<STATUS>: <message>"`.
    ///
    /// Falls back to the raw body when it is not a Google error envelope.
    pub fn describe(body: &str) -> String {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => match envelope.error.status {
                Some(status) => format!("{}: {}", status, envelope.error.message),
                None => envelope.error.message,
            },
            Err(_) => body.to_string(),
        }
    }
}
