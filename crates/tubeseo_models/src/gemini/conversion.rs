//! Conversions between tubeseo backend records and Gemini wire types.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tubeseo_core::{
    GeneratedImage, ImageGenerationRequest, ImageGenerationResponse, JsonGenerationRequest,
};
use tubeseo_error::{GeminiError, GeminiErrorKind};

use super::GeminiResult;
use super::dto::{
    GeminiContent, GeminiPart, GenerateContentRequest, GenerationConfig, PredictInstance,
    PredictOutputOptions, PredictParameters, PredictRequest, PredictResponse,
};

const JSON_MIME: &str = "application/json";

impl From<&JsonGenerationRequest> for GenerateContentRequest {
    fn from(req: &JsonGenerationRequest) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(req.prompt.clone()),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: JSON_MIME.to_string(),
                response_schema: req.response_schema.clone(),
            }),
        }
    }
}

impl From<&ImageGenerationRequest> for PredictRequest {
    fn from(req: &ImageGenerationRequest) -> Self {
        Self {
            instances: vec![PredictInstance {
                prompt: req.prompt.clone(),
            }],
            parameters: PredictParameters {
                sample_count: req.number_of_images,
                aspect_ratio: req.aspect_ratio.to_string(),
                output_options: PredictOutputOptions {
                    mime_type: req.output_mime_type.clone(),
                },
            },
        }
    }
}

/// Decode every prediction's base64 payload.
///
/// Predictions without a payload become images with `bytes: None`.
pub fn to_image_response(response: PredictResponse) -> GeminiResult<ImageGenerationResponse> {
    let images = response
        .predictions
        .into_iter()
        .map(|prediction| {
            let bytes = prediction
                .bytes_base64_encoded
                .filter(|encoded| !encoded.is_empty())
                .map(|encoded| STANDARD.decode(encoded))
                .transpose()
                .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))?;

            Ok(GeneratedImage {
                bytes,
                mime_type: prediction.mime_type,
                filtered_reason: prediction.rai_filtered_reason,
            })
        })
        .collect::<GeminiResult<Vec<_>>>()?;

    Ok(ImageGenerationResponse { images })
}
