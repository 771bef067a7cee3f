//! Google Gemini REST driver.
//!
//! [`GeminiClient`] implements [`tubeseo_interface::GenerativeDriver`] over
//! two REST endpoints:
//! - `models/{model}:generateContent` for schema-constrained text
//! - `models/{model}:predict` for Imagen thumbnails

mod client;
mod conversion;
mod dto;

pub use client::GeminiClient;
pub use conversion::to_image_response;
pub use dto::{
    ApiErrorBody, ApiErrorEnvelope, GeminiCandidate, GeminiContent, GeminiPart,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, PredictInstance,
    PredictOutputOptions, PredictParameters, PredictRequest, PredictResponse, Prediction,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, tubeseo_error::GeminiError>;
