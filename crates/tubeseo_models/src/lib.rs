//! Generative backend implementations for tubeseo.
//!
//! Currently one provider: Google Gemini (text) and Imagen (images) over the
//! Generative Language REST API.
//!
//! # Example
//!
//! ```no_run
//! use tubeseo_models::{GeminiClient, TubeseoConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TubeseoConfig::load()?;
//! let client = GeminiClient::from_config(&config.gemini)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod gemini;

pub use config::{GeminiConfig, TubeseoConfig};
pub use gemini::{
    ApiErrorBody, ApiErrorEnvelope, GeminiCandidate, GeminiClient, GeminiContent, GeminiPart,
    GeminiResult, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    PredictInstance, PredictOutputOptions, PredictParameters, PredictRequest, PredictResponse,
    Prediction, to_image_response,
};
