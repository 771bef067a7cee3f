//! Gemini REST client.
//!
//! One `reqwest::Client` is shared by every call. There is no timeout and no
//! retry: a failed call surfaces immediately.
//!
//! # Example
//!
//! ```no_run
//! use tubeseo_core::JsonGenerationRequest;
//! use tubeseo_interface::GenerativeDriver;
//! use tubeseo_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let schema = serde_json::json!({"type": "OBJECT", "properties": {"title": {"type": "STRING"}}});
//! let text = client
//!     .generate_json(&JsonGenerationRequest::new("Un título sobre pan", schema))
//!     .await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::env;
use tracing::{debug, error, instrument};

use tubeseo_core::{ImageGenerationRequest, ImageGenerationResponse, JsonGenerationRequest};
use tubeseo_error::{GeminiError, GeminiErrorKind, TubeseoResult};
use tubeseo_interface::GenerativeDriver;

use super::GeminiResult;
use super::conversion::to_image_response;
use super::dto::{
    ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse, PredictRequest,
    PredictResponse,
};
use crate::{GeminiConfig, TubeseoConfig};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini and Imagen REST endpoints.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client from the layered configuration files.
    ///
    /// Reads the API key from the environment variable named by
    /// `gemini.api_key_env` (default `GEMINI_API_KEY`).
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> TubeseoResult<Self> {
        let config = TubeseoConfig::load()?;
        Self::from_config(&config.gemini)
    }

    /// Create a client from explicit settings, reading the API key from the
    /// environment.
    #[instrument(name = "gemini_client_from_config", skip(config), fields(api_key_env = %config.api_key_env))]
    pub fn from_config(config: &GeminiConfig) -> TubeseoResult<Self> {
        let api_key = env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GeminiError::new(GeminiErrorKind::MissingApiKey(config.api_key_env.clone()))
            })?;

        Ok(Self::with_api_key(api_key, config))
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, config: &GeminiConfig) -> Self {
        debug!(base_url = %config.base_url, "Creating Gemini client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        }
    }

    /// URL of `method` on `model`, accepting names with or without the
    /// `models/` prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use tubeseo_models::{GeminiClient, GeminiConfig};
    ///
    /// let client = GeminiClient::with_api_key("key", &GeminiConfig::default());
    /// assert_eq!(
    ///     client.endpoint("models/gemini-2.5-flash", "generateContent"),
    ///     "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
    /// );
    /// ```
    pub fn endpoint(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:{}", self.base_url, model, method)
    }

    /// POST a JSON body and decode a JSON response.
    async fn post<B, R>(&self, url: &str, body: &B) -> GeminiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API returned error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: ApiErrorEnvelope::describe(&body),
            }));
        }

        response.json::<R>().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            GeminiError::new(GeminiErrorKind::ResponseDecode(e.to_string()))
        })
    }

    async fn generate_json_internal(&self, req: &JsonGenerationRequest) -> GeminiResult<String> {
        let model = req.model.as_deref().unwrap_or(&self.text_model);
        let url = self.endpoint(model, "generateContent");
        debug!(model, prompt_len = req.prompt.len(), "Sending generateContent request");

        let body = GenerateContentRequest::from(req);
        let response: GenerateContentResponse = self.post(&url, &body).await?;

        let finish_reason = response
            .candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.clone());

        response.text().ok_or_else(|| {
            error!(?finish_reason, "Gemini response contained no text");
            GeminiError::new(GeminiErrorKind::EmptyResponse)
        })
    }

    async fn generate_images_internal(
        &self,
        req: &ImageGenerationRequest,
    ) -> GeminiResult<ImageGenerationResponse> {
        let model = req.model.as_deref().unwrap_or(&self.image_model);
        let url = self.endpoint(model, "predict");
        debug!(
            model,
            aspect_ratio = %req.aspect_ratio,
            sample_count = req.number_of_images,
            "Sending predict request"
        );

        let body = PredictRequest::from(req);
        let response: PredictResponse = self.post(&url, &body).await?;
        debug!(predictions = response.predictions.len(), "Received predict response");

        to_image_response(response)
    }
}

#[async_trait]
impl GenerativeDriver for GeminiClient {
    #[instrument(skip(self, req), fields(model = ?req.model))]
    async fn generate_json(&self, req: &JsonGenerationRequest) -> TubeseoResult<String> {
        self.generate_json_internal(req).await.map_err(Into::into)
    }

    #[instrument(skip(self, req), fields(model = ?req.model))]
    async fn generate_images(
        &self,
        req: &ImageGenerationRequest,
    ) -> TubeseoResult<ImageGenerationResponse> {
        self.generate_images_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn text_model(&self) -> &str {
        &self.text_model
    }

    fn image_model(&self) -> &str {
        &self.image_model
    }
}
