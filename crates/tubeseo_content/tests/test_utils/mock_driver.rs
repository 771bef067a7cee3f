//! Mock generative driver for testing.

use async_trait::async_trait;
use std::sync::Mutex;
use tubeseo_core::{ImageGenerationRequest, ImageGenerationResponse, JsonGenerationRequest};
use tubeseo_error::{GeminiError, GeminiErrorKind, TubeseoError, TubeseoResult};
use tubeseo_interface::GenerativeDriver;

/// Scripted reply of the text model.
#[derive(Debug, Clone)]
pub enum MockText {
    /// Return this raw text
    Success(String),
    /// Fail with this error
    Error(GeminiErrorKind),
}

/// Scripted reply of the image model.
#[derive(Debug, Clone)]
pub enum MockImages {
    /// Return these images
    Success(ImageGenerationResponse),
    /// Fail with this error
    Error(GeminiErrorKind),
}

/// Mock driver replaying scripted replies and recording every request.
///
/// The same reply is returned for every call of its kind.
pub struct MockDriver {
    text: MockText,
    images: MockImages,
    json_requests: Mutex<Vec<JsonGenerationRequest>>,
    image_requests: Mutex<Vec<ImageGenerationRequest>>,
}

impl MockDriver {
    fn with(text: MockText, images: MockImages) -> Self {
        Self {
            text,
            images,
            json_requests: Mutex::new(Vec::new()),
            image_requests: Mutex::new(Vec::new()),
        }
    }

    /// Text calls return `text`; image calls return no images.
    pub fn new_text(text: impl Into<String>) -> Self {
        Self::with(
            MockText::Success(text.into()),
            MockImages::Success(ImageGenerationResponse::default()),
        )
    }

    /// Image calls return `response`; text calls return an empty object.
    pub fn new_images(response: ImageGenerationResponse) -> Self {
        Self::with(
            MockText::Success("{}".to_string()),
            MockImages::Success(response),
        )
    }

    /// Every call fails with `error`.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::with(MockText::Error(error.clone()), MockImages::Error(error))
    }

    /// Requests received by `generate_json`, in call order.
    #[allow(dead_code)]
    pub fn json_requests(&self) -> Vec<JsonGenerationRequest> {
        self.json_requests.lock().unwrap().clone()
    }

    /// Requests received by `generate_images`, in call order.
    #[allow(dead_code)]
    pub fn image_requests(&self) -> Vec<ImageGenerationRequest> {
        self.image_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeDriver for MockDriver {
    async fn generate_json(&self, request: &JsonGenerationRequest) -> TubeseoResult<String> {
        self.json_requests.lock().unwrap().push(request.clone());
        match &self.text {
            MockText::Success(text) => Ok(text.clone()),
            MockText::Error(kind) => Err(TubeseoError::from(GeminiError::new(kind.clone()))),
        }
    }

    async fn generate_images(
        &self,
        request: &ImageGenerationRequest,
    ) -> TubeseoResult<ImageGenerationResponse> {
        self.image_requests.lock().unwrap().push(request.clone());
        match &self.images {
            MockImages::Success(response) => Ok(response.clone()),
            MockImages::Error(kind) => Err(TubeseoError::from(GeminiError::new(kind.clone()))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn text_model(&self) -> &str {
        "mock-text"
    }

    fn image_model(&self) -> &str {
        "mock-image"
    }
}
