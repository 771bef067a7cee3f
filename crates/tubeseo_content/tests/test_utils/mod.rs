//! Test utilities for content generator tests.

pub mod log_capture;
pub mod mock_driver;

#[allow(unused_imports)]
pub use log_capture::LogCapture;
#[allow(unused_imports)]
pub use mock_driver::{MockDriver, MockImages, MockText};

use tubeseo_core::{GeneratedImage, ImageGenerationResponse};

/// A response holding one JPEG image with the given bytes.
#[allow(dead_code)]
pub fn single_image(bytes: &[u8]) -> ImageGenerationResponse {
    ImageGenerationResponse {
        images: vec![GeneratedImage {
            bytes: Some(bytes.to_vec()),
            mime_type: Some("image/jpeg".to_string()),
            filtered_reason: None,
        }],
    }
}

/// A complete SEO payload as the text model returns it.
#[allow(dead_code)]
pub const SEO_PAYLOAD: &str = r##"{
  "title": "7 Secretos del Pan de Masa Madre que Nadie Te Cuenta",
  "description": "Descubre cómo hacer pan de masa madre perfecto. [ENLACE DE SUSCRIPCIÓN]",
  "hashtags": ["#masamadre", "#pan"],
  "keywords": ["masa madre", "pan casero"],
  "pinnedComment": "¿Cuál es tu mayor error con la masa madre?"
}"##;
