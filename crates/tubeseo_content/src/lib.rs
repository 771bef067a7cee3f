//! SEO metadata, A/B title and thumbnail generation for YouTube creators.
//!
//! [`ContentGenerator`] builds prompts, submits them to any
//! [`GenerativeDriver`](tubeseo_interface::GenerativeDriver), decodes the
//! structured response, and reports failures as one of three
//! [`ContentErrorKind`](tubeseo_error::ContentErrorKind)s.
//!
//! # Example
//!
//! ```no_run
//! use tubeseo_content::ContentGenerator;
//! use tubeseo_core::GenerationRequest;
//! use tubeseo_interface::GenerativeDriver;
//!
//! async fn seo_title<D: GenerativeDriver>(driver: D) -> Result<String, Box<dyn std::error::Error>> {
//!     let generator = ContentGenerator::new(driver);
//!     let request = GenerationRequest::builder().topic("Pan de masa madre").build()?;
//!     let content = generator.generate_seo_content(&request).await?;
//!     Ok(content.title)
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod generator;
mod payload;
mod prompt;
mod schema;

pub use classify::{FailureClass, Operation, QUOTA_MARKERS, classify_failure, normalize_failure};
pub use generator::ContentGenerator;
pub use payload::{parse_json_payload, strip_json_fence};
pub use prompt::{StyleDescription, alternative_titles_prompt, seo_prompt, style_description, thumbnail_prompt};
pub use schema::{alternative_titles_schema, seo_content_schema};
