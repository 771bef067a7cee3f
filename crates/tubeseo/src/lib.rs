//! tubeseo - YouTube SEO content generation
//!
//! Generates SEO metadata (title, description, hashtags, keywords and a
//! pinned comment), A/B title alternatives scored for click-through, and
//! thumbnail images, using Google's Gemini and Imagen models.
//!
//! # Quick Start
//!
//! ```no_run
//! use tubeseo::{ContentGenerator, GeminiClient, GenerationRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = ContentGenerator::new(GeminiClient::new()?);
//!
//!     let request = GenerationRequest::builder()
//!         .topic("Cómo hacer pan de masa madre")
//!         .build()?;
//!
//!     let content = generator.generate_seo_content(&request).await?;
//!     println!("{}", content.title);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `tubeseo_error` - Error types
//! - `tubeseo_core` - Request and result records, thumbnail styles
//! - `tubeseo_interface` - `GenerativeDriver` trait
//! - `tubeseo_models` - Gemini/Imagen REST driver and configuration
//! - `tubeseo_content` - Prompt assembly and the `ContentGenerator`
//!
//! This crate re-exports everything for convenience.

pub use tubeseo_content::*;
pub use tubeseo_core::*;
pub use tubeseo_error::*;
pub use tubeseo_interface::*;
pub use tubeseo_models::*;
