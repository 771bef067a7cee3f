//! Tests for the re-exported surface used by the binary.

use std::io::Write;
use tubeseo::{
    AspectRatio, ContentErrorKind, GenerationRequest, ThumbnailRequest, ThumbnailStyle,
    TubeseoConfig, seo_prompt, thumbnail_prompt,
};

#[test]
fn test_dry_run_prompts_available_through_facade() -> anyhow::Result<()> {
    let request = GenerationRequest::builder().topic("Pan").build()?;
    assert!(seo_prompt(&request).contains("Tema del video: \"Pan\""));

    let thumbnail = ThumbnailRequest::builder()
        .topic("Pan")
        .style(ThumbnailStyle::from_name_lenient("no-such-style"))
        .aspect_ratio(AspectRatio::Portrait)
        .build()?;
    assert!(thumbnail_prompt(&thumbnail).contains("cinematic, dramatic lighting"));
    Ok(())
}

#[test]
fn test_explicit_config_file() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[gemini]\ntext_model = \"gemini-2.5-pro\"")?;

    let config = TubeseoConfig::from_file(file.path())?;
    assert_eq!(config.gemini.text_model, "gemini-2.5-pro");
    assert_eq!(config.gemini.image_model, "imagen-4.0-generate-001");
    Ok(())
}

#[test]
fn test_error_codes_through_facade() {
    assert_eq!(ContentErrorKind::QuotaExceeded.code(), "QUOTA_EXCEEDED");
    assert_eq!(ContentErrorKind::NoImage.code(), "NO_IMAGE");
}
