//! Tests for prompt construction.

use tubeseo_content::{
    StyleDescription, alternative_titles_prompt, seo_prompt, style_description, thumbnail_prompt,
};
use tubeseo_core::{AspectRatio, GenerationRequest, ThumbnailRequest, ThumbnailStyle};

const QUALITY: &str = "High resolution, professional quality.";
const NO_TEXT: &str = "The image should not contain any text.";

fn thumbnail(style: ThumbnailStyle) -> anyhow::Result<ThumbnailRequest> {
    Ok(ThumbnailRequest::builder()
        .topic("Mi primer maratón")
        .style(style)
        .build()?)
}

#[test]
fn test_seo_prompt_embeds_topic() -> anyhow::Result<()> {
    let request = GenerationRequest::builder()
        .topic("Cómo hacer pan de masa madre")
        .build()?;
    let prompt = seo_prompt(&request);

    assert!(prompt.contains("Tema del video: \"Cómo hacer pan de masa madre\""));
    assert!(prompt.ends_with("Genera el contenido estrictamente en el formato JSON solicitado."));
    assert!(!prompt.contains("Instrucción Adicional"));
    Ok(())
}

#[test]
fn test_seo_prompt_appends_trimmed_instruction_after_topic() -> anyhow::Result<()> {
    let request = GenerationRequest::builder()
        .topic("Pan")
        .custom_instruction("  Usa un tono humorístico \n")
        .build()?;
    let prompt = seo_prompt(&request);

    let marker = "**Instrucción Adicional Importante del Usuario**: Usa un tono humorístico\n";
    let instruction_at = prompt.find(marker).expect("instruction block present");
    let topic_at = prompt.find("Tema del video").expect("topic present");
    assert!(topic_at < instruction_at);
    Ok(())
}

#[test]
fn test_seo_prompt_ignores_blank_instruction() -> anyhow::Result<()> {
    let blank = GenerationRequest::builder()
        .topic("Pan")
        .custom_instruction("   ")
        .build()?;
    let none = GenerationRequest::builder().topic("Pan").build()?;
    assert_eq!(seo_prompt(&blank), seo_prompt(&none));
    Ok(())
}

#[test]
fn test_titles_prompt_quotes_topic_and_original() {
    let prompt = alternative_titles_prompt("Pan casero", "Cómo hacer pan");
    assert!(prompt.contains("Tema del video: \"Pan casero\""));
    assert!(prompt.contains("Título Original: \"Cómo hacer pan\""));
    assert!(prompt.contains("\"titles\""));
}

#[test]
fn test_viral_landscape_embeds_topic_without_framing() -> anyhow::Result<()> {
    let prompt = thumbnail_prompt(&thumbnail(ThumbnailStyle::Viral)?);

    assert!(prompt.contains("\"Mi primer maratón\""));
    assert!(prompt.contains("Composición dividida"));
    assert!(prompt.ends_with(QUALITY));
    assert!(!prompt.contains("YouTube thumbnail for a video titled"));
    assert!(!prompt.contains(NO_TEXT));
    assert!(!prompt.contains("CRITICAL INSTRUCTION"));
    Ok(())
}

#[test]
fn test_viral_portrait_uses_vertical_layout_and_overlay() -> anyhow::Result<()> {
    let request = ThumbnailRequest::builder()
        .topic("Mi primer maratón")
        .style(ThumbnailStyle::Viral)
        .aspect_ratio(AspectRatio::Portrait)
        .text_overlay("¡42 KM!")
        .build()?;
    let prompt = thumbnail_prompt(&request);

    assert!(prompt.contains("formato 9:16"));
    assert!(prompt.contains("Composición vertical"));
    assert!(prompt.contains("\"¡42 KM!\""));
    assert!(!prompt.contains("\"Mi primer maratón\""));
    Ok(())
}

#[test]
fn test_minimalist_with_overlay() -> anyhow::Result<()> {
    let request = ThumbnailRequest::builder()
        .topic("Mi primer maratón")
        .style(ThumbnailStyle::Minimalist)
        .text_overlay("Day 1")
        .build()?;
    let prompt = thumbnail_prompt(&request);

    assert!(prompt.starts_with("YouTube thumbnail for a video titled \"Mi primer maratón\"."));
    assert!(prompt.contains("clean and minimalist, simple background, one clear focal point"));
    assert!(prompt.contains(
        "CRITICAL INSTRUCTION: The image must prominently feature the text \"Day 1\"."
    ));
    assert!(!prompt.contains(NO_TEXT));
    Ok(())
}

#[test]
fn test_minimalist_without_overlay_forbids_text() -> anyhow::Result<()> {
    let prompt = thumbnail_prompt(&thumbnail(ThumbnailStyle::Minimalist)?);
    assert_eq!(
        prompt,
        "YouTube thumbnail for a video titled \"Mi primer maratón\". \
         clean and minimalist, simple background, one clear focal point \
         High resolution, professional quality. \
         The image should not contain any text."
    );
    Ok(())
}

#[test]
fn test_empty_overlay_counts_as_absent() -> anyhow::Result<()> {
    let request = ThumbnailRequest::builder()
        .topic("Mi primer maratón")
        .style(ThumbnailStyle::Retro)
        .text_overlay("")
        .build()?;
    assert!(thumbnail_prompt(&request).ends_with(NO_TEXT));
    Ok(())
}

#[test]
fn test_custom_prompt_is_used_verbatim() -> anyhow::Result<()> {
    let request = ThumbnailRequest::builder()
        .topic("Ignorado")
        .style(ThumbnailStyle::Viral)
        .text_overlay("Ignorado")
        .custom_prompt("  un gato astronauta  ")
        .build()?;
    assert_eq!(thumbnail_prompt(&request), "  un gato astronauta  ");
    Ok(())
}

#[test]
fn test_blank_custom_prompt_falls_back_to_style() -> anyhow::Result<()> {
    let request = ThumbnailRequest::builder()
        .topic("Mi primer maratón")
        .style(ThumbnailStyle::Custom)
        .custom_prompt("   ")
        .build()?;
    let prompt = thumbnail_prompt(&request);
    assert!(prompt.contains("cinematic, dramatic lighting, film-like quality"));
    Ok(())
}

#[test]
fn test_style_phrases() {
    let phrase = |style| style_description(style, "t", AspectRatio::Landscape, None);

    assert_eq!(
        phrase(ThumbnailStyle::PixelArt),
        StyleDescription::Phrase(
            "8-bit pixel art style, vibrant limited color palette, clear blocky pixels, nostalgic classic video game look, no anti-aliasing"
        )
    );
    assert_eq!(
        phrase(ThumbnailStyle::Vibrant).text(),
        "vibrant, saturated colors, high contrast"
    );
    assert_eq!(
        phrase(ThumbnailStyle::Photorealistic).text(),
        "photorealistic, sharp and detailed professional photograph"
    );
    assert_eq!(phrase(ThumbnailStyle::Custom), phrase(ThumbnailStyle::Cinematic));
    assert!(phrase(ThumbnailStyle::Watercolor).text().contains("watercolor"));
    assert!(phrase(ThumbnailStyle::Retro).text().contains("synthwave"));
    assert!(phrase(ThumbnailStyle::Viral).is_composition());
    assert!(!phrase(ThumbnailStyle::Minimalist).is_composition());
}
