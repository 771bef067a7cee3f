//! Command handlers.

use super::commands::{Commands, OutputFormat};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};
use tubeseo::{
    AlternativeTitle, AspectRatio, ContentError, ContentGenerator, GeminiClient, GeneratedContent,
    GenerationRequest, JsonError, ThumbnailRequest, ThumbnailStyle, TubeseoConfig, TubeseoResult,
    alternative_titles_prompt, seo_prompt, thumbnail_prompt,
};

/// Result of a command handler.
pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Billing hint printed when the provider reports quota exhaustion.
pub fn quota_hint(api_key_env: &str) -> String {
    format!(
        "Hint: the Gemini API quota is exhausted. Check the billing plan of the project \
         behind {api_key_env} or wait for the rate limit window to reset."
    )
}

/// Load configuration from an explicit file, or the default layers.
pub fn load_config(path: Option<&Path>) -> TubeseoResult<TubeseoConfig> {
    match path {
        Some(path) => TubeseoConfig::from_file(path),
        None => TubeseoConfig::load(),
    }
}

/// Report a failed command on stderr and choose the process exit code.
///
/// Quota exhaustion exits with 2, every other failure with 1. The hint names
/// the environment variable the API key was read from.
pub fn exit_code_for(err: &(dyn std::error::Error + 'static), api_key_env: &str) -> ExitCode {
    eprintln!("Error: {err}");
    match err.downcast_ref::<ContentError>() {
        Some(content) if content.is_quota_exceeded() => {
            eprintln!("{}", quota_hint(api_key_env));
            ExitCode::from(2)
        }
        _ => ExitCode::FAILURE,
    }
}

/// Dispatch a parsed command.
pub async fn handle_command(command: Commands, config: &TubeseoConfig) -> CliResult {
    match command {
        Commands::Seo {
            topic,
            instruction,
            format,
            dry_run,
        } => {
            let mut builder = GenerationRequest::builder();
            builder.topic(topic);
            if let Some(instruction) = instruction {
                builder.custom_instruction(instruction);
            }
            let request = builder.build().map_err(tubeseo::BuilderError::from)?;
            seo(config, &request, format, dry_run).await
        }

        Commands::Titles {
            topic,
            original_title,
            format,
            dry_run,
        } => titles(config, &topic, &original_title, format, dry_run).await,

        Commands::Thumbnail {
            topic,
            style,
            aspect_ratio,
            text,
            prompt,
            output,
            dry_run,
        } => {
            let request = thumbnail_request(topic, &style, aspect_ratio, text, prompt)?;
            thumbnail(config, &request, &output, dry_run).await
        }
    }
}

fn generator(config: &TubeseoConfig) -> TubeseoResult<ContentGenerator<GeminiClient>> {
    let client = GeminiClient::from_config(&config.gemini)?;
    Ok(ContentGenerator::new(client))
}

async fn seo(
    config: &TubeseoConfig,
    request: &GenerationRequest,
    format: OutputFormat,
    dry_run: bool,
) -> CliResult {
    if dry_run {
        println!("{}", seo_prompt(request));
        return Ok(());
    }

    let content = generator(config)?.generate_seo_content(request).await?;
    match format {
        OutputFormat::Json => print_json(&content)?,
        OutputFormat::Human => print_content(&content),
    }
    Ok(())
}

async fn titles(
    config: &TubeseoConfig,
    topic: &str,
    original_title: &str,
    format: OutputFormat,
    dry_run: bool,
) -> CliResult {
    if dry_run {
        println!("{}", alternative_titles_prompt(topic, original_title));
        return Ok(());
    }

    let titles = generator(config)?
        .generate_alternative_titles(topic, original_title)
        .await?;
    match format {
        OutputFormat::Json => print_json(&titles)?,
        OutputFormat::Human => print_titles(&titles),
    }
    Ok(())
}

fn thumbnail_request(
    topic: String,
    style: &str,
    aspect_ratio: AspectRatio,
    text: Option<String>,
    prompt: Option<String>,
) -> TubeseoResult<ThumbnailRequest> {
    let style = ThumbnailStyle::from_name_lenient(style);
    debug!(%style, %aspect_ratio, "Building thumbnail request");

    let mut builder = ThumbnailRequest::builder();
    builder.topic(topic).style(style).aspect_ratio(aspect_ratio);
    if let Some(text) = text {
        builder.text_overlay(text);
    }
    if let Some(prompt) = prompt {
        builder.custom_prompt(prompt);
    }
    Ok(builder.build().map_err(tubeseo::BuilderError::from)?)
}

async fn thumbnail(
    config: &TubeseoConfig,
    request: &ThumbnailRequest,
    output: &Path,
    dry_run: bool,
) -> CliResult {
    if dry_run {
        println!("{}", thumbnail_prompt(request));
        return Ok(());
    }

    let image = generator(config)?.generate_thumbnail(request).await?;
    std::fs::write(output, image.bytes())?;
    info!(path = %output.display(), bytes = image.bytes().len(), "Thumbnail written");
    println!("{}", output.display());
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> TubeseoResult<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn print_content(content: &GeneratedContent) {
    println!("Title: {}", content.title);
    println!("{:-<80}", "");
    println!("{}", content.description);
    println!("{:-<80}", "");
    println!("Hashtags: {}", content.hashtags.join(" "));
    println!("Keywords: {}", content.keywords.join(", "));
    println!("{:-<80}", "");
    println!("Pinned comment: {}", content.pinned_comment);
}

fn print_titles(titles: &[AlternativeTitle]) {
    if titles.is_empty() {
        println!("No alternative titles returned.");
        return;
    }
    for title in titles {
        println!("{:>3}  {}", title.seo_score, title.title);
    }
}
