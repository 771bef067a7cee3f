//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tubeseo::AspectRatio;

/// tubeseo - SEO metadata, A/B titles and thumbnails for YouTube videos
#[derive(Parser, Debug)]
#[command(name = "tubeseo")]
#[command(about = "SEO metadata, A/B titles and thumbnails for YouTube videos", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file replacing the user and working-directory files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate title, description, hashtags, keywords and a pinned comment
    Seo {
        /// Video topic
        #[arg(long)]
        topic: String,

        /// Additional instruction with priority over the default guidelines
        #[arg(long)]
        instruction: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,

        /// Print the prompt without calling the API
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate alternative titles for A/B testing
    Titles {
        /// Video topic
        #[arg(long)]
        topic: String,

        /// Current title of the video
        #[arg(long)]
        original_title: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,

        /// Print the prompt without calling the API
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate a thumbnail image
    Thumbnail {
        /// Video topic
        #[arg(long)]
        topic: String,

        /// Visual style; unknown names render as cinematic
        #[arg(long, default_value = "cinematic")]
        style: String,

        /// Aspect ratio, 16:9 or 9:16
        #[arg(long, default_value = "16:9")]
        aspect_ratio: AspectRatio,

        /// Text to feature in the image
        #[arg(long)]
        text: Option<String>,

        /// Raw prompt replacing the style templates
        #[arg(long)]
        prompt: Option<String>,

        /// Where to write the image
        #[arg(long, default_value = "thumbnail.jpg")]
        output: PathBuf,

        /// Print the prompt without calling the API
        #[arg(long)]
        dry_run: bool,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
