//! Layered configuration for the Gemini driver.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (`include_str!` of `tubeseo.toml`)
//! - `~/.config/tubeseo/tubeseo.toml`
//! - `./tubeseo.toml`
//!
//! User files are optional and silently skipped when absent.

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};
use tubeseo_error::{ConfigError, TubeseoResult};

const DEFAULT_CONFIG: &str = include_str!("../tubeseo.toml");

/// Gemini endpoint, model and credential settings.
///
/// # Example
///
/// ```toml
/// [gemini]
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// text_model = "gemini-2.5-flash"
/// image_model = "imagen-4.0-generate-001"
/// api_key_env = "GEMINI_API_KEY"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// REST API root, without a trailing `/models`
    pub base_url: String,
    /// Model used for SEO text and title generation
    pub text_model: String,
    /// Model used for thumbnail generation
    pub image_model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "imagen-4.0-generate-001".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Root of `tubeseo.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TubeseoConfig {
    /// Gemini settings
    pub gemini: GeminiConfig,
}

impl TubeseoConfig {
    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tubeseo_models::TubeseoConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = TubeseoConfig::load()?;
    /// println!("text model: {}", config.gemini.text_model);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> TubeseoResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/tubeseo/tubeseo.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("tubeseo").required(false));

        Self::finish(builder)
    }

    /// Load the bundled defaults overlaid with one explicit file.
    ///
    /// The file may set any subset of keys. A missing or malformed file is
    /// an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> TubeseoResult<Self> {
        debug!("Loading configuration from file");

        let builder = Self::defaults().add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Parse a TOML document overlaid on the bundled defaults.
    pub fn from_toml_str(toml: &str) -> TubeseoResult<Self> {
        let builder = Self::defaults().add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> TubeseoResult<Self> {
        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }
}
