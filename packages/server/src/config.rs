use config::{Config, ConfigError, Environment, File};
use imagegen::ProviderConfig;
use imagegen::config::{GEMINI_API_BASE, GEMINI_IMAGE_MODEL, OPENAI_API_BASE, OPENAI_IMAGE_MODEL};
use serde::Deserialize;

use crate::tryon::style::Pose;

/// Placeholder some deployment templates ship instead of a real key.
const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for request bodies carrying base64 images.
    pub max_body_bytes: usize,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// Provider credential. Absent, empty or the template placeholder means
    /// placeholder images are generated locally instead.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub image_width: u32,
    pub image_height: u32,
    pub primary: ProviderConfig,
    pub fallback: ProviderConfig,
}

impl GenerationConfig {
    /// The configured credential, if it is usable.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    /// Generated images are portrait 2:3 and must have a non-zero size.
    pub fn validate_dimensions(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.image_width, self.image_height);
        if width == 0 || height == 0 || u64::from(width) * 3 != u64::from(height) * 2 {
            return Err(ConfigError::Message(format!(
                "generation image size must be a non-zero 2:3 portrait size, got {width}x{height}"
            )));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout_secs: 120,
            image_width: 1024,
            image_height: 1536,
            primary: ProviderConfig::gemini(),
            fallback: ProviderConfig::openai(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TryOnConfig {
    /// Poses accepted by `/virtual-tryon`.
    pub allowed_poses: Vec<Pose>,
}

impl Default for TryOnConfig {
    fn default() -> Self {
        Self {
            allowed_poses: vec![Pose::Front, Pose::Side],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub generation: GenerationConfig,
    pub tryon: TryOnConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("TRYON_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8001)?
            .set_default("server.max_body_bytes", 32 * 1024 * 1024)?
            .set_default("server.cors.allow_origins", vec!["*"])?
            .set_default("server.cors.max_age", 3600)?
            .set_default("database.url", "sqlite://tryon.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("generation.timeout_secs", 120)?
            .set_default("generation.image_width", 1024)?
            .set_default("generation.image_height", 1536)?
            .set_default("generation.primary.api_base", GEMINI_API_BASE)?
            .set_default("generation.primary.model", GEMINI_IMAGE_MODEL)?
            .set_default("generation.fallback.api_base", OPENAI_API_BASE)?
            .set_default("generation.fallback.model", OPENAI_IMAGE_MODEL)?
            .set_default("tryon.allowed_poses", vec!["front", "side"])?
            .add_source(File::with_name(&config_path).required(false))
            // Override from environment (e.g., TRYON__GENERATION__API_KEY)
            .add_source(
                Environment::with_prefix("TRYON")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allow_origins")
                    .with_list_parse_key("tryon.allowed_poses")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.generation.validate_dimensions()?;
        Ok(config)
    }
}
