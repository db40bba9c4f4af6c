//! Configuration management for the Trail Finder backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with TRAILFINDER_ prefix
//!
//! All upstream API keys are optional: endpoints that depend on a missing
//! key fall back to synthetic or fixture data instead of failing.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Google Places / Custom Search configuration
    pub google: GoogleConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Generative language API configuration
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GoogleConfig {
    /// Google Places API endpoint
    pub places_endpoint: String,

    /// Google Maps / Places API key (empty = use trail fixtures)
    pub maps_api_key: String,

    /// Custom Search API endpoint
    pub search_endpoint: String,

    /// Custom Search engine identifier (empty = skip image search)
    pub search_engine_id: String,
}

impl GoogleConfig {
    pub fn is_configured(&self) -> bool {
        !self.maps_api_key.is_empty()
    }

    pub fn search_is_configured(&self) -> bool {
        !self.maps_api_key.is_empty() && !self.search_engine_id.is_empty()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key (empty = serve synthetic weather)
    pub api_key: String,
}

impl WeatherConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// Generative language API endpoint
    pub api_endpoint: String,

    /// API key (empty = rule-based assistant replies)
    pub api_key: String,

    /// Model identifier
    pub model: String,
}

impl GeminiConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("TRAILFINDER_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "google.places_endpoint",
                "https://maps.googleapis.com/maps/api/place",
            )?
            .set_default("google.maps_api_key", "")?
            .set_default(
                "google.search_endpoint",
                "https://www.googleapis.com/customsearch/v1",
            )?
            .set_default("google.search_engine_id", "")?
            .set_default(
                "weather.api_endpoint",
                "https://api.openweathermap.org/data/2.5",
            )?
            .set_default("weather.api_key", "")?
            .set_default(
                "gemini.api_endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("gemini.api_key", "")?
            .set_default("gemini.model", "gemini-1.5-flash")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (TRAILFINDER_ prefix)
            .add_source(
                Environment::with_prefix("TRAILFINDER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
