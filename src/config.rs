use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

use crate::nutrition::usda::DEFAULT_USDA_BASE_URL;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct NutritionConfig {
    /// Remote nutrition database settings
    #[serde(default)]
    pub usda: UsdaConfig,
    /// JSON file replacing the built-in ingredient mapping
    #[serde(default)]
    pub mapping_file: Option<String>,
    /// Provider used for recipe generation when fallback is disabled
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Fallback configuration for automatic provider switching
    #[serde(default)]
    pub fallback: FallbackConfig,
    /// LLM request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            usda: UsdaConfig::default(),
            mapping_file: None,
            default_provider: default_provider(),
            providers: HashMap::new(),
            fallback: FallbackConfig::default(),
            timeout: default_timeout(),
        }
    }
}

/// FoodData Central settings
#[derive(Debug, Deserialize, Clone)]
pub struct UsdaConfig {
    /// API key (falls back to the USDA_API_KEY environment variable)
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_usda_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_usda_timeout")]
    pub timeout: u64,
    /// Disable to resolve from the mapping and category defaults only
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for UsdaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_usda_base_url(),
            timeout: default_usda_timeout(),
            enabled: default_enabled(),
        }
    }
}

/// Configuration for a specific AI provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Model identifier (e.g., "gpt-4.1-mini", "gemini-1.5-flash")
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

impl ProviderConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            enabled: true,
            model: model.into(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

/// Configuration for provider fallback and retry behavior
#[derive(Debug, Deserialize, Clone)]
pub struct FallbackConfig {
    /// Whether fallback is enabled
    #[serde(default)]
    pub enabled: bool,
    /// Order of providers to try (first to last)
    #[serde(default)]
    pub order: Vec<String>,
    /// Number of retry attempts per provider before fallback
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Base delay between retries in milliseconds, multiplied by the attempt number
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            order: Vec::new(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "google".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_usda_base_url() -> String {
    DEFAULT_USDA_BASE_URL.to_string()
}

fn default_usda_timeout() -> u64 {
    10
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_timeout() -> u64 {
    30
}

impl NutritionConfig {
    /// Load configuration from `config.toml` and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_NUTRITION__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_NUTRITION__USDA__API_KEY
pub fn load_config() -> Result<NutritionConfig, ConfigError> {
    build_config(File::with_name("config").required(false))
}

/// Same as [`load_config`] but with an explicit, required config file
pub fn load_config_from(path: &str) -> Result<NutritionConfig, ConfigError> {
    build_config(File::with_name(path).required(true))
}

fn build_config<S>(file: S) -> Result<NutritionConfig, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_NUTRITION__PROVIDERS__OPENAI__API_KEY
        .add_source(
            Environment::with_prefix("RECIPE_NUTRITION")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
