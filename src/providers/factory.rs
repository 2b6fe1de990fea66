use crate::config::{NutritionConfig, ProviderConfig};
use crate::error::NutritionError;
use crate::providers::{AnthropicProvider, GoogleProvider, LlmProvider, OpenAIProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
    ) -> Result<Box<dyn LlmProvider>, NutritionError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(NutritionError::ProviderError(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        match provider_name {
            "openai" => Ok(Box::new(OpenAIProvider::new(config)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config)?)),
            "google" => Ok(Box::new(GoogleProvider::new(config)?)),
            _ => Err(NutritionError::ProviderError(format!(
                "Unknown provider: {}",
                provider_name
            ))),
        }
    }

    /// Get the default provider from configuration
    ///
    /// A provider without a config section is created with its default model,
    /// so an API key in the environment is enough to get started.
    pub fn get_default_provider(
        config: &NutritionConfig,
    ) -> Result<Box<dyn LlmProvider>, NutritionError> {
        let provider_name = &config.default_provider;
        match config.providers.get(provider_name) {
            Some(provider_config) => Self::create(provider_name, provider_config),
            None => {
                let model = Self::default_model(provider_name).ok_or_else(|| {
                    NutritionError::ProviderError(format!(
                        "Default provider '{}' not found in configuration",
                        provider_name
                    ))
                })?;
                Self::create(provider_name, &ProviderConfig::new(model))
            }
        }
    }

    /// Model used when a provider has no configuration section
    pub fn default_model(provider_name: &str) -> Option<&'static str> {
        match provider_name {
            "openai" => Some("gpt-4.1-mini"),
            "anthropic" => Some("claude-3-5-haiku-latest"),
            "google" => Some("gemini-2.5-flash"),
            _ => None,
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "anthropic", "google"]
    }
}
