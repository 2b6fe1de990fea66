mod anthropic;
mod factory;
mod fallback;
mod google;
mod open_ai;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use fallback::FallbackProvider;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;

use async_trait::async_trait;
use log::debug;
use reqwest::Response;
use serde_json::Value;

use crate::error::NutritionError;

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Send a single prompt and return the raw generated text
    async fn generate(&self, prompt: &str) -> Result<String, NutritionError>;
}

/// Decode a provider response, turning non-success statuses into errors
async fn read_json(provider: &str, response: Response) -> Result<Value, NutritionError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(NutritionError::ProviderError(format!(
            "{} API returned {}: {}",
            provider, status, body
        )));
    }

    let body: Value = response.json().await?;
    debug!("{} response: {:?}", provider, body);
    Ok(body)
}

fn missing_content(provider: &str) -> NutritionError {
    NutritionError::ProviderError(format!("Failed to extract content from {} response", provider))
}
