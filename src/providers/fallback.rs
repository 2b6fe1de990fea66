use crate::config::NutritionConfig;
use crate::error::NutritionError;
use crate::providers::{LlmProvider, ProviderFactory};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::{sleep, timeout};

pub struct FallbackProvider {
    providers: Vec<Box<dyn LlmProvider>>,
    retry_attempts: u32,
    retry_delay_ms: u64,
    timeout: Duration,
}

impl FallbackProvider {
    /// Create a new fallback provider from configuration
    pub fn new(config: &NutritionConfig) -> Result<Self, NutritionError> {
        let timeout = Duration::from_secs(config.timeout);

        if !config.fallback.enabled {
            // If fallback is disabled, just use the default provider
            let default_provider = ProviderFactory::get_default_provider(config)?;
            return Ok(FallbackProvider {
                providers: vec![default_provider],
                retry_attempts: 1,
                retry_delay_ms: 0,
                timeout,
            });
        }

        let mut providers = Vec::new();

        // Create providers in fallback order
        for provider_name in &config.fallback.order {
            if let Some(provider_config) = config.providers.get(provider_name) {
                if provider_config.enabled {
                    match ProviderFactory::create(provider_name, provider_config) {
                        Ok(provider) => {
                            info!("Added '{}' to fallback chain", provider_name);
                            providers.push(provider);
                        }
                        Err(e) => {
                            warn!("Failed to initialize provider '{}': {}", provider_name, e);
                        }
                    }
                }
            } else {
                warn!(
                    "Provider '{}' in fallback order not found in configuration",
                    provider_name
                );
            }
        }

        Self::from_providers(
            providers,
            config.fallback.retry_attempts,
            config.fallback.retry_delay_ms,
        )
        .map(|fallback| fallback.with_timeout(timeout))
    }

    /// Chain already constructed providers, tried in the given order
    pub fn from_providers(
        providers: Vec<Box<dyn LlmProvider>>,
        retry_attempts: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, NutritionError> {
        if providers.is_empty() {
            return Err(NutritionError::ProviderError(
                "No providers available in fallback configuration".to_string(),
            ));
        }

        Ok(FallbackProvider {
            providers,
            retry_attempts: retry_attempts.max(1),
            retry_delay_ms,
            timeout: Duration::from_secs(30),
        })
    }

    /// Bound each individual attempt
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Try a provider with linear backoff between attempts
    async fn try_provider_with_retry(
        &self,
        provider: &dyn LlmProvider,
        prompt: &str,
    ) -> Result<String, String> {
        let mut last_error = String::new();

        for attempt in 1..=self.retry_attempts {
            debug!(
                "Attempting generation with {} (attempt {}/{})",
                provider.provider_name(),
                attempt,
                self.retry_attempts
            );

            let error_msg = match timeout(self.timeout, provider.generate(prompt)).await {
                Ok(Ok(text)) => {
                    info!("Generated text using {}", provider.provider_name());
                    return Ok(text);
                }
                Ok(Err(e)) => e.to_string(),
                Err(_) => format!("timed out after {:?}", self.timeout),
            };

            warn!(
                "Provider {} failed (attempt {}/{}): {}",
                provider.provider_name(),
                attempt,
                self.retry_attempts,
                error_msg
            );
            last_error = error_msg;

            // Sleep only if we need to retry
            if attempt < self.retry_attempts {
                let delay = Duration::from_millis(self.retry_delay_ms * attempt as u64);
                debug!("Waiting {:?} before retry", delay);
                sleep(delay).await;
            }
        }

        Err(last_error)
    }
}

#[async_trait]
impl LlmProvider for FallbackProvider {
    fn provider_name(&self) -> &str {
        "fallback"
    }

    async fn generate(&self, prompt: &str) -> Result<String, NutritionError> {
        let mut all_errors: Vec<String> = Vec::new();

        for provider in &self.providers {
            match self.try_provider_with_retry(provider.as_ref(), prompt).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    all_errors.push(format!("{}: {}", provider.provider_name(), e));
                }
            }
        }

        Err(NutritionError::ProviderError(format!(
            "All providers failed:\n{}",
            all_errors.join("\n")
        )))
    }
}
