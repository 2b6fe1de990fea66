use crate::config::ProviderConfig;
use crate::error::NutritionError;
use crate::providers::{missing_content, read_json, LlmProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini through the `generateContent` endpoint
pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, NutritionError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or_else(|| {
                NutritionError::ProviderError(
                    "GOOGLE_API_KEY not found in config or environment".to_string(),
                )
            })?;

        Ok(GoogleProvider {
            client: Client::new(),
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GoogleProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

#[async_trait]
impl LlmProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str) -> Result<String, NutritionError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "contents": [{
                    "parts": [{"text": prompt}]
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens
                }
            }))
            .send()
            .await?;

        let body = read_json(self.provider_name(), response).await?;
        body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| missing_content("Google Gemini"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates": [{"content": {"parts": [{"text": "```json\n[]\n```"}]}}]}"#,
            )
            .create_async()
            .await;

        let provider = GoogleProvider::with_base_url(
            "test-key".to_string(),
            server.url(),
            "gemini-2.5-flash".to_string(),
        );

        let result = provider.generate("ideas").await.unwrap();
        assert!(result.starts_with("```json"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_server_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let provider = GoogleProvider::with_base_url(
            "test-key".to_string(),
            server.url(),
            "gemini-2.5-flash".to_string(),
        );

        let err = provider.generate("ideas").await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_provider_name() {
        let mut config = ProviderConfig::new("gemini-2.5-flash");
        config.api_key = Some("test-key".to_string());

        let provider = GoogleProvider::new(&config).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }
}
