use crate::config::ProviderConfig;
use crate::error::RecipeError;
use crate::providers::{ImageGenerator, TextGenerator, RECIPE_GENERATOR_PROMPT};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    image_model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, RecipeError> {
        // Try config first, then fall back to environment variable
        let api_key = match config.api_key.clone() {
            Some(key) => key,
            None => std::env::var("OPENAI_API_KEY")?,
        };

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
            image_model: config.image_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Create a provider with just a key and chat model; everything else is defaulted
    pub fn with_api_key(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string(), model)
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        let defaults = ProviderConfig::default();
        OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            image_model: defaults.image_model,
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
        }
    }

    /// Apply a request timeout to every call made by this provider
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, RecipeError> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, RecipeError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        if !status.is_success() {
            return Err(RecipeError::ProviderError(format!(
                "{} returned {}: {}",
                path, status, response_body["error"]
            )));
        }
        Ok(response_body)
    }
}

#[async_trait]
impl TextGenerator for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> Result<String, RecipeError> {
        let response_body = self
            .post(
                "/v1/chat/completions",
                json!({
                    "model": self.model,
                    "messages": [
                        {"role": "system", "content": RECIPE_GENERATOR_PROMPT},
                        {"role": "user", "content": prompt}
                    ],
                    "temperature": self.temperature,
                    "max_tokens": self.max_tokens
                }),
            )
            .await?;

        let recipe = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                RecipeError::ProviderError("Failed to extract content from response".to_string())
            })?
            .to_string();

        Ok(recipe)
    }
}

#[async_trait]
impl ImageGenerator for OpenAIProvider {
    async fn generate_image(&self, prompt: &str) -> Option<String> {
        let result = self
            .post(
                "/v1/images/generations",
                json!({
                    "model": self.image_model,
                    "prompt": prompt,
                    "n": 1,
                    "size": "1024x1024"
                }),
            )
            .await;

        match result {
            Ok(body) => {
                let url = body["data"][0]["url"].as_str().map(str::to_string);
                if url.is_none() {
                    warn!("Image response carried no URL");
                }
                url
            }
            Err(e) => {
                warn!("Image generation failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "choices": [{
                        "message": {
                            "content": "Title: Pasta\nIngredients:\n- 500g pasta\nInstructions:\n1. Boil pasta"
                        }
                    }]
                }"#,
            )
            .create();

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4o-mini".to_string(),
        );

        let result = provider.generate("Create a recipe using: pasta.").await.unwrap();
        assert!(result.starts_with("Title: Pasta"));
        assert!(result.contains("500g pasta"));
        mock.assert();
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Invalid request"}"#)
            .create();

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4o-mini".to_string(),
        );

        let result = provider.generate("anything").await;
        assert!(matches!(result, Err(RecipeError::ProviderError(_))));
        mock.assert();
    }

    #[tokio::test]
    async fn test_generate_image() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/images/generations")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data": [{"url": "https://images.example/soup.png"}]}"#)
            .create();

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4o-mini".to_string(),
        );

        let url = provider.generate_image("A bowl of soup").await;
        assert_eq!(url.as_deref(), Some("https://images.example/soup.png"));
        mock.assert();
    }

    #[tokio::test]
    async fn test_generate_image_failure_is_none() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/images/generations")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "boom"}"#)
            .create();

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4o-mini".to_string(),
        );

        assert!(provider.generate_image("A bowl of soup").await.is_none());
        mock.assert();
    }

    #[tokio::test]
    async fn test_provider_name() {
        let provider =
            OpenAIProvider::with_api_key("fake_api_key".to_string(), "gpt-4".to_string());
        assert_eq!(provider.provider_name(), "openai");
    }
}
