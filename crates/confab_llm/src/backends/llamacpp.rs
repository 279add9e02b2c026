//! llama.cpp server backend implementation (`llama-server` `/completion`)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::generator::{Generation, Generator};
use crate::params::SamplingParams;

/// Configuration for the llama.cpp server backend.
///
/// There is no model field: `llama-server` loads its model at startup,
/// and every request goes to whatever it holds.
#[derive(Debug, Clone)]
pub struct LlamaCppConfig {
    /// Base URL (default: http://localhost:8080)
    pub base_url: String,
}

impl LlamaCppConfig {
    /// Create new config pointing at the localhost default
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }

    /// Set base URL (trailing slashes stripped)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }
}

impl Default for LlamaCppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// llama.cpp server text-generation backend
pub struct LlamaCppGenerator {
    config: LlamaCppConfig,
    client: Client,
}

impl LlamaCppGenerator {
    /// Create a new llama.cpp generator
    pub fn new(config: LlamaCppConfig) -> Self {
        let client = Client::new();
        Self { config, client }
    }
}

/// llama-server completion request
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    n_predict: u32,
    temperature: f32,
    top_p: f32,
    repeat_penalty: f32,
    stream: bool,
}

impl<'a> CompletionRequest<'a> {
    fn new(prompt: &'a str, params: &SamplingParams) -> Self {
        Self {
            prompt,
            n_predict: params.max_new_tokens,
            // Same greedy convention as Ollama: temperature 0 disables sampling.
            temperature: if params.sample { params.temperature } else { 0.0 },
            top_p: params.top_p,
            repeat_penalty: params.repetition_penalty,
            stream: false,
        }
    }
}

/// llama-server completion response (non-streaming)
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: String,
}

#[async_trait]
impl Generator for LlamaCppGenerator {
    fn id(&self) -> &str {
        "llamacpp"
    }

    async fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<Vec<Generation>> {
        let url = format!("{}/completion", self.config.base_url);
        let request = CompletionRequest::new(prompt, params);

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::backend(format!(
                "llama-server error {}: {}",
                status, error_text
            )));
        }

        let parsed: CompletionResponse = response.json().await?;
        Ok(vec![Generation::new(parsed.content)])
    }

    async fn ping(&self) -> Result<()> {
        let url = format!("{}/health", self.config.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::backend(format!(
                "llama-server error {}",
                response.status()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[test]
    fn test_config_defaults() {
        let config = LlamaCppConfig::new();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_request_knobs() {
        let request = CompletionRequest::new("a prompt", &SamplingParams::chat_turn());
        assert_eq!(request.n_predict, 180);
        assert!(!request.stream);
        assert!((request.temperature - 0.7).abs() < 1e-6);
        assert!((request.repeat_penalty - 1.05).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_generate_reads_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/completion")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "prompt": "User: hi\nAssistant:",
                "n_predict": 180,
                "stream": false,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"content":" hello from llama"}"#)
            .create_async()
            .await;

        let generator =
            LlamaCppGenerator::new(LlamaCppConfig::new().with_base_url(server.url()));
        let generations = generator
            .generate("User: hi\nAssistant:", &SamplingParams::chat_turn())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(generations[0].text, " hello from llama");
    }

    #[tokio::test]
    async fn test_generate_surfaces_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/completion")
            .with_status(503)
            .with_body("loading model")
            .create_async()
            .await;

        let generator =
            LlamaCppGenerator::new(LlamaCppConfig::new().with_base_url(server.url()));
        let err = generator
            .generate("hi", &SamplingParams::chat_turn())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_ping_health_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/health")
            .with_status(200)
            .with_body(r#"{"status":"ok"}"#)
            .create_async()
            .await;

        let generator =
            LlamaCppGenerator::new(LlamaCppConfig::new().with_base_url(server.url()));
        assert!(generator.ping().await.is_ok());
        mock.assert_async().await;
    }
}
