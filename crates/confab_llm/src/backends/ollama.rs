//! Ollama backend implementation (`/api/generate`, raw completion mode)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::generator::{Generation, Generator};
use crate::params::SamplingParams;

/// Configuration for the Ollama backend
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL (default: http://localhost:11434)
    pub base_url: String,
    /// Model tag to run, e.g. `llama3.2`
    pub model: String,
}

impl OllamaConfig {
    /// Environment variable Ollama itself uses for its listen address
    pub const HOST_ENV: &'static str = "OLLAMA_HOST";

    /// Create new config for a model, pointing at the localhost default
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: model.into(),
        }
    }

    /// Honor `OLLAMA_HOST` when set, otherwise keep the localhost default
    pub fn from_env(model: impl Into<String>) -> Self {
        match std::env::var(Self::HOST_ENV) {
            Ok(host) if !host.is_empty() => Self::new(model).with_base_url(host),
            _ => Self::new(model),
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

/// Ollama text-generation backend
pub struct OllamaGenerator {
    config: OllamaConfig,
    client: Client,
}

impl OllamaGenerator {
    /// Create a new Ollama generator
    pub fn new(config: OllamaConfig) -> Self {
        let client = Client::new();
        Self { config, client }
    }
}

/// Ollama generate request
#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    /// Raw mode: no server-side chat templating, the prompt reaches the
    /// model exactly as built.
    raw: bool,
    stream: bool,
    options: OllamaOptions,
}

/// Sampling options in Ollama's naming
#[derive(Debug, Serialize)]
struct OllamaOptions {
    num_predict: u32,
    temperature: f32,
    top_p: f32,
    repeat_penalty: f32,
}

impl OllamaOptions {
    fn from_params(params: &SamplingParams) -> Self {
        Self {
            num_predict: params.max_new_tokens,
            // Ollama has no separate sampling flag; temperature 0 is greedy.
            temperature: if params.sample { params.temperature } else { 0.0 },
            top_p: params.top_p,
            repeat_penalty: params.repetition_penalty,
        }
    }
}

/// Ollama generate response (non-streaming)
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}

#[async_trait]
impl Generator for OllamaGenerator {
    fn id(&self) -> &str {
        "ollama"
    }

    async fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<Vec<Generation>> {
        let url = format!("{}/api/generate", self.config.base_url);
        let request = OllamaRequest {
            model: &self.config.model,
            prompt,
            raw: true,
            stream: false,
            options: OllamaOptions::from_params(params),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::backend(format!(
                "Ollama API error {}: {}",
                status, error_text
            )));
        }

        let parsed: OllamaResponse = response.json().await?;
        Ok(vec![Generation::new(parsed.response)])
    }

    async fn ping(&self) -> Result<()> {
        let url = format!("{}/api/tags", self.config.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::backend(format!(
                "Ollama API error {}",
                response.status()
            )));
        }

        Ok(())
    }
}
