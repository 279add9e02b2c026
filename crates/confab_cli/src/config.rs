//! Chat configuration for confab

use std::str::FromStr;

/// Generation backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Ollama,
    LlamaCpp,
}

impl BackendKind {
    /// All selectable backends, for listings and error hints
    pub const ALL: [BackendKind; 2] = [BackendKind::Ollama, BackendKind::LlamaCpp];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Ollama => "ollama",
            BackendKind::LlamaCpp => "llamacpp",
        }
    }
}

impl FromStr for BackendKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(BackendKind::Ollama),
            "llamacpp" | "llama.cpp" | "llama-cpp" => Ok(BackendKind::LlamaCpp),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Chat configuration
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Model to run. Ollama resolves the tag; llama-server ignores it
    /// because the server already holds its model.
    pub model: String,
    /// Generation backend
    pub backend: BackendKind,
    /// Base URL override for the backend server
    pub base_url: Option<String>,
}

impl ChatConfig {
    pub fn new() -> Self {
        Self {
            model: "llama3.2".to_string(),
            backend: BackendKind::default(),
            base_url: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = Some(url);
        self
    }

    /// Load configuration from environment variables:
    /// `CONFAB_MODEL` (falling back to `MODEL_NAME`), `CONFAB_BACKEND`,
    /// `CONFAB_BASE_URL`.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(model) = std::env::var("CONFAB_MODEL") {
            config.model = model;
        } else if let Ok(model) = std::env::var("MODEL_NAME") {
            config.model = model;
        }

        if let Ok(backend_str) = std::env::var("CONFAB_BACKEND") {
            if let Ok(backend) = backend_str.parse::<BackendKind>() {
                config.backend = backend;
            }
        }

        if let Ok(url) = std::env::var("CONFAB_BASE_URL") {
            if !url.is_empty() {
                config = config.with_base_url(url);
            }
        }

        config
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_as_str() {
        assert_eq!(BackendKind::Ollama.as_str(), "ollama");
        assert_eq!(BackendKind::LlamaCpp.as_str(), "llamacpp");
    }

    #[test]
    fn test_backend_kind_from_str() {
        assert_eq!("ollama".parse(), Ok(BackendKind::Ollama));
        assert_eq!("OLLAMA".parse(), Ok(BackendKind::Ollama));
        assert_eq!("llamacpp".parse(), Ok(BackendKind::LlamaCpp));
        assert_eq!("llama.cpp".parse(), Ok(BackendKind::LlamaCpp));
        assert!("gpt2".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_backend_kind_all() {
        for kind in BackendKind::ALL {
            assert_eq!(kind.as_str().parse::<BackendKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_chat_config_defaults() {
        let config = ChatConfig::new();
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.backend, BackendKind::Ollama);
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn test_chat_config_builder() {
        let config = ChatConfig::new()
            .with_model("qwen2.5")
            .with_backend(BackendKind::LlamaCpp)
            .with_base_url("http://box:8080/");

        assert_eq!(config.model, "qwen2.5");
        assert_eq!(config.backend, BackendKind::LlamaCpp);
        assert_eq!(config.base_url.as_deref(), Some("http://box:8080"));
    }
}
