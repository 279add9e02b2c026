//! Generator trait and registry

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::params::SamplingParams;

/// One generation candidate returned by a backend, raw text and all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
}

impl Generation {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A text-generation backend.
///
/// Implementations make exactly one best-effort call per
/// [`generate`](Generator::generate): no retry, no timeout, no
/// streaming. A successful call yields at least one candidate whose
/// text may still contain the prompt echo.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Stable backend ID (registry key, log field).
    fn id(&self) -> &str;

    /// Run one completion over `prompt` with the given sampling knobs.
    async fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<Vec<Generation>>;

    /// Cheap reachability probe against the backend server.
    async fn ping(&self) -> Result<()>;
}

/// Registry of generator implementations, keyed by backend ID.
#[derive(Default, Clone)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under the given ID. Returns `self` for chaining.
    pub fn register<G: Generator + 'static>(mut self, id: impl Into<String>, generator: G) -> Self {
        self.generators.insert(id.into(), Arc::new(generator));
        self
    }

    /// Look up a generator by ID.
    pub fn get(&self, id: &str) -> Result<Arc<dyn Generator>> {
        self.generators
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownGenerator(id.to_string()))
    }

    /// List all registered backend IDs.
    pub fn list(&self) -> Vec<String> {
        self.generators.keys().cloned().collect()
    }
}
