//! confab_llm — Backend-agnostic text generation for the confab chat
//! front-end.
//!
//! ## Architecture
//!
//! ```text
//! history + user message
//!         │
//!         ▼
//!   build_prompt ────► Generator::generate ────► extract_reply
//!  (pure function)    (one HTTP call to a       (pure function)
//!                      local model server)
//! ```
//!
//! The only stateful piece is the backend process — an Ollama daemon or
//! a llama.cpp `llama-server` — which owns the loaded model. Everything
//! in this crate is either a pure string transformation or a thin,
//! single-shot call through the [`Generator`] trait: no retries, no
//! timeouts, no streaming.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use confab_llm::{GeneratorRegistry, OllamaConfig, OllamaGenerator};
//!
//! let generator = OllamaGenerator::new(OllamaConfig::new("llama3.2"));
//! let registry = GeneratorRegistry::new().register("ollama", generator);
//! ```

pub mod backends;
pub mod chat;
pub mod error;
pub mod extract;
pub mod generator;
pub mod params;
pub mod prompt;

#[cfg(test)]
mod tests;

// Re-export core abstractions
pub use chat::generate_reply;
pub use error::{Error, Result};
pub use generator::{Generation, Generator, GeneratorRegistry};

// Re-export backend implementations
pub use backends::{LlamaCppConfig, LlamaCppGenerator, OllamaConfig, OllamaGenerator};

// Re-export commonly used pieces
pub use extract::{extract_reply, ASSISTANT_MARKER, STOP_MARKERS};
pub use params::SamplingParams;
pub use prompt::{build_prompt, PREAMBLE};
