//! Shipped generation backends.
//!
//! Both speak HTTP to a locally hosted inference server that owns the
//! loaded model. This crate never touches weights or tokenizers.

pub mod llamacpp;
pub mod ollama;

pub use llamacpp::{LlamaCppConfig, LlamaCppGenerator};
pub use ollama::{OllamaConfig, OllamaGenerator};
