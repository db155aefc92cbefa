//! LLM provider clients
//!
//! - [`LLMClient`] - the trait the query engine generates answers through
//! - [`Provider`] - runtime provider selection from configuration
//! - [`OllamaClient`] - chat completions against an Ollama server

/// Core LLM client trait and provider selection.
pub mod client;
/// Ollama chat client.
pub mod ollama;

pub use client::{LLMClient, Provider};
pub use ollama::OllamaClient;
