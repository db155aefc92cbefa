use crate::llm::client::LLMClient;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use ollama_rs::{
    generation::chat::{request::ChatMessageRequest, ChatMessage},
    Ollama,
};
use tracing::{debug, warn};

const DEFAULT_OLLAMA_PORT: u16 = 11434;

/// [`LLMClient`] backed by an Ollama server's chat endpoint.
pub struct OllamaClient {
    client: Ollama,
    model: String,
}

impl OllamaClient {
    /// Client for `model` on the server at `base_url`; no request is made yet.
    pub fn new(base_url: &str, model: String) -> Result<Self> {
        let (host, port) = parse_base_url(base_url)?;
        debug!(%host, port, %model, "Creating Ollama client");

        let client = Ollama::new(host, port);

        Ok(Self { client, model })
    }
}

/// Split `scheme://host[:port][/path]` into `scheme://host` and a port.
///
/// A missing port means 11434 regardless of scheme.
pub(crate) fn parse_base_url(base_url: &str) -> Result<(String, u16)> {
    let url = reqwest::Url::parse(base_url)
        .map_err(|e| AppError::LLM(format!("Invalid Ollama URL '{}': {}", base_url, e)))?;

    let host = url
        .host_str()
        .ok_or_else(|| AppError::LLM(format!("Ollama URL '{}' has no host", base_url)))?;

    let port = url.port().unwrap_or(DEFAULT_OLLAMA_PORT);

    Ok((format!("{}://{}", url.scheme(), host), port))
}

/// True when `available` names `model`, with or without a tag suffix.
pub(crate) fn model_is_listed(model: &str, available: &[String]) -> bool {
    available
        .iter()
        .any(|name| name == model || name.starts_with(&format!("{}:", model)))
}

#[async_trait]
impl LLMClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let messages = vec![ChatMessage::user(prompt.to_string())];

        let request = ChatMessageRequest::new(self.model.clone(), messages);

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| AppError::LLM(format!("Ollama error: {}", e)))?;

        Ok(response.message.content)
    }

    async fn health_check(&self) -> Result<bool> {
        let models = self
            .client
            .list_local_models()
            .await
            .map_err(|e| AppError::LLM(format!("Ollama server unreachable: {}", e)))?;

        let names: Vec<String> = models.into_iter().map(|m| m.name).collect();
        let listed = model_is_listed(&self.model, &names);
        if !listed {
            warn!(
                model = %self.model,
                available = ?names,
                "Configured model is not pulled on the Ollama server"
            );
        }
        Ok(listed)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_parsing_full() {
        let (host, port) = parse_base_url("http://localhost:11434").unwrap();
        assert_eq!(host, "http://localhost");
        assert_eq!(port, 11434);
    }

    #[test]
    fn test_url_parsing_no_port() {
        let (host, port) = parse_base_url("http://localhost").unwrap();
        assert_eq!(host, "http://localhost");
        assert_eq!(port, 11434);
    }

    #[test]
    fn test_url_parsing_custom_port() {
        let (host, port) = parse_base_url("http://192.168.1.100:8080").unwrap();
        assert_eq!(host, "http://192.168.1.100");
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_url_parsing_keeps_https_and_drops_path() {
        let (host, port) = parse_base_url("https://ollama.internal/api/").unwrap();
        assert_eq!(host, "https://ollama.internal");
        assert_eq!(port, 11434);
    }

    #[test]
    fn test_url_parsing_rejects_garbage() {
        assert!(matches!(parse_base_url("localhost:11434:x"), Err(AppError::LLM(_))));
        assert!(parse_base_url("").is_err());
    }

    #[test]
    fn test_model_is_listed() {
        let available = vec!["tinyllama:latest".to_string(), "mistral:7b".to_string()];
        assert!(model_is_listed("tinyllama", &available));
        assert!(model_is_listed("mistral:7b", &available));
        assert!(!model_is_listed("llama3", &available));
        assert!(!model_is_listed("tiny", &available));
    }
}
