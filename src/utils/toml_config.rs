//! TOML-based configuration for the cocktail server
//!
//! Every section and field has a default, so an empty file (or no file at
//! all) yields a working local setup: dataset `cocktail_dataset.json`,
//! Ollama on `http://localhost:11434` serving `tinyllama`, and local
//! `all-MiniLM-L6-v2` embeddings.
//!
//! Precedence, lowest to highest: built-in defaults, `cocktail.toml`,
//! environment variables (see [`CocktailConfig::apply_env_overrides`]),
//! command-line flags.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure loaded from cocktail.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CocktailConfig {
    /// HTTP listener and logging
    #[serde(default)]
    pub server: ServerConfig,

    /// Recipe dataset location
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Ollama chat model
    #[serde(default)]
    pub llm: LlmConfig,

    /// Embedding provider and model
    #[serde(default)]
    pub embeddings: EmbeddingConfig,
}

// ============= Server Configuration =============

/// `[server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// `pretty` (human readable) or `json`
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

// ============= Dataset Configuration =============

/// `[dataset]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// JSON array of recipe records
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("cocktail_dataset.json")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

// ============= LLM Configuration =============

/// `[llm]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Ollama server URL
    #[serde(default = "default_ollama_url")]
    pub base_url: String,

    /// Chat model name as known to Ollama
    #[serde(default = "default_llm_model")]
    pub model: String,
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_llm_model() -> String {
    "tinyllama".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_ollama_url(),
            model: default_llm_model(),
        }
    }
}

// ============= Embedding Configuration =============

/// Where embeddings are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    /// Local ONNX model through fastembed (feature `local-embeddings`)
    FastEmbed,
    /// Ollama `/api/embed` endpoint
    Ollama,
}

impl Default for EmbeddingProvider {
    fn default() -> Self {
        if cfg!(feature = "local-embeddings") {
            EmbeddingProvider::FastEmbed
        } else {
            EmbeddingProvider::Ollama
        }
    }
}

/// `[embeddings]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Embedding backend
    #[serde(default)]
    pub provider: EmbeddingProvider,

    /// Model code; defaults depend on the provider
    pub model: Option<String>,

    /// Only used by the `ollama` provider; defaults to `llm.base_url`
    pub base_url: Option<String>,

    /// Where fastembed stores downloaded model files
    pub cache_dir: Option<PathBuf>,

    /// Print fastembed's download progress bar
    #[serde(default)]
    pub show_download_progress: bool,
}

impl EmbeddingConfig {
    /// Model identifier, falling back to the provider's default.
    pub fn model_name(&self) -> &str {
        match (&self.model, self.provider) {
            (Some(model), _) => model,
            (None, EmbeddingProvider::FastEmbed) => "sentence-transformers/all-MiniLM-L6-v2",
            (None, EmbeddingProvider::Ollama) => "all-minilm",
        }
    }
}

// ============= Configuration Loading & Validation =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required configuration file does not exist
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file exists but could not be read
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The file is not valid TOML for this schema
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A value is out of range or malformed
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CocktailConfig {
    /// Load and validate configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;

        Ok(config)
    }

    /// Load from `path` if it exists; otherwise fall back to defaults.
    ///
    /// `required` turns a missing file into [`ConfigError::FileNotFound`],
    /// which is what an explicit `--config` flag asks for.
    pub fn load_or_default<P: AsRef<Path>>(path: P, required: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() || required {
            return Self::load(path);
        }

        Ok(Self::default())
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CocktailConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `OLLAMA_URL`, `OLLAMA_MODEL`, `COCKTAIL_DATASET`, `HOST` and `PORT`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("OLLAMA_URL") {
            self.llm.base_url = url;
        }
        if let Some(model) = lookup("OLLAMA_MODEL") {
            self.llm.model = model;
        }
        if let Some(path) = lookup("COCKTAIL_DATASET") {
            self.dataset.path = PathBuf::from(path);
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::ValidationError(format!("PORT is not a port number: {}", port)))?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "llm.model must not be empty".to_string(),
            ));
        }

        if self.dataset.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dataset.path must not be empty".to_string(),
            ));
        }

        if self.embeddings.model_name().trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "embeddings.model must not be empty".to_string(),
            ));
        }

        validate_url("llm.base_url", &self.llm.base_url)?;
        if let Some(url) = &self.embeddings.base_url {
            validate_url("embeddings.base_url", url)?;
        }

        if !matches!(self.server.log_format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(format!(
                "server.log_format must be 'pretty' or 'json', got '{}'",
                self.server.log_format
            )));
        }

        #[cfg(not(feature = "local-embeddings"))]
        if self.embeddings.provider == EmbeddingProvider::FastEmbed {
            return Err(ConfigError::ValidationError(
                "embeddings.provider = 'fastembed' requires the local-embeddings feature".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL for the Ollama embedding provider
    pub fn embedding_base_url(&self) -> &str {
        self.embeddings
            .base_url
            .as_deref()
            .unwrap_or(&self.llm.base_url)
    }
}

fn validate_url(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{} must start with http:// or https://, got '{}'",
            field, url
        )))
    }
}
