//! Command-line interface for the cocktail-server binary
//!
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use crate::utils::toml_config::{CocktailConfig, ConfigError};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Default configuration file, optional when not given explicitly
pub const DEFAULT_CONFIG_PATH: &str = "cocktail.toml";

/// Cocktail QA server
#[derive(Parser, Debug)]
#[command(
    name = "cocktail-server",
    version,
    about = "Cocktail recipe question-answering server",
    long_about = "Loads the cocktail dataset, builds an in-memory embedding index and answers\n\
                  questions on POST /ask using a model served by Ollama.",
    after_help = "EXAMPLES:\n    \
                  cocktail-server                           # Start with cocktail.toml or defaults\n    \
                  cocktail-server --port 9000 -v            # Different port, debug logging\n    \
                  cocktail-server --dataset data/drinks.json\n    \
                  cocktail-server config --validate         # Check the configuration and exit"
)]
pub struct Cli {
    /// Path to the configuration file [default: cocktail.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Recipe dataset (JSON array)
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute; serves when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective configuration
    Config {
        /// Only validate, print nothing on success
        #[arg(long)]
        validate: bool,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve configuration: file, then environment, then flags.
    ///
    /// Also returns the file that was read, `None` when running on defaults.
    pub fn load_config(&self) -> Result<(CocktailConfig, Option<PathBuf>), ConfigError> {
        self.load_config_with_default(Path::new(DEFAULT_CONFIG_PATH))
    }

    fn load_config_with_default(
        &self,
        default_path: &Path,
    ) -> Result<(CocktailConfig, Option<PathBuf>), ConfigError> {
        let (path, required) = match &self.config {
            Some(path) => (path.clone(), true),
            None => (default_path.to_path_buf(), false),
        };

        let source = (required || path.exists()).then(|| path.clone());
        let mut config = CocktailConfig::load_or_default(&path, required)?;
        config.apply_env_overrides()?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok((config, source))
    }

    fn apply_overrides(&self, config: &mut CocktailConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dataset) = &self.dataset {
            config.dataset.path = dataset.clone();
        }
        if self.verbose {
            config.server.log_level = "debug".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cocktail-server"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flag_overrides() {
        let cli = Cli::try_parse_from([
            "cocktail-server",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
            "--dataset",
            "drinks.json",
            "-v",
        ])
        .unwrap();

        let mut config = CocktailConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.dataset.path, PathBuf::from("drinks.json"));
        assert_eq!(config.server.log_level, "debug");
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["cocktail-server", "config", "--validate"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { validate: true })));
    }

    #[test]
    fn test_missing_default_file_has_no_source() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from(["cocktail-server"]).unwrap();

        let (_, source) = cli
            .load_config_with_default(&dir.path().join("cocktail.toml"))
            .unwrap();
        assert!(source.is_none());
    }

    #[test]
    fn test_explicit_file_is_reported_as_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[llm]\nmodel = \"mistral\"\n").unwrap();

        let cli = Cli::try_parse_from(["cocktail-server", "--config", path.to_str().unwrap()]).unwrap();
        let (_, source) = cli
            .load_config_with_default(Path::new(DEFAULT_CONFIG_PATH))
            .unwrap();
        assert_eq!(source, Some(path));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let cli = Cli::try_parse_from(["cocktail-server", "-c", "/definitely/not/here.toml"]).unwrap();
        assert!(matches!(
            cli.load_config(),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["cocktail-server", "--port", "99999"]).is_err());
    }
}
