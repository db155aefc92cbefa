//! Configuration and process-level utilities.

/// TOML configuration loading, defaults and validation.
pub mod toml_config;
/// Tracing subscriber setup.
pub mod logging;
