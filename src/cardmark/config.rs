//! Configuration loading for the cardmark CLI.
//!
//! `defaults/cardmark.default.toml` is embedded into the binary so that
//! docs and runtime behavior stay in sync. Applications layer
//! user-specific files on top of those defaults via [`Loader`] before
//! deserializing into [`CardmarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/cardmark.default.toml");

/// Top-level configuration consumed by cardmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CardmarkConfig {
    pub output: OutputConfig,
    pub triggers: TriggersConfig,
}

/// Output-related knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Output format used when a command is run without `--format`:
    /// `simple`, `json`, or `yaml`.
    pub format: String,
}

/// Carousel trigger knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct TriggersConfig {
    /// Extra trigger patterns appended to the builtin set, each matched
    /// case-insensitively.
    pub extra_patterns: Vec<String>,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CardmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CardmarkConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.format, "json");
        assert!(config.triggers.extra_patterns.is_empty());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "simple")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "simple");
    }

    #[test]
    fn optional_file_is_ignored_when_missing() {
        let config = Loader::new()
            .with_optional_file("does-not-exist.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
    }
}
