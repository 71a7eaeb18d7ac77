//! Shared configuration loader for the rfcdoc toolchain.
//!
//! `defaults/rfcdoc.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`RfcConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/rfcdoc.default.toml");

/// Top-level configuration consumed by rfcdoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RfcConfig {
    pub formatting: FormattingRules,
    pub documents: DocumentRules,
}

/// Knobs honored by the layout normalization pass.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingRules {
    pub max_blank_lines: usize,
    pub trim_trailing_whitespace: bool,
    pub ensure_final_newline: bool,
}

/// Applicability gating: which files count as structural documents.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentRules {
    pub extensions: Vec<String>,
}

impl Default for RfcConfig {
    fn default() -> Self {
        RfcConfig {
            formatting: FormattingRules {
                max_blank_lines: 2,
                trim_trailing_whitespace: true,
                ensure_final_newline: true,
            },
            documents: DocumentRules {
                extensions: vec!["rfc".to_string()],
            },
        }
    }
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
    pub fn build(self) -> Result<RfcConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RfcConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.formatting.max_blank_lines, 2);
        assert!(config.formatting.trim_trailing_whitespace);
        assert_eq!(config.documents.extensions, vec!["rfc".to_string()]);
    }

    #[test]
    fn embedded_defaults_match_hardcoded_fallback() {
        let loaded = load_defaults().expect("defaults to deserialize");
        let fallback = RfcConfig::default();
        assert_eq!(
            loaded.formatting.max_blank_lines,
            fallback.formatting.max_blank_lines
        );
        assert_eq!(loaded.documents.extensions, fallback.documents.extensions);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("formatting.max_blank_lines", 1i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.formatting.max_blank_lines, 1);
    }
}
