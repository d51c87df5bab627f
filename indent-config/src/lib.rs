//! Configuration for indentscan.
//!
//! Settings come in layers, later ones winning: the embedded
//! `defaults/indent.default.toml`, an `indentscan.toml` in the working directory if present,
//! a file named with `--config`, then individual command-line flags. [`Loader`] stacks the
//! layers and [`Loader::build`] checks the result before handing out an [`IndentConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use indent_scanner::{LexOptions, MaskPolicy};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../defaults/indent.default.toml");

/// Top-level configuration consumed by indentscan applications.
#[derive(Debug, Clone, Deserialize)]
pub struct IndentConfig {
    pub scanner: ScannerConfig,
    pub inspect: InspectConfig,
    pub logging: LoggingConfig,
}

/// How the host driver measures and offers external tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    pub tab_width: u32,
    pub mask: MaskPolicy,
}

/// Controls token stream output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: OutputFormat,
    pub show_snapshots: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    TokenSimple,
    TokenJson,
    TokenSpans,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["token-simple", "token-json", "token-spans"];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::TokenSimple => "token-simple",
            OutputFormat::TokenJson => "token-json",
            OutputFormat::TokenSpans => "token-spans",
        }
    }
}

impl IndentConfig {
    /// Driver options for the scanner section.
    pub fn lex_options(&self) -> LexOptions {
        LexOptions {
            tab_width: self.scanner.tab_width,
            mask: self.scanner.mask,
        }
    }

    fn validate(self) -> Result<Self, ConfigLoadError> {
        if self.scanner.tab_width == 0 {
            return Err(ConfigLoadError::ZeroTabWidth);
        }
        Ok(self)
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("scanner.tab_width must be at least 1")]
    ZeroTabWidth,
}

/// Stacks configuration layers over the embedded defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the embedded defaults, which set every key.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file the user asked for by name; [`Loader::build`] fails if it is absent.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a TOML file picked up by convention, such as `./indentscan.toml`. Skipped when
    /// absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `scanner.mask`, above every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers into an [`IndentConfig`] and reject a zero tab width.
    pub fn build(self) -> Result<IndentConfig, ConfigLoadError> {
        let config: IndentConfig = self.builder.build()?.try_deserialize()?;
        config.validate()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<IndentConfig, ConfigLoadError> {
    Loader::new().build()
}
