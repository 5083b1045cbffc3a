//! Shared configuration loader for the design-token toolchain.
//!
//! `defaults/tokens.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TokensConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use token_babel::modes::detect::ModeConfig;
use token_babel::modes::ModeConvention;
use token_babel::platforms::{AndroidNames, Conventions, IosNames, PlatformsConfig};

const DEFAULT_TOML: &str = include_str!("../defaults/tokens.default.toml");

/// Top-level configuration consumed by token applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TokensConfig {
    pub build: BuildConfig,
    pub header: HeaderConfig,
    pub modes: ModesConfig,
    pub ios: IosConfig,
    pub android: AndroidConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    pub build_path: String,
    pub prefix: String,
    pub legacy_brands: Vec<String>,
    pub output_references: bool,
    pub tokens_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeaderConfig {
    pub lines: Vec<String>,
}

/// Mode-marker convention per generator family.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ModesConfig {
    pub css: ModeConvention,
    pub js: ModeConvention,
    pub android: ModeConvention,
    pub ios: ModeConvention,
}

impl ModesConfig {
    /// Convention for a format name, by its family prefix (`css/…`, `ios-swift/…`).
    pub fn for_format(&self, format: &str) -> ModeConvention {
        let family = format.split('/').next().unwrap_or_default();
        match family {
            "css" | "scss" => self.css,
            "javascript" | "typescript" => self.js,
            "android" => self.android,
            "ios-swift" => self.ios,
            _ => ModeConvention::default(),
        }
    }
}

impl From<ModesConfig> for Conventions {
    fn from(config: ModesConfig) -> Self {
        Conventions {
            css: config.css,
            js: config.js,
            android: config.android,
            ios: config.ios,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IosConfig {
    pub color_class_name: String,
    pub size_class_name: String,
    pub theme_class_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AndroidConfig {
    pub kotlin_class_name: String,
    pub package_name: String,
}

impl TokensConfig {
    /// Platform inputs for one brand, given its detected modes.
    pub fn platforms_config(&self, brand: &str, mode_config: ModeConfig) -> PlatformsConfig {
        PlatformsConfig {
            brand: brand.to_string(),
            build_path: self.build.build_path.clone(),
            prefix: self.build.prefix.clone(),
            legacy_brands: self.build.legacy_brands.clone(),
            mode_config,
            conventions: self.modes.into(),
            output_references: self.build.output_references,
            header_lines: self.header.lines.clone(),
            ios: IosNames {
                color_class_name: self.ios.color_class_name.clone(),
                size_class_name: self.ios.size_class_name.clone(),
                theme_class_name: self.ios.theme_class_name.clone(),
            },
            android: AndroidNames {
                kotlin_class_name: self.android.kotlin_class_name.clone(),
                package_name: self.android.package_name.clone(),
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
    pub fn build(self) -> Result<TokensConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TokensConfig, ConfigError> {
    Loader::new().build()
}
