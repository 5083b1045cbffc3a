//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::dictionary::Dictionary;
use crate::error::FormatError;
use crate::format::{Format, FormatContext};
use crate::formats::{
    DebugFormat, DeclarationsFormat, DimensFormat, FlatEnumFormat, KotlinThemeFormat,
    NestedEnumFormat, ResourceMode, ResourcesFormat, UmdFormat, VariablesFormat,
};
use std::collections::HashMap;

/// Registry of output formats
///
/// Provides a centralized registry for all available formats.
/// Formats can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let css = registry.generate(&dictionary, "css/variables-class-mode", &ctx)?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name and description of every format, sorted by name.
    pub fn describe(&self) -> Vec<(String, String)> {
        self.list_formats()
            .into_iter()
            .map(|name| {
                let description = self
                    .formats
                    .get(&name)
                    .map(|f| f.description().to_string())
                    .unwrap_or_default();
                (name, description)
            })
            .collect()
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise. When several
    /// formats claim the same extension the alphabetically first one wins.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = FormatRegistry::default();
    /// assert_eq!(registry.detect_format_from_filename("Theme.kt"), Some("android/kotlin-theme".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("tokens.unknown"), None);
    /// ```
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.list_formats().into_iter().find(|name| {
            self.formats
                .get(name)
                .is_some_and(|f| f.file_extensions().contains(&extension))
        })
    }

    /// Generate a document with the specified format
    pub fn generate(
        &self,
        dictionary: &Dictionary,
        format: &str,
        ctx: &FormatContext,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        tracing::debug!(
            format,
            destination = %ctx.file.destination,
            tokens = dictionary.all_tokens().len(),
            "generating"
        );
        fmt.generate(dictionary, ctx)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        for format in VariablesFormat::all() {
            registry.register(format);
        }
        registry.register(ResourcesFormat::new(ResourceMode::WithModes));
        registry.register(ResourcesFormat::new(ResourceMode::Light));
        registry.register(ResourcesFormat::new(ResourceMode::Dark));
        registry.register(DimensFormat);
        registry.register(KotlinThemeFormat);
        registry.register(FlatEnumFormat);
        registry.register(NestedEnumFormat);
        registry.register(UmdFormat);
        registry.register(DeclarationsFormat);
        registry.register(DebugFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
