//! Format trait definition
//!
//! This module defines the core Format trait that all output generators implement, plus the
//! per-file context they receive. A generator is a pure function of the dictionary and the
//! context: no I/O, no shared state.

use crate::dictionary::Dictionary;
use crate::error::FormatError;
use crate::header;
use crate::modes::ModeConvention;
use std::collections::HashMap;

/// Prefix used when the platform does not set one.
pub const DEFAULT_PREFIX: &str = "xpl";

/// Where the output goes and whether it gets a header.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSpec {
    pub destination: String,
    pub show_header: bool,
    /// Header lines; empty means the default "do not edit" line.
    pub header_lines: Vec<String>,
}

impl FileSpec {
    pub fn new(destination: impl Into<String>) -> Self {
        FileSpec {
            destination: destination.into(),
            show_header: true,
            header_lines: Vec::new(),
        }
    }
}

/// Generator options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    pub output_references: bool,
    pub class_name: Option<String>,
    pub package_name: Option<String>,
    pub mode_convention: ModeConvention,
}

/// Platform metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformMeta {
    pub prefix: Option<String>,
}

/// Everything a generator needs besides the dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatContext {
    pub file: FileSpec,
    pub options: FormatOptions,
    pub platform: PlatformMeta,
}

impl FormatContext {
    pub fn new(destination: impl Into<String>) -> Self {
        FormatContext {
            file: FileSpec::new(destination),
            options: FormatOptions::default(),
            platform: PlatformMeta::default(),
        }
    }

    pub fn with_output_references(mut self, on: bool) -> Self {
        self.options.output_references = on;
        self
    }

    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.options.class_name = Some(name.into());
        self
    }

    pub fn with_package_name(mut self, name: impl Into<String>) -> Self {
        self.options.package_name = Some(name.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.platform.prefix = Some(prefix.into());
        self
    }

    pub fn with_convention(mut self, convention: ModeConvention) -> Self {
        self.options.mode_convention = convention;
        self
    }

    pub fn with_header(mut self, show: bool) -> Self {
        self.file.show_header = show;
        self
    }

    pub fn with_header_lines(mut self, lines: Vec<String>) -> Self {
        self.file.header_lines = lines;
        self
    }

    /// Builds a context from string parameters, as passed on the command line:
    /// `output-references`, `class-name`, `package-name`, `prefix`, `mode-convention`,
    /// `show-header`, `header`.
    pub fn from_params(
        destination: impl Into<String>,
        params: &HashMap<String, String>,
    ) -> Result<Self, FormatError> {
        let mut ctx = FormatContext::new(destination);
        for (key, value) in params {
            match key.as_str() {
                "output-references" => ctx.options.output_references = parse_flag(key, value)?,
                "show-header" => ctx.file.show_header = parse_flag(key, value)?,
                "class-name" => ctx.options.class_name = Some(value.clone()),
                "package-name" => ctx.options.package_name = Some(value.clone()),
                "prefix" => ctx.platform.prefix = Some(value.clone()),
                "header" => ctx.file.header_lines = vec![value.clone()],
                "mode-convention" => {
                    ctx.options.mode_convention =
                        ModeConvention::from_name(value).ok_or_else(|| {
                            FormatError::InvalidOption(format!(
                                "unknown mode convention '{value}'"
                            ))
                        })?;
                }
                other => {
                    tracing::debug!(parameter = other, "ignoring unknown format parameter");
                }
            }
        }
        Ok(ctx)
    }

    /// The rendered header, or an empty string when headers are off.
    pub fn header(&self) -> String {
        if self.file.show_header {
            header::render(&self.file.destination, &self.file.header_lines)
        } else {
            String::new()
        }
    }

    /// Platform prefix, defaulting to [`DEFAULT_PREFIX`].
    pub fn prefix(&self) -> &str {
        self.platform
            .prefix
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PREFIX)
    }

    pub fn class_name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.options.class_name.as_deref().unwrap_or(default)
    }

    pub fn convention(&self) -> ModeConvention {
        self.options.mode_convention
    }
}

/// Boolean option value: `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`, any case.
pub fn parse_flag(key: &str, value: &str) -> Result<bool, FormatError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(FormatError::InvalidOption(format!(
            "invalid boolean '{value}' for '{key}'"
        ))),
    }
}

/// Trait for output formats
///
/// Implementors turn a token dictionary into one text document.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my/format"
///     }
///
///     fn generate(&self, dictionary: &Dictionary, ctx: &FormatContext) -> Result<String, FormatError> {
///         Ok(dictionary.all_tokens().iter().map(|t| t.name.clone()).collect())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "css/variables-class-mode")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions this format is the default for, without the leading dot.
    ///
    /// Used for automatic format detection from output filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Generate the document
    fn generate(&self, dictionary: &Dictionary, ctx: &FormatContext)
        -> Result<String, FormatError>;
}
