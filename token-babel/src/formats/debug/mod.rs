//! Debug dump
//!
//! The nested token tree exactly as the dictionary engine produced it, pretty-printed. Useful
//! for checking which attributes and paths tokens carry after parsing.

use crate::dictionary::Dictionary;
use crate::error::FormatError;
use crate::format::{Format, FormatContext};

/// `json/debug`
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugFormat;

impl Format for DebugFormat {
    fn name(&self) -> &str {
        "json/debug"
    }

    fn description(&self) -> &str {
        "Nested token tree as indented JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn generate(&self, dictionary: &Dictionary, _ctx: &FormatContext) -> Result<String, FormatError> {
        serde_json::to_string_pretty(dictionary.tree())
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
