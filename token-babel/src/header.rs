//! Generated-file headers
//!
//! The comment grammar follows the destination extension. XML headers are placed after the
//! `<?xml ... ?>` declaration by the XML generators, everything else starts with the header.

use crate::common::escape;
use std::path::Path;

pub const DEFAULT_HEADER_LINE: &str = "Do not edit directly, this file was auto-generated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `<!-- -->`
    Xml,
    /// `//`
    Line,
    /// `/** */`
    Block,
    /// No header (JSON has no comments).
    None,
}

impl CommentStyle {
    pub fn for_destination(destination: &str) -> Self {
        let extension = Path::new(destination)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match extension {
            "xml" => CommentStyle::Xml,
            "swift" => CommentStyle::Line,
            "json" => CommentStyle::None,
            _ => CommentStyle::Block,
        }
    }
}

/// Renders the header for `destination`, including its trailing blank line where the style has one.
pub fn render(destination: &str, lines: &[String]) -> String {
    let default_lines = [DEFAULT_HEADER_LINE.to_string()];
    let lines = if lines.is_empty() {
        &default_lines[..]
    } else {
        lines
    };

    let mut out = String::new();
    match CommentStyle::for_destination(destination) {
        CommentStyle::Xml => {
            out.push_str("<!--\n");
            for line in lines {
                out.push_str(&format!("  {}\n", escape::xml_comment(line)));
            }
            out.push_str("-->\n");
        }
        CommentStyle::Line => {
            out.push_str("//\n");
            for line in lines {
                out.push_str(&format!("// {}\n", escape::line_comment(line)));
            }
            out.push_str("//\n\n");
        }
        CommentStyle::Block => {
            out.push_str("/**\n");
            for line in lines {
                out.push_str(&format!(" * {}\n", escape::block_comment(line)));
            }
            out.push_str(" */\n\n");
        }
        CommentStyle::None => {}
    }
    out
}
