//! Nested Swift enums

use super::{deprecation_attribute, dynamic_color, IMPORTS};
use crate::common::escape;
use crate::common::naming::{camel_case, nested_reference, pascal_case, swift_identifier};
use crate::common::references::resolve_value;
use crate::common::tree::{self, Leaf, TreeNode};
use crate::dictionary::{Dictionary, Token, TokenKind};
use crate::error::FormatError;
use crate::format::{Format, FormatContext};
use crate::modes::{self, ModeConvention};

pub const DEFAULT_CLASS_NAME: &str = "Theme";

/// `ios-swift/enum-with-modes`
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedEnumFormat;

struct Renderer<'d> {
    dictionary: &'d Dictionary,
    class_name: &'d str,
    convention: ModeConvention,
    output_references: bool,
}

impl Renderer<'_> {
    fn value(&self, token: &Token) -> String {
        resolve_value(token, self.dictionary, self.output_references, |r| {
            nested_reference(
                self.class_name,
                &self.convention.strip(&r.path),
                swift_identifier,
            )
        })
    }

    fn leaf(&self, leaf: &Leaf<'_>, indent: &str) -> String {
        let member_indent = format!("{indent}    ");
        let primary = leaf.pair.primary();
        let name = swift_identifier(&camel_case(leaf.key()));

        let mut out = String::new();
        if let Some(message) = leaf.pair.deprecation_message() {
            out.push_str(&deprecation_attribute(&member_indent, message));
        }
        match (leaf.pair.light(), leaf.pair.dark()) {
            (Some(light), Some(dark)) if primary.kind == TokenKind::Color => {
                out.push_str(&dynamic_color(
                    &member_indent,
                    &name,
                    &self.value(light),
                    &self.value(dark),
                ));
            }
            _ => {
                out.push_str(&format!(
                    "{member_indent}public static let {name} = {}",
                    self.value(primary)
                ));
            }
        }
        if let Some(comment) = &primary.comment {
            out.push_str(&format!(" /** {} */", escape::swift_comment(comment)));
        }
        out.push('\n');
        out
    }

    fn enumeration(&self, node: &TreeNode<'_>, name: &str, indent: &str) -> String {
        let mut out = format!("{indent}public enum {name} {{\n");
        let child_indent = format!("{indent}    ");
        for (segment, child) in &node.children {
            let name = swift_identifier(&pascal_case(segment));
            out.push_str(&self.enumeration(child, &name, &child_indent));
        }
        for leaf in &node.leaves {
            out.push_str(&self.leaf(leaf, indent));
        }
        out.push_str(&format!("{indent}}}\n"));
        out
    }
}

impl Format for NestedEnumFormat {
    fn name(&self) -> &str {
        "ios-swift/enum-with-modes"
    }

    fn description(&self) -> &str {
        "Nested Swift enums with dynamic colors"
    }

    fn file_extensions(&self) -> &[&str] {
        &["swift"]
    }

    fn generate(&self, dictionary: &Dictionary, ctx: &FormatContext) -> Result<String, FormatError> {
        let groups = modes::group(dictionary.all_tokens(), ctx.convention());
        let root = tree::build(&groups);
        let renderer = Renderer {
            dictionary,
            class_name: ctx.class_name_or(DEFAULT_CLASS_NAME),
            convention: ctx.convention(),
            output_references: ctx.options.output_references,
        };

        let mut output = ctx.header();
        output.push_str(IMPORTS);
        output.push_str(&renderer.enumeration(&root, renderer.class_name, ""));
        Ok(output)
    }
}
