//! Jetpack Compose theme object
//!
//! One nested `object` per path container and one `val` per token:
//!
//! ```text
//! object ApolloTheme {
//!     object Color {
//!         val primary: ComposeColor
//!             @Composable get() = if (isSystemInDarkTheme()) "#000000".toColor() else "#ffffff".toColor()
//!     }
//! }
//! ```

use crate::common::escape;
use crate::common::naming::{camel_case, kotlin_identifier, nested_reference, pascal_case};
use crate::common::references::{is_single_reference, resolve_references};
use crate::common::tree::{self, Leaf, TreeNode};
use crate::dictionary::{Dictionary, Token, TokenKind};
use crate::error::FormatError;
use crate::format::{Format, FormatContext};
use crate::modes::{self, ModeConvention};
use crate::transforms::numeric_value;

pub const DEFAULT_CLASS_NAME: &str = "Theme";
pub const DEFAULT_PACKAGE_NAME: &str = "com.xplor.design";

const PREAMBLE: &str = "import androidx.compose.foundation.isSystemInDarkTheme
import androidx.compose.runtime.Composable
import androidx.compose.ui.graphics.Color as ComposeColor
import androidx.compose.ui.unit.dp
import androidx.compose.ui.unit.sp

/** Converts hex string to Compose Color */
private fun String.toColor(): ComposeColor {
    val hex = this.removePrefix(\"#\").removePrefix(\"0x\")
    return when (hex.length) {
        6 -> ComposeColor(android.graphics.Color.parseColor(\"#$hex\"))
        8 -> ComposeColor(android.graphics.Color.parseColor(\"#$hex\"))
        else -> ComposeColor.Unspecified
    }
}

";

/// `android/kotlin-theme`
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinThemeFormat;

struct Renderer<'d> {
    dictionary: &'d Dictionary,
    class_name: &'d str,
    convention: ModeConvention,
    output_references: bool,
}

impl Renderer<'_> {
    /// Kotlin expression for one side of a pair.
    fn expression(&self, token: &Token, kind: TokenKind) -> String {
        if self.output_references
            && token.raw_str().is_some_and(is_single_reference)
        {
            let reference = resolve_references(token, self.dictionary, |r| {
                nested_reference(
                    self.class_name,
                    &self.convention.strip(&r.path),
                    kotlin_identifier,
                )
            });
            if let Some(reference) = reference {
                return reference;
            }
        }

        match kind {
            TokenKind::Color => format!("\"{}\".toColor()", escape::kotlin_string(&token.value_text())),
            k if k.is_size() => {
                let unit = if k == TokenKind::FontSize { "sp" } else { "dp" };
                match numeric_value(&token.value) {
                    Some(n) => format!("{n}.{unit}"),
                    None => format!("\"{}\"", escape::kotlin_string(&token.value_text())),
                }
            }
            _ => format!("\"{}\"", escape::kotlin_string(&token.value_text())),
        }
    }

    fn leaf(&self, leaf: &Leaf<'_>, indent: &str) -> String {
        let mut out = String::new();
        let primary = leaf.pair.primary();
        let name = kotlin_identifier(&camel_case(leaf.key()));

        if let Some(comment) = &primary.comment {
            out.push_str(&format!("{indent}    /** {} */\n", escape::block_comment(comment)));
        }
        if let Some(message) = leaf.pair.deprecation_message() {
            out.push_str(&format!(
                "{indent}    @Deprecated(\"{}\")\n",
                escape::kotlin_string(message)
            ));
        }

        let kind = primary.kind;
        // Inside `object Color` a bare `Color` names the object, so use the import alias.
        let type_annotation = if kind == TokenKind::Color { ": ComposeColor" } else { "" };
        match (leaf.pair.light(), leaf.pair.dark()) {
            (Some(light), Some(dark)) => {
                out.push_str(&format!("{indent}    val {name}{type_annotation}\n"));
                out.push_str(&format!(
                    "{indent}        @Composable get() = if (isSystemInDarkTheme()) {} else {}\n",
                    self.expression(dark, kind),
                    self.expression(light, kind)
                ));
            }
            _ => {
                out.push_str(&format!(
                    "{indent}    val {name}{type_annotation} = {}\n",
                    self.expression(primary, kind)
                ));
            }
        }
        out
    }

    fn object(&self, node: &TreeNode<'_>, name: &str, indent: &str) -> String {
        let mut out = format!("{indent}object {name} {{\n");
        let child_indent = format!("{indent}    ");
        for (segment, child) in &node.children {
            let name = kotlin_identifier(&pascal_case(segment));
            out.push_str(&self.object(child, &name, &child_indent));
        }
        for leaf in &node.leaves {
            out.push_str(&self.leaf(leaf, indent));
        }
        out.push_str(&format!("{indent}}}\n"));
        out
    }
}

impl Format for KotlinThemeFormat {
    fn name(&self) -> &str {
        "android/kotlin-theme"
    }

    fn description(&self) -> &str {
        "Jetpack Compose theme object with light/dark getters"
    }

    fn file_extensions(&self) -> &[&str] {
        &["kt"]
    }

    fn generate(&self, dictionary: &Dictionary, ctx: &FormatContext) -> Result<String, FormatError> {
        let class_name = ctx.class_name_or(DEFAULT_CLASS_NAME);
        let package_name = ctx
            .options
            .package_name
            .as_deref()
            .unwrap_or(DEFAULT_PACKAGE_NAME);

        let groups = modes::group(dictionary.all_tokens(), ctx.convention());
        let root = tree::build(&groups);
        let renderer = Renderer {
            dictionary,
            class_name,
            convention: ctx.convention(),
            output_references: ctx.options.output_references,
        };

        let mut output = ctx.header();
        output.push_str(&format!("package {package_name}\n\n"));
        output.push_str(PREAMBLE);
        output.push_str(&renderer.object(&root, class_name, ""));
        Ok(output)
    }
}
