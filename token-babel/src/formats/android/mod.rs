//! Android resource formats
//!
//!     XML resources for the `values/` and `values-night/` folders, a dimens file, and the Compose
//!     theme object (see [`kotlin`]).
//!
//!     - `android/resources-with-modes`: every token in one file; dark variants get a `dark`
//!       segment after the prefix (`xpl_dark_color_background`).
//!     - `android/resources-light`: one entry per canonical token, light value preferred.
//!     - `android/resources-dark`: one entry per canonical token, dark value preferred.
//!     - `android/dimens`: font sizes in `sp`, dimensions in `dp`, font weights as strings.
//!
//!     A dark-only token therefore appears in both the light and the dark file, so the resource
//!     exists in every configuration.

pub mod kotlin;

use crate::common::escape;
use crate::common::naming::android_resource_name;
use crate::common::references::resolve_value;
use crate::dictionary::{Dictionary, Token, TokenKind};
use crate::error::FormatError;
use crate::format::{Format, FormatContext};
use crate::modes::{self, is_dark_variant, ModeConvention};
use crate::transforms::numeric_value;

pub use kotlin::KotlinThemeFormat;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Which variant(s) a resources file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceMode {
    /// All tokens, dark ones renamed.
    WithModes,
    /// Light, falling back to dark.
    Light,
    /// Dark, falling back to light.
    Dark,
}

#[derive(Debug, Clone, Copy)]
pub struct ResourcesFormat {
    mode: ResourceMode,
}

impl ResourcesFormat {
    pub const fn new(mode: ResourceMode) -> Self {
        ResourcesFormat { mode }
    }
}

/// `<?xml ...?>`, then the header, then `<resources>`.
fn open_document(ctx: &FormatContext) -> String {
    let mut output = String::from(XML_DECLARATION);
    output.push_str(&ctx.header());
    output.push_str("<resources>\n");
    output
}

fn push_comment(output: &mut String, token: &Token) {
    if let Some(comment) = &token.comment {
        output.push_str(&format!("  <!-- {} -->\n", escape::xml_comment(comment)));
    }
}

fn push_resource(output: &mut String, kind: TokenKind, name: &str, value: &str) {
    let name = escape::xml_text(name);
    let value = escape::xml_text(value);
    match kind {
        TokenKind::Color => output.push_str(&format!("  <color name=\"{name}\">{value}</color>\n")),
        k if k.is_size() => output.push_str(&format!("  <dimen name=\"{name}\">{value}</dimen>\n")),
        _ => output.push_str(&format!(
            "  <item name=\"{name}\" type=\"string\">{value}</item>\n"
        )),
    }
}

/// `@color/…`, `@dimen/…` or `@string/…` for a referenced token, dark marker stripped.
fn resource_reference(referenced: &Token, prefix: &str, convention: ModeConvention) -> String {
    let name = android_resource_name(&convention.strip(&referenced.path), Some(prefix));
    let kind = match referenced.kind {
        TokenKind::Color => "color",
        k if k.is_size() => "dimen",
        _ => "string",
    };
    format!("@{kind}/{name}")
}

fn resource_value(token: &Token, dictionary: &Dictionary, ctx: &FormatContext) -> String {
    let prefix = ctx.prefix();
    let convention = ctx.convention();
    resolve_value(token, dictionary, ctx.options.output_references, |r| {
        resource_reference(r, prefix, convention)
    })
}

impl Format for ResourcesFormat {
    fn name(&self) -> &str {
        match self.mode {
            ResourceMode::WithModes => "android/resources-with-modes",
            ResourceMode::Light => "android/resources-light",
            ResourceMode::Dark => "android/resources-dark",
        }
    }

    fn description(&self) -> &str {
        match self.mode {
            ResourceMode::WithModes => "Android resources, light and dark in one file",
            ResourceMode::Light => "Android resources for values/",
            ResourceMode::Dark => "Android resources for values-night/",
        }
    }

    fn file_extensions(&self) -> &[&str] {
        match self.mode {
            ResourceMode::Light => &["xml"],
            _ => &[],
        }
    }

    fn generate(&self, dictionary: &Dictionary, ctx: &FormatContext) -> Result<String, FormatError> {
        let convention = ctx.convention();
        let prefix = ctx.prefix();
        let mut output = open_document(ctx);

        match self.mode {
            ResourceMode::WithModes => {
                for token in dictionary.all_tokens() {
                    let canonical = convention.strip(&token.path);
                    if canonical.is_empty() {
                        tracing::debug!(token = %token.name, "skipping token with empty path");
                        continue;
                    }
                    let name_prefix = if is_dark_variant(token, convention) {
                        format!("{prefix}_dark")
                    } else {
                        prefix.to_string()
                    };
                    let name = android_resource_name(&canonical, Some(&name_prefix));
                    push_comment(&mut output, token);
                    push_resource(
                        &mut output,
                        token.kind,
                        &name,
                        &resource_value(token, dictionary, ctx),
                    );
                }
            }
            ResourceMode::Light | ResourceMode::Dark => {
                let groups = modes::group(dictionary.all_tokens(), convention);
                for (canonical, pair) in groups.iter() {
                    if canonical.is_empty() {
                        continue;
                    }
                    let token = match self.mode {
                        ResourceMode::Dark => pair.dark_first(),
                        _ => pair.primary(),
                    };
                    let name = android_resource_name(canonical, Some(prefix));
                    push_comment(&mut output, token);
                    push_resource(
                        &mut output,
                        token.kind,
                        &name,
                        &resource_value(token, dictionary, ctx),
                    );
                }
            }
        }

        output.push_str("</resources>\n");
        Ok(output)
    }
}

/// `android/dimens`
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensFormat;

impl Format for DimensFormat {
    fn name(&self) -> &str {
        "android/dimens"
    }

    fn description(&self) -> &str {
        "Android dimensions (dp) and font sizes (sp)"
    }

    fn generate(&self, dictionary: &Dictionary, ctx: &FormatContext) -> Result<String, FormatError> {
        let prefix = ctx.prefix();
        let mut output = open_document(ctx);

        for token in dictionary.all_tokens() {
            let name = escape::xml_text(&android_resource_name(&token.path, Some(prefix)));
            push_comment(&mut output, token);

            if token.kind == TokenKind::FontWeight {
                output.push_str(&format!(
                    "  <string name=\"{name}\">{}</string>\n",
                    escape::xml_text(&token.value_text())
                ));
                continue;
            }

            let unit = if token.kind == TokenKind::FontSize {
                "sp"
            } else {
                "dp"
            };
            let value = match numeric_value(&token.value) {
                Some(n) => format!("{n:.2}{unit}"),
                None => token.value_text(),
            };
            output.push_str(&format!(
                "  <dimen name=\"{name}\">{}</dimen>\n",
                escape::xml_text(&value)
            ));
        }

        output.push_str("</resources>\n");
        Ok(output)
    }
}
