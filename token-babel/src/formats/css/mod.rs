//! CSS and SCSS custom-property formats
//!
//!     Light tokens go into `:root`, dark tokens into a second block that re-declares the same
//!     custom properties, either under `.dark` (class mode) or under
//!     `@media (prefers-color-scheme: dark)` (media mode):
//!
//!         :root {
//!           --xpl-color-background-primary: #ffffff;
//!         }
//!
//!         .dark {
//!           --xpl-color-background-primary: #111111;
//!         }
//!
//!     Dark tokens keep the name of their light counterpart so the override takes effect. SCSS
//!     outputs use the same blocks (a `$variable` declared inside `.dark {}` would be scoped to that
//!     block) and then expose every light property globally as `$name: var(--name);`.
//!
//!     Brands without modes use the plain variants: one `:root` block for CSS, bare `$name: value;`
//!     lines for SCSS.

use crate::common::escape;
use crate::common::legacy::LEGACY_ALIASES;
use crate::common::naming::kebab_name;
use crate::common::references::resolve_value;
use crate::dictionary::{Dictionary, Token};
use crate::error::FormatError;
use crate::format::{Format, FormatContext};
use crate::modes::{is_dark_variant, ModeConvention};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stylesheet {
    Css,
    Scss,
}

/// How the dark block is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DarkSelector {
    /// No dark block.
    None,
    /// `.dark { ... }`
    Class,
    /// `@media (prefers-color-scheme: dark) { :root { ... } }`
    Media,
}

#[derive(Debug, Clone, Copy)]
pub struct VariablesFormat {
    stylesheet: Stylesheet,
    selector: DarkSelector,
}

impl VariablesFormat {
    pub const fn new(stylesheet: Stylesheet, selector: DarkSelector) -> Self {
        VariablesFormat {
            stylesheet,
            selector,
        }
    }

    /// Every combination, in registration order.
    pub fn all() -> [VariablesFormat; 6] {
        [
            Self::new(Stylesheet::Css, DarkSelector::None),
            Self::new(Stylesheet::Css, DarkSelector::Class),
            Self::new(Stylesheet::Css, DarkSelector::Media),
            Self::new(Stylesheet::Scss, DarkSelector::None),
            Self::new(Stylesheet::Scss, DarkSelector::Class),
            Self::new(Stylesheet::Scss, DarkSelector::Media),
        ]
    }
}

impl Format for VariablesFormat {
    fn name(&self) -> &str {
        match (self.stylesheet, self.selector) {
            (Stylesheet::Css, DarkSelector::None) => "css/variables",
            (Stylesheet::Css, DarkSelector::Class) => "css/variables-class-mode",
            (Stylesheet::Css, DarkSelector::Media) => "css/variables-media-mode",
            (Stylesheet::Scss, DarkSelector::None) => "scss/variables",
            (Stylesheet::Scss, DarkSelector::Class) => "scss/variables-class-mode",
            (Stylesheet::Scss, DarkSelector::Media) => "scss/variables-media-mode",
        }
    }

    fn description(&self) -> &str {
        match self.selector {
            DarkSelector::None => "Variables for brands without color modes",
            DarkSelector::Class => "Custom properties with a .dark class override",
            DarkSelector::Media => "Custom properties with a prefers-color-scheme override",
        }
    }

    fn file_extensions(&self) -> &[&str] {
        match (self.stylesheet, self.selector) {
            (Stylesheet::Css, DarkSelector::Class) => &["css"],
            (Stylesheet::Scss, DarkSelector::Class) => &["scss"],
            _ => &[],
        }
    }

    fn generate(&self, dictionary: &Dictionary, ctx: &FormatContext) -> Result<String, FormatError> {
        let mut output = ctx.header();
        match (self.stylesheet, self.selector) {
            (Stylesheet::Css, DarkSelector::None) => {
                let tokens: Vec<&Token> = dictionary.all_tokens().iter().collect();
                output.push_str(":root {\n");
                output.push_str(&property_lines(&tokens, dictionary, ctx, "  "));
                output.push_str(&css_aliases(&tokens, "  "));
                output.push_str("\n}\n");
            }
            (Stylesheet::Scss, DarkSelector::None) => {
                output.push_str(&scss_plain(dictionary, ctx));
            }
            (stylesheet, selector) => {
                let convention = ctx.convention();
                let (dark, light): (Vec<&Token>, Vec<&Token>) = dictionary
                    .all_tokens()
                    .iter()
                    .partition(|t| is_dark_variant(t, convention));

                output.push_str(":root {\n");
                output.push_str(&property_lines(&light, dictionary, ctx, "  "));
                output.push_str(&css_aliases(&light, "  "));
                output.push_str("\n}\n\n");

                let (prefix, indent, suffix) = match selector {
                    DarkSelector::Media => (
                        "@media (prefers-color-scheme: dark) {\n  :root {\n",
                        "    ",
                        "\n  }\n}\n",
                    ),
                    _ => (".dark {\n", "  ", "\n}"),
                };
                output.push_str(prefix);
                output.push_str(&property_lines(&dark, dictionary, ctx, indent));
                output.push_str(suffix);

                if stylesheet == Stylesheet::Scss {
                    if !output.ends_with('\n') {
                        output.push('\n');
                    }
                    output.push('\n');
                    output.push_str(&scss_globals(&light, dictionary, ctx));
                }
            }
        }
        Ok(output)
    }
}

/// Custom property name for `token`: dark variants take the name of their light counterpart, or
/// the prefixed canonical path when there is none.
fn variable_name(
    token: &Token,
    dictionary: &Dictionary,
    prefix: &str,
    convention: ModeConvention,
) -> String {
    if !is_dark_variant(token, convention) {
        return token.name.clone();
    }
    let canonical = convention.strip(&token.path);
    match dictionary.lookup(&canonical.join(".")) {
        Some(light) if !is_dark_variant(light, convention) => light.name.clone(),
        _ => {
            let mut parts = vec![prefix.to_string()];
            parts.extend(canonical);
            kebab_name(&parts)
        }
    }
}

fn comment_suffix(token: &Token) -> String {
    match &token.comment {
        Some(comment) => format!(" /** {} */", escape::block_comment(comment)),
        None => String::new(),
    }
}

fn property_lines(
    tokens: &[&Token],
    dictionary: &Dictionary,
    ctx: &FormatContext,
    indent: &str,
) -> String {
    let convention = ctx.convention();
    let prefix = ctx.prefix();
    tokens
        .iter()
        .map(|token| {
            let value = resolve_value(token, dictionary, ctx.options.output_references, |r| {
                format!("var(--{})", variable_name(r, dictionary, prefix, convention))
            });
            format!(
                "{indent}--{}: {value};{}",
                variable_name(token, dictionary, prefix, convention),
                comment_suffix(token)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Legacy aliases whose replacement is declared among `tokens`, each on its own line.
fn css_aliases(tokens: &[&Token], indent: &str) -> String {
    let mut out = String::new();
    for alias in LEGACY_ALIASES {
        if !tokens.iter().any(|t| t.name == alias.current) {
            continue;
        }
        let comment = alias
            .comment
            .map(|c| format!(" /** {} */", escape::block_comment(c)))
            .unwrap_or_default();
        out.push_str(&format!(
            "\n{indent}--{}: var(--{});{comment}",
            alias.legacy, alias.current
        ));
    }
    out
}

fn scss_alias_lines(tokens: &[&Token]) -> Vec<String> {
    LEGACY_ALIASES
        .iter()
        .filter(|alias| tokens.iter().any(|t| t.name == alias.current))
        .map(|alias| {
            let comment = alias
                .comment
                .map(|c| format!(" // {}", escape::line_comment(c)))
                .unwrap_or_default();
            format!("${}: ${};{comment}", alias.legacy, alias.current)
        })
        .collect()
}

/// `$name: var(--name);` for every light token, then the legacy aliases.
fn scss_globals(light: &[&Token], dictionary: &Dictionary, ctx: &FormatContext) -> String {
    let convention = ctx.convention();
    let mut lines: Vec<String> = light
        .iter()
        .map(|t| {
            let name = variable_name(t, dictionary, ctx.prefix(), convention);
            format!("${name}: var(--{name});")
        })
        .collect();
    lines.extend(scss_alias_lines(light));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `$name: value;` lines, references rendered as `$other`.
fn scss_plain(dictionary: &Dictionary, ctx: &FormatContext) -> String {
    let tokens: Vec<&Token> = dictionary.all_tokens().iter().collect();
    let mut lines: Vec<String> = tokens
        .iter()
        .map(|token| {
            let value = resolve_value(token, dictionary, ctx.options.output_references, |r| {
                format!("${}", r.name)
            });
            let comment = token
                .comment
                .as_deref()
                .map(|c| format!(" // {}", escape::line_comment(c)))
                .unwrap_or_default();
            format!("${}: {value};{comment}", token.name)
        })
        .collect();
    lines.extend(scss_alias_lines(&tokens));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
