//! Flat Swift enum with legacy aliases

use super::{deprecation_attribute, dynamic_color, IMPORTS};
use crate::common::legacy::{swift_legacy_names, SwiftInfix};
use crate::common::naming::{flat_camel_name, swift_identifier};
use crate::common::references::resolve_value;
use crate::dictionary::{Dictionary, Token, TokenKind};
use crate::error::FormatError;
use crate::format::{Format, FormatContext};
use crate::modes::{self, is_dark_variant, ModeConvention, ModePair};

pub const DEFAULT_CLASS_NAME: &str = "StyleDictionaryColor";

/// `ios-swift/enum-with-modes-legacy`
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatEnumFormat;

/// Member name of a token: its engine name, or for a dark variant the name of its light
/// counterpart (derived from the canonical path when there is none).
fn member_name(
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
            flat_camel_name(&parts)
        }
    }
}

struct Alias {
    legacy: String,
    current: String,
}

impl Format for FlatEnumFormat {
    fn name(&self) -> &str {
        "ios-swift/enum-with-modes-legacy"
    }

    fn description(&self) -> &str {
        "Flat Swift enum with dynamic colors and legacy aliases"
    }

    fn generate(&self, dictionary: &Dictionary, ctx: &FormatContext) -> Result<String, FormatError> {
        let convention = ctx.convention();
        let prefix = ctx.prefix();
        let class_name = ctx.class_name_or(DEFAULT_CLASS_NAME);
        let infix = SwiftInfix::for_class_name(class_name);
        let is_color_file = infix == SwiftInfix::Color;

        let value = |token: &Token| {
            resolve_value(token, dictionary, ctx.options.output_references, |r| {
                swift_identifier(&member_name(r, dictionary, prefix, convention))
            })
        };
        let pair_name = |pair: &ModePair<'_>| match pair.light() {
            Some(light) => light.name.clone(),
            None => member_name(pair.primary(), dictionary, prefix, convention),
        };

        let groups = modes::group(dictionary.all_tokens(), convention);
        let mut aliases: Vec<Alias> = Vec::new();

        let mut output = ctx.header();
        output.push_str(IMPORTS);
        output.push_str(&format!("public enum {class_name} {{\n"));

        for (_, pair) in groups.iter() {
            let primary = pair.primary();
            let name = pair_name(pair);
            let member = swift_identifier(&name);

            if let Some(message) = pair.deprecation_message() {
                output.push_str(&deprecation_attribute("    ", message));
            }

            match (pair.light(), pair.dark()) {
                (Some(light), Some(dark)) if primary.kind == TokenKind::Color => {
                    output.push_str(&dynamic_color("    ", &member, &value(light), &value(dark)));
                    output.push('\n');
                }
                _ => {
                    output.push_str(&format!(
                        "    public static let {member} = {}\n",
                        value(primary)
                    ));
                }
            }

            aliases.extend(
                swift_legacy_names(&name, prefix, infix)
                    .into_iter()
                    .map(|legacy| Alias {
                        legacy,
                        current: name.clone(),
                    }),
            );
        }

        if !aliases.is_empty() {
            output.push_str("\n    // MARK: - Backwards Compatibility Aliases\n");
            output.push_str("    // These aliases maintain compatibility with older token names.\n");
            output.push_str("    // They will be removed in a future major version.\n\n");
            for alias in &aliases {
                output.push_str(&format!(
                    "    @available(*, deprecated, renamed: \"{}\")\n",
                    alias.current
                ));
                output.push_str(&format!(
                    "    public static let {} = {}\n",
                    swift_identifier(&alias.legacy),
                    swift_identifier(&alias.current)
                ));
            }
        }
        output.push_str("}\n\n");

        if is_color_file {
            output.push_str("extension Color {\n");
            for (_, pair) in groups.iter() {
                let member = swift_identifier(&pair_name(pair));
                if let Some(message) = pair.deprecation_message() {
                    output.push_str(&deprecation_attribute("    ", message));
                }
                output.push_str(&format!(
                    "    public static let {member} = Color({class_name}.{member})\n"
                ));
            }
            if !aliases.is_empty() {
                output.push_str("\n    // MARK: - Backwards Compatibility Aliases\n\n");
                for alias in &aliases {
                    output.push_str(&format!(
                        "    @available(*, deprecated, renamed: \"{}\")\n",
                        alias.current
                    ));
                    let legacy = swift_identifier(&alias.legacy);
                    output.push_str(&format!(
                        "    public static let {legacy} = Color({class_name}.{legacy})\n"
                    ));
                }
            }
            output.push_str("}\n");
        }

        Ok(output)
    }
}
