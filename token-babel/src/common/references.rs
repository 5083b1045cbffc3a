//! Reference rewriting for `outputReferences`
//!
//!     A token whose raw expression is `{color.red.500}` can be emitted either as its resolved
//!     value or as a reference to the other token in the target language (`var(--xpl-color-red-500)`,
//!     `@color/xpl_color_red_500`, `Theme.Color.Red._500`). Each placeholder is looked up in the
//!     dictionary's reference index and replaced with whatever the target formatter produces. When
//!     any placeholder is unknown, the resolved value is used instead.

use crate::dictionary::{Dictionary, Token};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

static SINGLE_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\{[^{}]+\}\s*$").unwrap());

/// Whether `raw` contains at least one `{…}` placeholder.
pub fn uses_references(raw: &str) -> bool {
    PLACEHOLDER.is_match(raw)
}

/// Whether `raw` is nothing but one placeholder (an alias, not a composite expression).
pub fn is_single_reference(raw: &str) -> bool {
    SINGLE_PLACEHOLDER.is_match(raw)
}

/// Tokens referenced by `raw`, in order of appearance. Unknown placeholders are skipped.
pub fn references<'d>(raw: &str, dictionary: &'d Dictionary) -> Vec<&'d Token> {
    PLACEHOLDER
        .captures_iter(raw)
        .filter_map(|caps| {
            let dotted = caps[1].trim();
            let found = dictionary
                .lookup(dotted)
                .or_else(|| dotted.strip_suffix(".value").and_then(|d| dictionary.lookup(d)));
            if found.is_none() {
                tracing::debug!(reference = dotted, "unresolved reference");
            }
            found
        })
        .collect()
}

/// Rewrites the token's raw expression with every matched placeholder replaced by
/// `formatter(referenced)`. `None` when the token has no placeholder or any of them is unknown.
pub fn resolve_references(
    token: &Token,
    dictionary: &Dictionary,
    formatter: impl Fn(&Token) -> String,
) -> Option<String> {
    let raw = token.raw_str()?;
    let refs = references(raw, dictionary);
    if refs.is_empty() || refs.len() < PLACEHOLDER.find_iter(raw).count() {
        return None;
    }

    let mut result = raw.to_string();
    for referenced in refs {
        let formatted = formatter(referenced);
        let escaped_path = referenced
            .path
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join(r"\.");
        match Regex::new(&format!(r"\{{\s*{escaped_path}(?:\.value)?\s*\}}")) {
            Ok(pattern) => {
                result = pattern
                    .replace_all(&result, NoExpand(&formatted))
                    .into_owned();
            }
            Err(_) => {
                result = result.replace(&format!("{{{}}}", referenced.dotted_path()), &formatted);
            }
        }
    }
    Some(result)
}

/// The text to emit for `token`: the rewritten expression when `output_references` is on and a
/// reference resolves, otherwise the resolved value.
pub fn resolve_value(
    token: &Token,
    dictionary: &Dictionary,
    output_references: bool,
    formatter: impl Fn(&Token) -> String,
) -> String {
    if output_references {
        if let Some(rewritten) = resolve_references(token, dictionary, formatter) {
            return rewritten;
        }
    }
    token.value_text()
}
