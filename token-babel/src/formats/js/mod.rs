//! JavaScript UMD module
//!
//!     Tokens are merged per canonical path into one object tree. A token with both variants
//!     carries `value: { light, dark }`, a dark-only token `value: { dark }`. Path segments are used
//!     as keys verbatim, so `["size", "1.5rem"]` stays one `"1.5rem"` key.
//!
//!     The tree is wrapped in a UMD factory that registers itself through `module.exports`, then
//!     `exports`, then AMD `define`, then a global.

pub mod declarations;

pub use declarations::DeclarationsFormat;

use crate::common::escape;
use crate::common::tree::{self, TreeNode};
use crate::dictionary::Dictionary;
use crate::error::FormatError;
use crate::format::{Format, FormatContext};
use crate::modes::{self, ModeConvention, ModePair};
use serde_json::{Map, Value};

/// Global name the module registers under.
const GLOBAL_NAME: &str = "_styleDictionary";

/// `javascript/umd-with-modes`
#[derive(Debug, Clone, Copy, Default)]
pub struct UmdFormat;

/// JSON object for one mode pair: the primary token's fields with the merged value.
fn pair_object(pair: &ModePair<'_>) -> Value {
    let mut object = pair.primary().to_json();
    let merged = match (pair.light(), pair.dark()) {
        (Some(light), Some(dark)) => {
            let mut value = Map::new();
            value.insert("light".to_string(), light.value.clone());
            value.insert("dark".to_string(), dark.value.clone());
            Some(Value::Object(value))
        }
        (None, Some(dark)) => {
            let mut value = Map::new();
            value.insert("dark".to_string(), dark.value.clone());
            Some(Value::Object(value))
        }
        _ => None,
    };
    if let (Some(merged), Value::Object(map)) = (merged, &mut object) {
        map.insert("value".to_string(), merged);
    }
    object
}

fn node_object(node: &TreeNode<'_>) -> Map<String, Value> {
    let mut map = Map::new();
    for (segment, child) in &node.children {
        map.insert(segment.clone(), Value::Object(node_object(child)));
    }
    for leaf in &node.leaves {
        let key = leaf.key().to_string();
        if map.contains_key(&key) {
            tracing::debug!(key = %key, "token shadows a group of the same name");
        }
        map.insert(key, pair_object(&leaf.pair));
    }
    map
}

/// The merged token tree shared by the module and its declarations.
pub(crate) fn token_tree(dictionary: &Dictionary, convention: ModeConvention) -> Map<String, Value> {
    let groups = modes::group(dictionary.all_tokens(), convention);
    node_object(&tree::build(&groups))
}

/// Whether a tree node is a token rather than a group.
pub(crate) fn is_token(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|o| o.contains_key("value") || o.contains_key("$value"))
}

/// JSDoc lines of a token object: its comment, then `@deprecated` with the reason.
pub(crate) fn doc_lines(token: &Map<String, Value>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(comment) = token.get("comment").and_then(Value::as_str) {
        lines.push(escape::block_comment(&escape::line_comment(comment)));
    }
    if token.get("deprecated").and_then(Value::as_bool) == Some(true) {
        match token.get("deprecated_comment").and_then(Value::as_str) {
            Some(reason) if !reason.is_empty() => lines.push(format!(
                "@deprecated {}",
                escape::block_comment(&escape::line_comment(reason))
            )),
            _ => lines.push("@deprecated".to_string()),
        }
    }
    lines
}

fn js_doc(token: &Map<String, Value>, indent: &str) -> String {
    let lines = doc_lines(token);
    match lines.as_slice() {
        [] => String::new(),
        [line] => format!("{indent}/** {line} */\n"),
        _ => {
            let mut out = format!("{indent}/**\n");
            for line in &lines {
                out.push_str(&format!("{indent} * {line}\n"));
            }
            out.push_str(&format!("{indent} */\n"));
            out
        }
    }
}

fn quote(key: &str) -> String {
    Value::String(key.to_string()).to_string()
}

/// Renders a group as an object literal with JSDoc before every token entry.
fn stringify(map: &Map<String, Value>, indent: &str) -> Result<String, FormatError> {
    if map.is_empty() {
        return Ok("{}".to_string());
    }
    let next = format!("{indent}  ");
    let mut parts = Vec::with_capacity(map.len());
    for (key, value) in map {
        let rendered = match value {
            Value::Object(token) if is_token(value) => {
                let json = serde_json::to_string_pretty(token)
                    .map_err(|e| FormatError::SerializationError(e.to_string()))?;
                format!(
                    "{}{next}{}: {}",
                    js_doc(token, &next),
                    quote(key),
                    json.replace('\n', &format!("\n{next}"))
                )
            }
            Value::Object(group) => format!("{next}{}: {}", quote(key), stringify(group, &next)?),
            other => format!("{next}{}: {other}", quote(key)),
        };
        parts.push(rendered);
    }
    Ok(format!("{{\n{}\n{indent}}}", parts.join(",\n")))
}

impl Format for UmdFormat {
    fn name(&self) -> &str {
        "javascript/umd-with-modes"
    }

    fn description(&self) -> &str {
        "UMD module with light/dark values"
    }

    fn file_extensions(&self) -> &[&str] {
        &["js"]
    }

    fn generate(&self, dictionary: &Dictionary, ctx: &FormatContext) -> Result<String, FormatError> {
        let tree = token_tree(dictionary, ctx.convention());
        let body = stringify(&tree, "  ")?;

        let mut output = ctx.header();
        output.push_str(&format!(
            "(function (root, factory) {{
  if (typeof module === \"object\" && module.exports) {{
    module.exports = factory();
  }} else if (typeof exports === \"object\") {{
    exports[\"{GLOBAL_NAME}\"] = factory();
  }} else if (typeof define === \"function\" && define.amd) {{
    define([], factory);
  }} else {{
    root[\"{GLOBAL_NAME}\"] = factory();
  }}
}})(this, function () {{
  return {body};
}});
"
        ));
        Ok(output)
    }
}
