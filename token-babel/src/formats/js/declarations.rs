//! TypeScript declarations for the UMD module
//!
//! Value types are inferred from the data rather than assumed to be `string`: a merged
//! light/dark value becomes `{ light: string; dark: string }`, numbers stay `number`, and so on.

use super::{doc_lines, is_token, token_tree};
use crate::dictionary::Dictionary;
use crate::error::FormatError;
use crate::format::{Format, FormatContext};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*$").unwrap());

/// `typescript/declarations`
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationsFormat;

/// A property key, quoted unless it is a plain identifier.
fn property_key(key: &str) -> String {
    if IDENTIFIER.is_match(key) {
        key.to_string()
    } else {
        Value::String(key.to_string()).to_string()
    }
}

/// Structural type of a JSON value.
pub fn ts_type(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => {
            let mut types: Vec<String> = Vec::new();
            for item in items {
                let t = ts_type(item);
                if !types.contains(&t) {
                    types.push(t);
                }
            }
            match types.as_slice() {
                [] => "unknown[]".to_string(),
                [single] => format!("{single}[]"),
                _ => format!("({})[]", types.join(" | ")),
            }
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let fields: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", property_key(k), ts_type(v)))
                .collect();
            format!("{{ {} }}", fields.join("; "))
        }
    }
}

fn declare(map: &Map<String, Value>, indent: &str) -> Vec<String> {
    let next = format!("{indent}  ");
    let mut lines = Vec::new();
    for (key, value) in map {
        let key = property_key(key);
        match value {
            Value::Object(token) if is_token(value) => {
                let docs = doc_lines(token);
                if !docs.is_empty() {
                    lines.push(format!("{next}/**"));
                    lines.extend(docs.iter().map(|line| format!("{next} * {line}")));
                    lines.push(format!("{next} */"));
                }
                let token_value = token.get("value").or_else(|| token.get("$value"));
                lines.push(format!("{next}readonly {key}: {{"));
                lines.push(format!(
                    "{next}  readonly value: {};",
                    token_value.map(ts_type).unwrap_or_else(|| "unknown".to_string())
                ));
                if let Some(token_type) = token.get("type").and_then(Value::as_str) {
                    lines.push(format!(
                        "{next}  readonly type: {};",
                        Value::String(token_type.to_string())
                    ));
                }
                lines.push(format!("{next}}};"));
            }
            Value::Object(group) => {
                lines.push(format!("{next}readonly {key}: {{"));
                lines.extend(declare(group, &next));
                lines.push(format!("{next}}};"));
            }
            other => lines.push(format!("{next}readonly {key}: {};", ts_type(other))),
        }
    }
    lines
}

impl Format for DeclarationsFormat {
    fn name(&self) -> &str {
        "typescript/declarations"
    }

    fn description(&self) -> &str {
        "TypeScript declarations for the UMD module"
    }

    fn file_extensions(&self) -> &[&str] {
        &["ts"]
    }

    fn generate(&self, dictionary: &Dictionary, ctx: &FormatContext) -> Result<String, FormatError> {
        let tree = token_tree(dictionary, ctx.convention());
        let mut output = ctx.header();
        output.push_str("declare const _styleDictionary: {\n");
        for line in declare(&tree, "") {
            output.push_str(&line);
            output.push('\n');
        }
        output.push_str(
            "};\n\nexport = _styleDictionary;\nexport as namespace StyleDictionary;\n",
        );
        Ok(output)
    }
}
