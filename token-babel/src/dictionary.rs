//! Token dictionary: the boundary with the external dictionary engine
//!
//!     The engine that loads token files and resolves `{reference}` syntax hands us an export per
//!     (brand, platform) invocation. That export is duck-typed (`value` or `$value`, `type` or
//!     `$type`, `deprecated` as a flag or a message), so it is validated exactly once here into
//!     [`Token`]s. Formats never look at the raw JSON shape.
//!
//!     Export layout:
//!
//!         {
//!           "allTokens": [ { "path": [...], "name": "...", "value": ..., "original": { "value": ... },
//!                            "type": "color", "attributes": { "category": "color" },
//!                            "comment": "...", "deprecated": true, "deprecated_comment": "..." } ],
//!           "tokens": { ...nested tree, used verbatim by the debug dump... }
//!         }

use crate::error::FormatError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Semantic kind of a token, derived from its `type` with `attributes.category` as fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Color,
    Dimension,
    FontSize,
    FontWeight,
    Other,
}

impl TokenKind {
    /// Classifies a token. A recognised `type` wins; otherwise the category decides
    /// (`color` → color, `size` → dimension); anything else is [`TokenKind::Other`].
    pub fn classify(token_type: Option<&str>, category: Option<&str>) -> Self {
        match token_type {
            Some("color") => return TokenKind::Color,
            Some("dimension") => return TokenKind::Dimension,
            Some("fontSize") => return TokenKind::FontSize,
            Some("fontWeight") => return TokenKind::FontWeight,
            _ => {}
        }
        match category {
            Some("color") => TokenKind::Color,
            Some("size") => TokenKind::Dimension,
            _ => TokenKind::Other,
        }
    }

    /// Dimensions and font sizes both carry a numeric size.
    pub fn is_size(self) -> bool {
        matches!(self, TokenKind::Dimension | TokenKind::FontSize)
    }
}

/// One validated design token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub path: Vec<String>,
    pub name: String,
    /// Fully resolved value, ready to emit.
    pub value: Value,
    /// Pre-resolution expression; may contain `{path.to.token}` placeholders.
    pub raw_expression: Option<Value>,
    pub token_type: Option<String>,
    pub category: Option<String>,
    pub kind: TokenKind,
    pub comment: Option<String>,
    pub deprecated: bool,
    pub deprecated_reason: Option<String>,
}

/// Message used when a deprecated token carries no explanation.
pub const DEFAULT_DEPRECATION_MESSAGE: &str = "This token is deprecated.";

impl Token {
    /// Creates a token whose raw expression equals its value.
    pub fn new(path: &[&str], name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        Token {
            path: path.iter().map(|s| s.to_string()).collect(),
            name: name.into(),
            raw_expression: Some(value.clone()),
            value,
            token_type: None,
            category: None,
            kind: TokenKind::Other,
            comment: None,
            deprecated: false,
            deprecated_reason: None,
        }
    }

    pub fn with_type(mut self, token_type: &str) -> Self {
        self.token_type = Some(token_type.to_string());
        self.kind = TokenKind::classify(self.token_type.as_deref(), self.category.as_deref());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self.kind = TokenKind::classify(self.token_type.as_deref(), self.category.as_deref());
        self
    }

    pub fn with_original(mut self, original: impl Into<Value>) -> Self {
        self.raw_expression = Some(original.into());
        self
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn with_deprecation(mut self, reason: Option<&str>) -> Self {
        self.deprecated = true;
        self.deprecated_reason = reason.map(str::to_string);
        self
    }

    /// The resolved value as emit-ready text: strings verbatim, everything else as JSON.
    pub fn value_text(&self) -> String {
        value_text(&self.value)
    }

    /// The raw expression when it is a string (the only shape that can hold placeholders).
    pub fn raw_str(&self) -> Option<&str> {
        self.raw_expression.as_ref().and_then(Value::as_str)
    }

    /// Explanation for a deprecated token, falling back to [`DEFAULT_DEPRECATION_MESSAGE`].
    /// Returns `None` for tokens that are not deprecated.
    pub fn deprecation_message(&self) -> Option<&str> {
        if !self.deprecated {
            return None;
        }
        Some(
            self.deprecated_reason
                .as_deref()
                .filter(|r| !r.is_empty())
                .unwrap_or(DEFAULT_DEPRECATION_MESSAGE),
        )
    }

    /// The dotted key used by `{…}` placeholders.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    /// JSON object view of the token, as the JS outputs and the synthesized debug tree expose it.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("value".to_string(), self.value.clone());
        if let Some(t) = &self.token_type {
            obj.insert("type".to_string(), Value::String(t.clone()));
        }
        if let Some(comment) = &self.comment {
            obj.insert("comment".to_string(), Value::String(comment.clone()));
        }
        if self.deprecated {
            obj.insert("deprecated".to_string(), Value::Bool(true));
            if let Some(reason) = &self.deprecated_reason {
                obj.insert(
                    "deprecated_comment".to_string(),
                    Value::String(reason.clone()),
                );
            }
        }
        obj.insert("name".to_string(), Value::String(self.name.clone()));
        obj.insert(
            "path".to_string(),
            Value::Array(self.path.iter().cloned().map(Value::String).collect()),
        );
        if let Some(original) = &self.raw_expression {
            let mut o = Map::new();
            o.insert("value".to_string(), original.clone());
            obj.insert("original".to_string(), Value::Object(o));
        }
        if let Some(category) = &self.category {
            let mut a = Map::new();
            a.insert("category".to_string(), Value::String(category.clone()));
            obj.insert("attributes".to_string(), Value::Object(a));
        }
        Value::Object(obj)
    }
}

/// Text form of a JSON value: strings without quotes, everything else serialized.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct RawExport {
    #[serde(rename = "allTokens", default)]
    all_tokens: Vec<RawToken>,
    #[serde(default)]
    tokens: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawOriginal {
    value: Option<Value>,
    #[serde(rename = "$value")]
    dollar_value: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAttributes {
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawToken {
    #[serde(default)]
    path: Vec<String>,
    name: Option<String>,
    value: Option<Value>,
    #[serde(rename = "$value")]
    dollar_value: Option<Value>,
    #[serde(default)]
    original: RawOriginal,
    #[serde(rename = "type")]
    token_type: Option<String>,
    #[serde(rename = "$type")]
    dollar_type: Option<String>,
    #[serde(default)]
    attributes: RawAttributes,
    comment: Option<String>,
    #[serde(rename = "$description")]
    description: Option<String>,
    deprecated: Option<Value>,
    deprecated_comment: Option<String>,
}

impl TryFrom<RawToken> for Token {
    type Error = FormatError;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        let name = raw.name.unwrap_or_else(|| raw.path.join("-"));
        let value = raw
            .value
            .or(raw.dollar_value)
            .ok_or_else(|| FormatError::InvalidToken {
                name: name.clone(),
                reason: "token has neither `value` nor `$value`".to_string(),
            })?;

        let (deprecated, message) = match raw.deprecated {
            Some(Value::Bool(flag)) => (flag, None),
            Some(Value::String(msg)) => (true, Some(msg)),
            _ => (false, None),
        };

        let token_type = raw.token_type.or(raw.dollar_type);
        let category = raw.attributes.category;
        let kind = TokenKind::classify(token_type.as_deref(), category.as_deref());

        Ok(Token {
            path: raw.path,
            name,
            raw_expression: raw.original.value.or(raw.original.dollar_value),
            value,
            kind,
            token_type,
            category,
            comment: raw.comment.or(raw.description),
            deprecated,
            deprecated_reason: raw.deprecated_comment.or(message),
        })
    }
}

/// The flattened token list of one build, plus everything references resolve against.
///
/// Filtering a dictionary (per output file) keeps the full reference index and nested tree, so a
/// file that only contains semantic colors can still reference palette colors.
#[derive(Debug, Clone)]
pub struct Dictionary {
    tokens: Vec<Token>,
    references: Arc<HashMap<String, Token>>,
    tree: Arc<Value>,
}

impl Dictionary {
    /// Builds a dictionary from tokens; the nested tree is synthesized from their paths.
    pub fn new(tokens: Vec<Token>) -> Self {
        let tree = synthesize_tree(&tokens);
        Self::with_tree(tokens, tree)
    }

    /// Builds a dictionary with an explicit nested tree (as supplied by the engine).
    pub fn with_tree(tokens: Vec<Token>, tree: Value) -> Self {
        let references = index_tokens(&tokens);
        Dictionary {
            tokens,
            references: Arc::new(references),
            tree: Arc::new(tree),
        }
    }

    /// Parses a dictionary export.
    pub fn from_json(source: &str) -> Result<Self, FormatError> {
        let raw: RawExport =
            serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
        let tokens = raw
            .all_tokens
            .into_iter()
            .map(Token::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = tokens.len(), "loaded dictionary export");
        Ok(match raw.tokens {
            Some(tree) => Self::with_tree(tokens, tree),
            None => Self::new(tokens),
        })
    }

    pub fn all_tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The pre-flattening nested token tree.
    pub fn tree(&self) -> &Value {
        &self.tree
    }

    /// Looks up a referenced token by its dotted placeholder path.
    pub fn lookup(&self, dotted: &str) -> Option<&Token> {
        self.references.get(dotted)
    }

    /// A dictionary restricted to the tokens matching `keep`, sharing references and tree.
    pub fn filtered(&self, keep: impl Fn(&Token) -> bool) -> Dictionary {
        Dictionary {
            tokens: self.tokens.iter().filter(|t| keep(t)).cloned().collect(),
            references: Arc::clone(&self.references),
            tree: Arc::clone(&self.tree),
        }
    }

    /// Rewrites every token in place and rebuilds the reference index.
    pub fn map_tokens(&mut self, mut f: impl FnMut(&mut Token)) {
        for token in &mut self.tokens {
            f(token);
        }
        self.references = Arc::new(index_tokens(&self.tokens));
    }
}

fn index_tokens(tokens: &[Token]) -> HashMap<String, Token> {
    tokens
        .iter()
        .map(|t| (t.dotted_path(), t.clone()))
        .collect()
}

fn synthesize_tree(tokens: &[Token]) -> Value {
    let mut root = Map::new();
    for token in tokens {
        let Some((leaf, parents)) = token.path.split_last() else {
            continue;
        };
        let mut current = &mut root;
        for segment in parents {
            let slot = current
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            current = match slot {
                Value::Object(map) => map,
                _ => unreachable!("slot was just made an object"),
            };
        }
        current.insert(leaf.clone(), token.to_json());
    }
    Value::Object(root)
}
