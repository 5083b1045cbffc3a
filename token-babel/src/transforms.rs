//! Value transforms
//!
//! Applied to a dictionary before any format runs, once per platform. Each transform targets one
//! token kind and rewrites its resolved value; values it cannot interpret pass through unchanged.

use crate::dictionary::{Dictionary, Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static HEX8: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{6})([0-9a-fA-F]{2})$").unwrap());

static LEADING_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueTransform {
    /// `#rrggbbff` → `#rrggbb`, other alphas → `rgba(r, g, b, a)`.
    Hex6,
    /// Dimension → `16.00dp`.
    PxToDp,
    /// Font size → `16.00sp`.
    PxToSp,
    /// Dimension or font size → `CGFloat(16.00)`.
    PxToCgFloat,
    /// Hex color → `#aarrggbb`, the Android resource ordering.
    Hex8Android,
    /// Hex color → `UIColor(red: 1.000, green: 1.000, blue: 1.000, alpha: 1)`.
    UiColorSwift,
}

impl ValueTransform {
    pub const ALL: [ValueTransform; 6] = [
        ValueTransform::Hex6,
        ValueTransform::PxToDp,
        ValueTransform::PxToSp,
        ValueTransform::PxToCgFloat,
        ValueTransform::Hex8Android,
        ValueTransform::UiColorSwift,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ValueTransform::Hex6 => "color/hex6",
            ValueTransform::PxToDp => "size/pxToDp",
            ValueTransform::PxToSp => "size/pxToSp",
            ValueTransform::PxToCgFloat => "size/pxToCGFloat",
            ValueTransform::Hex8Android => "color/hex8android",
            ValueTransform::UiColorSwift => "color/UIColorSwift",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn applies_to(&self, token: &Token) -> bool {
        match self {
            ValueTransform::Hex6 | ValueTransform::Hex8Android | ValueTransform::UiColorSwift => {
                token.kind == TokenKind::Color
            }
            ValueTransform::PxToDp => token.kind == TokenKind::Dimension,
            ValueTransform::PxToSp => token.kind == TokenKind::FontSize,
            ValueTransform::PxToCgFloat => token.kind.is_size(),
        }
    }

    pub fn apply(&self, value: &Value) -> Value {
        match self {
            ValueTransform::Hex6 => match value.as_str() {
                Some(s) => Value::String(hex6(s)),
                None => value.clone(),
            },
            ValueTransform::PxToDp => map_number(value, |n| format!("{n:.2}dp")),
            ValueTransform::PxToSp => map_number(value, |n| format!("{n:.2}sp")),
            ValueTransform::PxToCgFloat => map_number(value, |n| format!("CGFloat({n:.2})")),
            ValueTransform::Hex8Android => map_hex(value, |[r, g, b, a]| {
                format!("#{a:02x}{r:02x}{g:02x}{b:02x}")
            }),
            ValueTransform::UiColorSwift => map_hex(value, |[r, g, b, a]| {
                let channel = |c: u8| f64::from(c) / 255.0;
                let alpha = (channel(a) * 100.0).round() / 100.0;
                format!(
                    "UIColor(red: {:.3}, green: {:.3}, blue: {:.3}, alpha: {alpha})",
                    channel(r),
                    channel(g),
                    channel(b)
                )
            }),
        }
    }
}

/// Applies `transforms` in order to every token they target.
pub fn apply_all(dictionary: &mut Dictionary, transforms: &[ValueTransform]) {
    if transforms.is_empty() {
        return;
    }
    dictionary.map_tokens(|token| {
        for transform in transforms {
            if transform.applies_to(token) {
                token.value = transform.apply(&token.value);
            }
        }
    });
}

/// The longest leading decimal number of `text`, the way `parseFloat` reads it (`"16px"` → 16).
pub fn parse_leading_float(text: &str) -> Option<f64> {
    LEADING_FLOAT
        .find(text)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
}

/// Numeric reading of a token value: numbers as-is, strings by their leading float.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_float(s),
        _ => None,
    }
}

fn map_number(value: &Value, format: impl Fn(f64) -> String) -> Value {
    match numeric_value(value) {
        Some(n) => Value::String(format(n)),
        None => value.clone(),
    }
}

/// RGBA channels of `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
fn parse_hex(color: &str) -> Option<[u8; 4]> {
    let digits = color.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return None,
    };
    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    let alpha = if expanded.len() == 8 { byte(6)? } else { 255 };
    Some([byte(0)?, byte(2)?, byte(4)?, alpha])
}

fn map_hex(value: &Value, format: impl Fn([u8; 4]) -> String) -> Value {
    match value.as_str().and_then(parse_hex) {
        Some(rgba) => Value::String(format(rgba)),
        None => value.clone(),
    }
}

fn hex6(color: &str) -> String {
    let Some(caps) = HEX8.captures(color) else {
        return color.to_string();
    };
    let rgb = &caps[1];
    let alpha = &caps[2];
    if alpha.eq_ignore_ascii_case("ff") {
        return format!("#{rgb}");
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or_default();
    let red = channel(&rgb[0..2]);
    let green = channel(&rgb[2..4]);
    let blue = channel(&rgb[4..6]);
    let alpha = (f64::from(channel(alpha)) / 255.0 * 100.0).round() / 100.0;
    format!("rgba({red}, {green}, {blue}, {alpha})")
}
