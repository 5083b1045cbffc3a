//! Identifier rules for generated source
//!
//! Path segments are arbitrary strings (`500`, `1.5rem`, `background-primary`). Every target
//! language needs them as identifiers, so segments are split into ASCII alphanumeric words,
//! recased, and given a leading `_` when they would otherwise start with a digit. A segment with
//! no usable characters becomes `Unknown` / `unknown`. Names that collide with a reserved word of
//! the target language are wrapped in backticks by [`swift_identifier`] / [`kotlin_identifier`].

const SWIFT_KEYWORDS: &[&str] = &[
    "Any", "Protocol", "Self", "Type", "as", "associatedtype", "await", "break", "case", "catch",
    "class", "continue", "default", "defer", "deinit", "do", "else", "enum", "extension",
    "fallthrough", "false", "fileprivate", "for", "func", "guard", "if", "import", "in", "init",
    "inout", "internal", "is", "let", "nil", "open", "operator", "precedencegroup", "private",
    "protocol", "public", "repeat", "rethrows", "return", "self", "static", "struct", "subscript",
    "super", "switch", "throw", "throws", "true", "try", "typealias", "var", "where", "while",
];

const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

fn quote_reserved(name: &str, keywords: &[&str]) -> String {
    if keywords.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

/// `default` → `` `default` ``; anything else unchanged.
pub fn swift_identifier(name: &str) -> String {
    quote_reserved(name, SWIFT_KEYWORDS)
}

/// `in` → `` `in` ``; anything else unchanged.
pub fn kotlin_identifier(name: &str) -> String {
    quote_reserved(name, KOTLIN_KEYWORDS)
}

/// Splits on anything that is not ASCII alphanumeric.
fn words(segment: &str) -> impl Iterator<Item = &str> {
    segment
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Splits on non-alphanumerics and on lower-to-upper case boundaries (`backgroundPrimary`).
fn case_words(segment: &str) -> Vec<String> {
    let mut out = Vec::new();
    for word in words(segment) {
        let mut current = String::new();
        let mut previous: Option<char> = None;
        for c in word.chars() {
            if c.is_ascii_uppercase()
                && previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
            {
                out.push(std::mem::take(&mut current));
            }
            current.push(c);
            previous = Some(c);
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// `background-primary` → `BackgroundPrimary`, `0` → `_0`.
pub fn pascal_case(segment: &str) -> String {
    let joined: String = words(segment).map(capitalize).collect();
    if joined.is_empty() {
        return "Unknown".to_string();
    }
    if joined.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{joined}")
    } else {
        joined
    }
}

/// `background-primary` → `backgroundPrimary`, `500` → `_500`.
pub fn camel_case(segment: &str) -> String {
    let pascal = pascal_case(segment);
    if pascal.starts_with('_') {
        return pascal;
    }
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => pascal,
    }
}

/// Flat camel-case member name over several parts: `["xpl", "color", "red", "500"]` → `xplColorRed500`.
pub fn flat_camel_name<S: AsRef<str>>(parts: &[S]) -> String {
    let mut out = String::new();
    for word in parts.iter().flat_map(|p| case_words(p.as_ref())) {
        let lower = word.to_ascii_lowercase();
        if out.is_empty() {
            out.push_str(&lower);
        } else {
            out.push_str(&capitalize(&lower));
        }
    }
    if out.is_empty() {
        "unknown".to_string()
    } else {
        out
    }
}

/// Kebab-case name over several parts: `["xpl", "color", "backgroundPrimary"]` → `xpl-color-background-primary`.
pub fn kebab_name<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .flat_map(|p| case_words(p.as_ref()))
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Android resource name: segments joined by `_`, lowercased, anything outside `[a-z0-9_]`
/// replaced with `_`, then prefixed.
pub fn android_resource_name<S: AsRef<str>>(path: &[S], prefix: Option<&str>) -> String {
    let joined = path
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    let name: String = joined
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}_{name}"),
        _ => name,
    }
}

/// Fully-qualified member of a nested enum/object tree, each part passed through `identifier`:
/// `("Theme", ["color", "red", "500"])` → `Theme.Color.Red._500`.
pub fn nested_reference<S: AsRef<str>>(
    root: &str,
    canonical: &[S],
    identifier: fn(&str) -> String,
) -> String {
    let Some((last, parents)) = canonical.split_last() else {
        return root.to_string();
    };
    let mut parts = vec![root.to_string()];
    parts.extend(parents.iter().map(|s| identifier(&pascal_case(s.as_ref()))));
    parts.push(identifier(&camel_case(last.as_ref())));
    parts.join(".")
}
