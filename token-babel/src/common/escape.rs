//! Escapers for free text embedded in generated source
//!
//! Each escaper targets one grammar and is applied to a single field value (a comment, a
//! deprecation message, a string literal body), never to an assembled document.

/// Breaks up runs of `-` so the text is legal inside `<!-- -->`: `---` becomes `- - -`.
pub fn xml_comment(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_dash = false;
    for c in text.chars() {
        if c == '-' && previous_dash {
            out.push(' ');
        }
        previous_dash = c == '-';
        out.push(c);
    }
    out
}

/// Entity-escapes XML text and attribute values.
pub fn xml_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Neutralizes `*/` inside a `/* */` or `/** */` comment (Kotlin, JS, TS, CSS).
pub fn block_comment(text: &str) -> String {
    text.replace("*/", "* /")
}

/// Escapes the body of a Kotlin `"..."` literal, including `$` templates.
pub fn kotlin_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes the body of a Swift `"..."` literal.
pub fn swift_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Swift block comments nest, so both `/*` and `*/` are broken up.
pub fn swift_comment(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        match (c, chars.peek()) {
            ('/', Some('*')) | ('*', Some('/')) => out.push(' '),
            _ => {}
        }
    }
    out
}

/// Line comments only need to stay on one line.
pub fn line_comment(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
