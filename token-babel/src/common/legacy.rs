//! Backwards-compatible aliases kept through the token naming migration

use regex::RegexBuilder;

/// A retired variable name and the name that replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyAlias {
    pub legacy: &'static str,
    pub current: &'static str,
    pub comment: Option<&'static str>,
}

/// Every alias emitted by the CSS and SCSS outputs.
pub static LEGACY_ALIASES: &[LegacyAlias] = &[LegacyAlias {
    legacy: "xpl-color-transparent",
    current: "xpl-color-transparent-0",
    comment: Some("Backwards-compatible alias. Use --xpl-color-transparent-0 instead."),
}];

/// Which infix the Swift legacy names dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwiftInfix {
    Color,
    Size,
}

impl SwiftInfix {
    /// Color files are recognised by their class name.
    pub fn for_class_name(class_name: &str) -> Self {
        if class_name.to_lowercase().contains("color") {
            SwiftInfix::Color
        } else {
            SwiftInfix::Size
        }
    }

    fn word(&self) -> &'static str {
        match self {
            SwiftInfix::Color => "Color",
            SwiftInfix::Size => "Size",
        }
    }
}

/// Pre-migration Swift member names for `name`: `xplColorRed500` → `xplRed500`.
///
/// `xplColorTransparent0` additionally yields the bare `xplTransparent`.
pub fn swift_legacy_names(name: &str, prefix: &str, infix: SwiftInfix) -> Vec<String> {
    let source = format!("^({})({})(.+)$", regex::escape(prefix), infix.word());
    let Ok(pattern) = RegexBuilder::new(&source).case_insensitive(true).build() else {
        return Vec::new();
    };

    let Some(caps) = pattern.captures(name) else {
        return Vec::new();
    };
    let legacy = format!("{}{}", &caps[1], &caps[3]);
    if legacy == name {
        return Vec::new();
    }

    let mut names = vec![legacy];
    if names[0] == format!("{prefix}Transparent0") {
        names.push(format!("{prefix}Transparent"));
    }
    names
}
