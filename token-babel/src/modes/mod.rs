//! Light/dark mode handling
//!
//!     Dark variants of a token live in the same dictionary as their light counterparts, marked by
//!     a literal `dark` path segment. Where that segment sits depends on how the token sources are
//!     organized, so the position is a [`ModeConvention`]:
//!
//!         second-segment   color.dark.background.primary  →  color.background.primary
//!         penultimate      color.background.dark.primary  →  color.background.primary
//!
//!     A `dark` segment anywhere else (including the final segment, as in `color.background.dark`)
//!     is an ordinary name. At most one segment is ever removed, so stripping is idempotent for
//!     paths carrying a single `dark` segment.
//!
//!     [`group`] pairs light and dark tokens that share a canonical path into [`ModePair`]s, keyed by
//!     the segment vector itself so that segments containing dots never collide.

pub mod detect;

use crate::dictionary::Token;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The mode variant marker segment.
pub const DARK_MARKER: &str = "dark";

/// Where the `dark` marker segment is recognised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeConvention {
    /// `dark` at index 1, directly after the top-level category.
    #[default]
    SecondSegment,
    /// `dark` immediately before the final segment.
    Penultimate,
}

impl ModeConvention {
    pub fn name(&self) -> &'static str {
        match self {
            ModeConvention::SecondSegment => "second-segment",
            ModeConvention::Penultimate => "penultimate",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "second-segment" => Some(ModeConvention::SecondSegment),
            "penultimate" => Some(ModeConvention::Penultimate),
            _ => None,
        }
    }

    /// Index of the marker segment in `path`, if the path carries one under this convention.
    pub fn marker_index(&self, path: &[String]) -> Option<usize> {
        let index = match self {
            ModeConvention::SecondSegment if path.len() >= 3 => 1,
            ModeConvention::Penultimate if path.len() >= 2 => path.len() - 2,
            _ => return None,
        };
        (path[index] == DARK_MARKER).then_some(index)
    }

    /// `path` with the marker segment removed.
    pub fn strip(&self, path: &[String]) -> Vec<String> {
        match self.marker_index(path) {
            Some(index) => path
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, s)| s.clone())
                .collect(),
            None => path.to_vec(),
        }
    }
}

/// Whether `token` is the dark variant of some canonical token.
pub fn is_dark_variant(token: &Token, convention: ModeConvention) -> bool {
    convention.marker_index(&token.path).is_some()
}

/// The token's path with the mode marker removed.
pub fn canonical_path(token: &Token, convention: ModeConvention) -> Vec<String> {
    convention.strip(&token.path)
}

/// The light and/or dark variant of one canonical token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModePair<'a> {
    Light(&'a Token),
    Dark(&'a Token),
    Both { light: &'a Token, dark: &'a Token },
}

impl<'a> ModePair<'a> {
    pub fn light(&self) -> Option<&'a Token> {
        match *self {
            ModePair::Light(t) | ModePair::Both { light: t, .. } => Some(t),
            ModePair::Dark(_) => None,
        }
    }

    pub fn dark(&self) -> Option<&'a Token> {
        match *self {
            ModePair::Dark(t) | ModePair::Both { dark: t, .. } => Some(t),
            ModePair::Light(_) => None,
        }
    }

    /// Light if present, else dark.
    pub fn primary(&self) -> &'a Token {
        match *self {
            ModePair::Light(t) | ModePair::Dark(t) => t,
            ModePair::Both { light, .. } => light,
        }
    }

    /// Dark if present, else light.
    pub fn dark_first(&self) -> &'a Token {
        match *self {
            ModePair::Light(t) | ModePair::Dark(t) => t,
            ModePair::Both { dark, .. } => dark,
        }
    }

    pub fn is_dark_only(&self) -> bool {
        matches!(self, ModePair::Dark(_))
    }

    /// True when either side is deprecated.
    pub fn deprecated(&self) -> bool {
        self.light().is_some_and(|t| t.deprecated) || self.dark().is_some_and(|t| t.deprecated)
    }

    /// Deprecation message of the light side, else the dark side, else the default message.
    pub fn deprecation_message(&self) -> Option<&'a str> {
        if !self.deprecated() {
            return None;
        }
        let reason = |t: Option<&'a Token>| {
            t.and_then(|t| t.deprecated_reason.as_deref())
                .filter(|r| !r.is_empty())
        };
        Some(
            reason(self.light())
                .or_else(|| reason(self.dark()))
                .unwrap_or(crate::dictionary::DEFAULT_DEPRECATION_MESSAGE),
        )
    }

    fn with_light(slot: Option<Self>, light: &'a Token) -> Self {
        match slot.and_then(|p| p.dark()) {
            Some(dark) => ModePair::Both { light, dark },
            None => ModePair::Light(light),
        }
    }

    fn with_dark(slot: Option<Self>, dark: &'a Token) -> Self {
        match slot.and_then(|p| p.light()) {
            Some(light) => ModePair::Both { light, dark },
            None => ModePair::Dark(dark),
        }
    }
}

/// Mode pairs keyed by canonical path, iterated in lexicographic segment order.
#[derive(Debug, Clone, Default)]
pub struct ModeGroups<'a> {
    groups: BTreeMap<Vec<String>, ModePair<'a>>,
}

impl<'a> ModeGroups<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (&Vec<String>, &ModePair<'a>)> {
        self.groups.iter()
    }

    pub fn get(&self, canonical: &[String]) -> Option<&ModePair<'a>> {
        self.groups.get(canonical)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Groups tokens into light/dark pairs. A later token replaces an earlier one in the same slot.
pub fn group<'a>(tokens: &'a [Token], convention: ModeConvention) -> ModeGroups<'a> {
    let mut groups: BTreeMap<Vec<String>, ModePair<'a>> = BTreeMap::new();
    for token in tokens {
        let key = canonical_path(token, convention);
        let slot = groups.remove(&key);
        if slot.is_some_and(|p| {
            if is_dark_variant(token, convention) {
                p.dark().is_some()
            } else {
                p.light().is_some()
            }
        }) {
            tracing::debug!(path = %key.join("."), "duplicate mode slot, last token wins");
        }
        let pair = if is_dark_variant(token, convention) {
            ModePair::with_dark(slot, token)
        } else {
            ModePair::with_light(slot, token)
        };
        groups.insert(key, pair);
    }
    ModeGroups { groups }
}
