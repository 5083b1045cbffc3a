//! Format-agnostic building blocks shared by the generators
//!
//!     - escape: per-grammar escaping of free text
//!     - naming: identifier rules (PascalCase, camelCase, Android resource names)
//!     - references: `{a.b.c}` placeholder rewriting
//!     - tree: nested container view of grouped tokens
//!     - legacy: backwards-compatible aliases

pub mod escape;
pub mod legacy;
pub mod naming;
pub mod references;
pub mod tree;
