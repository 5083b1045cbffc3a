//! Design-token code generation
//!
//!     This crate turns the flattened token list of a design-token build into source artifacts for
//!     every platform the design system ships to: CSS and SCSS custom properties, Android XML
//!     resources and a Compose theme, Swift enums, a JavaScript UMD module with TypeScript
//!     declarations, and a JSON debug dump.
//!
//!     TLDR: For format authors:
//!         - Loading token files and resolving `{reference}` values is not done here. The
//!           dictionary engine hands us an export (see ./dictionary.rs) and we only generate.
//!         - Every generator is a pure function of the dictionary and a FormatContext. No I/O.
//!         - Pair light and dark tokens through ./modes, never by inspecting paths ad hoc.
//!         - Every free-text field (comments, deprecation messages, string literals) goes through
//!           the escaper for its target grammar (./common/escape.rs).
//!         - Each format gets unit tests next to it and an end-to-end test under tests/<area>.
//!
//!     This is a pure lib, that is, it powers the tokens CLI but is shell agnostic: no code here
//!     should suppose a shell environment, be it std printing, env vars etc.
//!
//! Architecture
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── dictionary.rs           # Validated tokens and the reference index
//!     ├── format.rs               # Format trait and FormatContext
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── header.rs               # "Do not edit" file headers per comment grammar
//!     ├── transforms.rs           # Value transforms (hex6, pxToDp, ...)
//!     ├── platforms.rs            # Per-platform build plans
//!     ├── modes                   # Dark-variant detection, mode pairs, mode detection on disk
//!     ├── common                  # Escapers, naming, references, nested tree, legacy aliases
//!     └── formats
//!         ├── css                 # css/* and scss/*
//!         ├── android             # android/* (XML, dimens, Kotlin)
//!         ├── ios                 # ios-swift/*
//!         ├── js                  # javascript/umd-with-modes, typescript/declarations
//!         └── debug               # json/debug
//!
//! Core Algorithms
//!
//!     The hard part is that the same design value exists twice: a light token at
//!     `["color", "bg"]` and a dark token at `["color", "dark", "bg"]`. Generators first reduce
//!     tokens to mode pairs keyed by canonical path (./modes/mod.rs), then either emit them flat
//!     (CSS, XML, flat Swift) or rebuild the nested namespace tree (./common/tree.rs) for Kotlin,
//!     nested Swift and JS.
//!
//!     Where a file asks for output references, a token whose original value was `{color.red}`
//!     is emitted as a reference in the target language (`var(--xpl-color-red)`,
//!     `@color/xpl_color_red`, `Theme.Color.Red`) instead of the resolved literal. References go
//!     through the same mode merge: a reference to a dark variant names the canonical member.
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod common;
pub mod dictionary;
pub mod error;
pub mod format;
pub mod formats;
pub mod header;
pub mod modes;
pub mod platforms;
pub mod registry;
pub mod transforms;

pub use dictionary::{Dictionary, Token, TokenKind};
pub use error::FormatError;
pub use format::{parse_flag, Format, FormatContext, FormatOptions};
pub use modes::detect::{ModeConfig, ModeDetector};
pub use modes::ModeConvention;
pub use platforms::{build_platform, build_platforms, Platform, PlatformPlan, PlatformsConfig};
pub use registry::FormatRegistry;
pub use transforms::ValueTransform;
