//! Format implementations
//!
//! This module contains every generator, grouped by target platform.

pub mod android;
pub mod css;
pub mod debug;
pub mod ios;
pub mod js;

pub use android::{DimensFormat, KotlinThemeFormat, ResourceMode, ResourcesFormat};
pub use css::{DarkSelector, Stylesheet, VariablesFormat};
pub use debug::DebugFormat;
pub use ios::{FlatEnumFormat, NestedEnumFormat};
pub use js::{DeclarationsFormat, UmdFormat};
