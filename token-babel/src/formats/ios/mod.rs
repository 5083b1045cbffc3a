//! Swift formats
//!
//!     Two layouts of the same tokens:
//!
//!     - `ios-swift/enum-with-modes-legacy` ([`flat`]): one flat enum of camel-case members
//!       (`StyleDictionaryColor.xplColorRed500`), plus a SwiftUI `Color` extension and deprecated
//!       aliases for the names used before the `Color`/`Size` infix was introduced.
//!     - `ios-swift/enum-with-modes` ([`nested`]): nested enums mirroring the token paths
//!       (`Theme.Color.Red._500`).
//!
//!     In both, a token with light and dark color variants becomes a dynamic `UIColor` that
//!     switches on the trait collection.

pub mod flat;
pub mod nested;

pub use flat::FlatEnumFormat;
pub use nested::NestedEnumFormat;

use crate::common::escape;

const IMPORTS: &str = "import UIKit\nimport SwiftUI\n\n";

/// `@available(*, deprecated, message: "...")` at `indent`.
fn deprecation_attribute(indent: &str, message: &str) -> String {
    format!(
        "{indent}@available(*, deprecated, message: \"{}\")\n",
        escape::swift_string(message)
    )
}

/// A trait-collection switched `UIColor` member.
fn dynamic_color(indent: &str, name: &str, light: &str, dark: &str) -> String {
    format!(
        "{indent}public static let {name} = UIColor {{ traitCollection in\n\
         {indent}    return traitCollection.userInterfaceStyle == .dark ? {dark} : {light}\n\
         {indent}}}"
    )
}
