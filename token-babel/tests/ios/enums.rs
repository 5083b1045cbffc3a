use token_babel::transforms::{apply_all, ValueTransform};
use token_babel::{Dictionary, FormatContext, FormatRegistry, Token};

fn render(dict: &Dictionary, format: &str, ctx: &FormatContext) -> String {
    FormatRegistry::default().generate(dict, format, ctx).unwrap()
}

#[test]
fn nested_theme_with_transformed_values() {
    let mut dict = Dictionary::new(vec![
        Token::new(&["color", "bg"], "xplColorBg", "#ffffff").with_type("color"),
        Token::new(&["color", "dark", "bg"], "xplColorDarkBg", "#000000").with_type("color"),
        Token::new(&["size", "spacing", "0"], "xplSizeSpacing0", 0).with_type("dimension"),
    ]);
    apply_all(
        &mut dict,
        &[ValueTransform::UiColorSwift, ValueTransform::PxToCgFloat],
    );
    let ctx = FormatContext::new("Theme.swift").with_class_name("Theme");
    let out = render(&dict, "ios-swift/enum-with-modes", &ctx);

    assert_eq!(
        out,
        "//\n// Do not edit directly, this file was auto-generated.\n//\n\n\
         import UIKit\nimport SwiftUI\n\n\
         public enum Theme {\n\
         \x20   public enum Color {\n\
         \x20       public static let bg = UIColor { traitCollection in\n\
         \x20           return traitCollection.userInterfaceStyle == .dark ? \
         UIColor(red: 0.000, green: 0.000, blue: 0.000, alpha: 1) : \
         UIColor(red: 1.000, green: 1.000, blue: 1.000, alpha: 1)\n\
         \x20       }\n\
         \x20   }\n\
         \x20   public enum Size {\n\
         \x20       public enum Spacing {\n\
         \x20           public static let _0 = CGFloat(0.00)\n\
         \x20       }\n\
         \x20   }\n\
         }\n"
    );
}

#[test]
fn deprecation_messages_are_swift_strings() {
    let dict = Dictionary::new(vec![Token::new(&["color", "old"], "xplColorOld", "UIColor.red")
        .with_type("color")
        .with_deprecation(Some("Use \"primary\"\ninstead"))]);
    let ctx = FormatContext::new("Theme.swift").with_header(false);
    let out = render(&dict, "ios-swift/enum-with-modes", &ctx);
    assert!(out.contains(
        "        @available(*, deprecated, message: \"Use \\\"primary\\\"\\ninstead\")\n        public static let old = UIColor.red\n"
    ));
}

#[test]
fn legacy_color_enum_bridges_to_swiftui() {
    let dict = Dictionary::new(vec![
        Token::new(&["color", "bg"], "xplColorBg", "UIColor.white").with_type("color"),
        Token::new(&["color", "dark", "bg"], "xplColorDarkBg", "UIColor.black").with_type("color"),
    ]);
    let ctx = FormatContext::new("StyleDictionaryColor.swift")
        .with_header(false)
        .with_class_name("StyleDictionaryColor");
    let out = render(&dict, "ios-swift/enum-with-modes-legacy", &ctx);

    assert!(out.starts_with("import UIKit\nimport SwiftUI\n\npublic enum StyleDictionaryColor {\n"));
    assert!(out.contains("? UIColor.black : UIColor.white\n    }\n"));
    assert!(out.contains("extension Color {\n    public static let xplColorBg = Color(StyleDictionaryColor.xplColorBg)\n"));
    assert!(!out.contains("xplColorDarkBg"));
}

#[test]
fn size_enum_has_no_swiftui_extension() {
    let dict = Dictionary::new(vec![Token::new(
        &["size", "spacing", "m"],
        "xplSizeSpacingM",
        "CGFloat(16.00)",
    )
    .with_type("dimension")]);
    let ctx = FormatContext::new("StyleDictionaryFont.swift")
        .with_header(false)
        .with_class_name("StyleDictionarySize");
    let out = render(&dict, "ios-swift/enum-with-modes-legacy", &ctx);
    assert!(out.contains("    public static let xplSizeSpacingM = CGFloat(16.00)\n"));
    assert!(!out.contains("extension Color"));
}

#[test]
fn reserved_words_are_backticked() {
    let dict = Dictionary::new(vec![
        Token::new(&["size", "radius", "default"], "xplSizeRadiusDefault", "CGFloat(4.00)")
            .with_type("dimension"),
        Token::new(&["color", "text", "case"], "xplColorTextCase", "UIColor.red")
            .with_type("color"),
    ]);
    let ctx = FormatContext::new("Theme.swift")
        .with_header(false)
        .with_class_name("Theme");
    let out = render(&dict, "ios-swift/enum-with-modes", &ctx);

    assert!(out.contains("            public static let `case` = UIColor.red\n"));
    assert!(out.contains("            public static let `default` = CGFloat(4.00)\n"));
    assert!(!out.contains("let default"));
    assert!(!out.contains("let case"));
}
