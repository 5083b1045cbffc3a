use token_babel::{Dictionary, FormatContext, FormatRegistry, Token};

fn render(dict: &Dictionary, ctx: &FormatContext) -> String {
    FormatRegistry::default()
        .generate(dict, "android/kotlin-theme", ctx)
        .unwrap()
}

fn ctx() -> FormatContext {
    FormatContext::new("Theme.kt")
        .with_header(false)
        .with_class_name("ApolloTheme")
        .with_package_name("com.xplor.apollo.design")
}

#[test]
fn theme_object_mirrors_the_token_tree() {
    let dict = Dictionary::new(vec![
        Token::new(&["color", "bg"], "bg", "#ffffff").with_type("color"),
        Token::new(&["color", "dark", "bg"], "bgDark", "#000000").with_type("color"),
        Token::new(&["size", "spacing", "m"], "m", 16).with_type("dimension"),
        Token::new(&["size", "font", "body"], "body", "14").with_type("fontSize"),
    ]);
    let out = render(&dict, &ctx());

    assert!(out.starts_with("package com.xplor.apollo.design\n\nimport androidx.compose.foundation.isSystemInDarkTheme\n"));
    assert!(out.contains(
        "object ApolloTheme {\n    object Color {\n        val bg: ComposeColor\n            @Composable get() = if (isSystemInDarkTheme()) \"#000000\".toColor() else \"#ffffff\".toColor()\n    }\n"
    ));
    assert!(out.contains("    object Size {\n        object Font {\n            val body = 14.sp\n        }\n        object Spacing {\n            val m = 16.dp\n        }\n    }\n"));
    assert!(out.ends_with("}\n"));
}

#[test]
fn string_templates_are_escaped() {
    let dict = Dictionary::new(vec![
        Token::new(&["font", "family", "brand"], "brand", "Brand$Sans"),
        Token::new(&["font", "family", "quote"], "quote", "say \"hi\""),
    ]);
    let out = render(&dict, &ctx());
    assert!(out.contains("val brand = \"Brand\\$Sans\""));
    assert!(out.contains("val quote = \"say \\\"hi\\\"\""));
}

#[test]
fn digit_segments_become_identifiers() {
    let dict = Dictionary::new(vec![
        Token::new(&["space", "0"], "s0", 0).with_type("dimension"),
        Token::new(&["color", "red", "500"], "r500", "#ff0000").with_type("color"),
    ]);
    let out = render(&dict, &ctx());
    assert!(out.contains("val _0 = 0.dp"));
    assert!(out.contains("val _500: ComposeColor = \"#ff0000\".toColor()"));
}

#[test]
fn deprecated_members_carry_the_annotation() {
    let dict = Dictionary::new(vec![Token::new(&["color", "old"], "old", "#123456")
        .with_type("color")
        .with_deprecation(Some("Use \"primary\" instead"))
        .with_comment("Legacy */ color")]);
    let out = render(&dict, &ctx());
    assert!(out.contains(
        "        /** Legacy * / color */\n        @Deprecated(\"Use \\\"primary\\\" instead\")\n        val old: ComposeColor = \"#123456\".toColor()\n"
    ));
}

#[test]
fn reserved_words_are_backticked() {
    let dict = Dictionary::new(vec![
        Token::new(&["size", "inset", "in"], "i", 4).with_type("dimension"),
        Token::new(&["size", "object", "is"], "o", 8).with_type("dimension"),
    ]);
    let out = render(&dict, &ctx());

    assert!(out.contains("        object Inset {\n            val `in` = 4.dp\n        }\n"));
    assert!(out.contains("        object Object {\n            val `is` = 8.dp\n        }\n"));
}
