//! End-to-end CSS/SCSS rendering through the registry.

use insta::assert_snapshot;
use token_babel::modes::ModeConvention;
use token_babel::transforms::{apply_all, ValueTransform};
use token_babel::{Dictionary, FormatContext, FormatRegistry, Token};

fn dictionary() -> Dictionary {
    Dictionary::new(vec![
        Token::new(&["color", "white"], "xpl-color-white", "#ffffff").with_type("color"),
        Token::new(
            &["color", "background", "primary"],
            "xpl-color-background-primary",
            "#ffffff",
        )
        .with_type("color")
        .with_original("{color.white}"),
        Token::new(
            &["color", "dark", "background", "primary"],
            "xpl-color-dark-background-primary",
            "#111111",
        )
        .with_type("color")
        .with_comment("Page background"),
    ])
}

#[test]
fn class_mode_stylesheet() {
    let registry = FormatRegistry::default();
    let ctx = FormatContext::new("variables.css").with_output_references(true);
    let out = registry
        .generate(&dictionary(), "css/variables-class-mode", &ctx)
        .unwrap();

    assert_snapshot!(out, @r#"
/**
 * Do not edit directly, this file was auto-generated.
 */

:root {
  --xpl-color-white: #ffffff;
  --xpl-color-background-primary: var(--xpl-color-white);
}

.dark {
  --xpl-color-background-primary: #111111; /** Page background */
}
"#);
}

#[test]
fn media_mode_scss_exposes_globals() {
    let registry = FormatRegistry::default();
    let ctx = FormatContext::new("_variables-media.scss").with_header(false);
    let out = registry
        .generate(&dictionary(), "scss/variables-media-mode", &ctx)
        .unwrap();

    assert!(out.starts_with(":root {\n  --xpl-color-white: #ffffff;\n"));
    assert!(out.contains(
        "@media (prefers-color-scheme: dark) {\n  :root {\n    --xpl-color-background-primary: #111111; /** Page background */\n  }\n}\n"
    ));
    assert!(out.ends_with(
        "$xpl-color-white: var(--xpl-color-white);\n$xpl-color-background-primary: var(--xpl-color-background-primary);\n"
    ));
    assert!(!out.contains("$xpl-color-dark"));
}

#[test]
fn hex6_runs_before_css_generation() {
    let mut dict = Dictionary::new(vec![
        Token::new(&["color", "overlay"], "xpl-color-overlay", "#00000080").with_type("color"),
        Token::new(&["color", "ink"], "xpl-color-ink", "#222222ff").with_type("color"),
    ]);
    apply_all(&mut dict, &[ValueTransform::Hex6]);

    let ctx = FormatContext::new("variables.css").with_header(false);
    let out = FormatRegistry::default()
        .generate(&dict, "css/variables", &ctx)
        .unwrap();
    assert_eq!(
        out,
        ":root {\n  --xpl-color-overlay: rgba(0, 0, 0, 0.5);\n  --xpl-color-ink: #222222;\n}\n"
    );
}

#[test]
fn comments_cannot_close_early() {
    let dict = Dictionary::new(vec![Token::new(&["color", "a"], "xpl-color-a", "red")
        .with_comment("ends */ here")]);
    let ctx = FormatContext::new("variables.css").with_header(false);
    let out = FormatRegistry::default()
        .generate(&dict, "css/variables", &ctx)
        .unwrap();
    assert!(out.contains("--xpl-color-a: red; /** ends * / here */"));
}

#[test]
fn header_lines_replace_the_default() {
    let dict = Dictionary::new(vec![Token::new(&["color", "a"], "xpl-color-a", "red")]);
    let ctx = FormatContext::new("variables.css")
        .with_header_lines(vec!["Apollo tokens".to_string(), "v2".to_string()]);
    let out = FormatRegistry::default()
        .generate(&dict, "css/variables", &ctx)
        .unwrap();
    assert!(out.starts_with("/**\n * Apollo tokens\n * v2\n */\n\n:root {\n"));
}

#[test]
fn partial_references_emit_the_resolved_value() {
    let dict = Dictionary::new(vec![
        Token::new(&["color", "white"], "xpl-color-white", "#ffffff").with_type("color"),
        Token::new(&["shadow", "card"], "xpl-shadow-card", "0 1px #ffffff #000000")
            .with_original("0 1px {color.white} {color.missing}"),
    ]);
    let ctx = FormatContext::new("variables.css")
        .with_header(false)
        .with_output_references(true);
    let out = FormatRegistry::default()
        .generate(&dict, "css/variables-class-mode", &ctx)
        .unwrap();

    assert!(out.contains("  --xpl-shadow-card: 0 1px #ffffff #000000;\n"));
    assert!(!out.contains("{color.missing}"));
}

#[test]
fn dark_only_tokens_are_named_by_canonical_path() {
    let dict = Dictionary::new(vec![Token::new(
        &["color", "dark", "shade", "dark", "x"],
        "xpl-color-dark-shade-dark-x",
        "#111111",
    )
    .with_type("color")]);
    let ctx = FormatContext::new("variables.css")
        .with_header(false)
        .with_convention(ModeConvention::Penultimate);
    let out = FormatRegistry::default()
        .generate(&dict, "css/variables-class-mode", &ctx)
        .unwrap();

    assert!(out.contains(".dark {\n  --xpl-color-dark-shade-x: #111111;\n}"));
}
