use token_babel::transforms::{apply_all, ValueTransform};
use token_babel::{Dictionary, FormatContext, FormatRegistry, Token};

fn colors() -> Dictionary {
    Dictionary::new(vec![
        Token::new(&["color", "bg"], "xpl-color-bg", "#ffffff").with_type("color"),
        Token::new(&["color", "dark", "bg"], "xpl-color-dark-bg", "#000000").with_type("color"),
        Token::new(&["color", "dark", "accent"], "xpl-color-dark-accent", "#00ff00")
            .with_type("color")
            .with_comment("Night --- only"),
    ])
}

fn render(dict: &Dictionary, format: &str, ctx: &FormatContext) -> String {
    FormatRegistry::default().generate(dict, format, ctx).unwrap()
}

#[test]
fn dark_only_tokens_exist_in_both_folders() {
    let dict = colors();
    let ctx = FormatContext::new("colors.xml").with_header(false);
    let light = render(&dict, "android/resources-light", &ctx);
    let dark = render(&dict, "android/resources-dark", &ctx);

    for out in [&light, &dark] {
        assert!(out.contains("  <color name=\"xpl_color_accent\">#00ff00</color>\n"));
    }
    assert!(light.contains("  <color name=\"xpl_color_bg\">#ffffff</color>\n"));
    assert!(dark.contains("  <color name=\"xpl_color_bg\">#000000</color>\n"));
}

#[test]
fn comments_never_contain_double_dashes() {
    let ctx = FormatContext::new("colors.xml").with_header(false);
    let out = render(&colors(), "android/resources-light", &ctx);
    assert!(out.contains("  <!-- Night - - - only -->\n"));
    let inner = out.replace("<!--", "").replace("-->", "");
    assert!(!inner.contains("--"));
}

#[test]
fn header_follows_the_xml_declaration() {
    let ctx = FormatContext::new("values-night/colors.xml")
        .with_header_lines(vec!["Generated -- do not edit".to_string()]);
    let out = render(&colors(), "android/resources-dark", &ctx);
    assert!(out.starts_with(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!--\n  Generated - - do not edit\n-->\n<resources>\n"
    ));
    assert!(out.ends_with("</resources>\n"));
}

#[test]
fn android_transforms_feed_the_resources() {
    let mut dict = Dictionary::new(vec![
        Token::new(&["color", "scrim"], "xpl-color-scrim", "#00000080").with_type("color"),
        Token::new(&["size", "spacing", "16"], "xpl-size-spacing-16", 16).with_type("dimension"),
        Token::new(&["size", "font", "body"], "xpl-size-font-body", "14px").with_type("fontSize"),
        Token::new(&["size", "font", "weight"], "xpl-size-font-weight", "600")
            .with_type("fontWeight"),
    ]);
    apply_all(
        &mut dict,
        &[
            ValueTransform::Hex8Android,
            ValueTransform::PxToDp,
            ValueTransform::PxToSp,
        ],
    );

    let ctx = FormatContext::new("colors.xml").with_header(false);
    let colors = render(&dict, "android/resources-light", &ctx);
    assert!(colors.contains("<color name=\"xpl_color_scrim\">#80000000</color>"));

    let ctx = FormatContext::new("dimens.xml").with_header(false);
    let sizes = dict.filtered(|t| t.kind.is_size() || t.token_type.as_deref() == Some("fontWeight"));
    let dimens = render(&sizes, "android/dimens", &ctx);
    assert!(dimens.contains("  <dimen name=\"xpl_size_spacing_16\">16.00dp</dimen>\n"));
    assert!(dimens.contains("  <dimen name=\"xpl_size_font_body\">14.00sp</dimen>\n"));
    assert!(dimens.contains("  <string name=\"xpl_size_font_weight\">600</string>\n"));
}

#[test]
fn references_name_the_light_resource() {
    let dict = Dictionary::new(vec![
        Token::new(&["color", "white"], "xpl-color-white", "#ffffff").with_type("color"),
        Token::new(&["color", "dark", "white"], "xpl-color-dark-white", "#eeeeee")
            .with_type("color"),
        Token::new(&["color", "dark", "surface"], "xpl-color-dark-surface", "#eeeeee")
            .with_type("color")
            .with_original("{color.dark.white}"),
    ]);
    let ctx = FormatContext::new("colors.xml")
        .with_header(false)
        .with_output_references(true);
    let out = render(&dict, "android/resources-dark", &ctx);
    assert!(out.contains("<color name=\"xpl_color_surface\">@color/xpl_color_white</color>"));
}
