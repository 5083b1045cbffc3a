use std::path::PathBuf;
use token_babel::platforms::{self, RenderedFile};
use token_babel::{
    build_platform, build_platforms, Dictionary, FormatRegistry, ModeConfig, Platform,
    PlatformsConfig, Token,
};

fn dictionary() -> Dictionary {
    Dictionary::new(vec![
        Token::new(&["color", "bg"], "xpl-color-bg", "#ffffffff")
            .with_type("color")
            .with_category("color"),
        Token::new(&["color", "dark", "bg"], "xpl-color-dark-bg", "#000000ff")
            .with_type("color")
            .with_category("color"),
        Token::new(&["font", "size", "body"], "xpl-font-size-body", "14px")
            .with_type("fontSize")
            .with_category("font"),
        Token::new(&["size", "spacing", "m"], "xpl-size-spacing-m", 16)
            .with_type("dimension")
            .with_category("size"),
    ])
}

fn render_all(config: &PlatformsConfig) -> Vec<RenderedFile> {
    let registry = FormatRegistry::default();
    let dict = dictionary();
    build_platforms(config)
        .iter()
        .flat_map(|plan| platforms::render(plan, &dict, &registry).unwrap())
        .collect()
}

fn file<'a>(files: &'a [RenderedFile], path: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.path == PathBuf::from(path))
        .map(|f| f.contents.as_str())
        .unwrap_or_else(|| panic!("{path} was not rendered"))
}

#[test]
fn legacy_brand_with_modes_builds_every_file() {
    let config = PlatformsConfig::new("apollo", "build").with_modes(ModeConfig::with_modes("apollo"));
    let files = render_all(&config);
    let paths: Vec<String> = files
        .iter()
        .map(|f| f.path.to_string_lossy().into_owned())
        .collect();

    assert_eq!(
        paths,
        vec![
            "build/apollo/android/colors.xml",
            "build/apollo/android/values-night/colors.xml",
            "build/apollo/android/dimens.xml",
            "build/apollo/android/Theme.kt",
            "build/apollo/ios/StyleDictionaryColor.swift",
            "build/apollo/ios/StyleDictionaryFont.swift",
            "build/apollo/ios/Theme.swift",
            "build/apollo/css/variables.css",
            "build/apollo/css/variables-media.css",
            "build/apollo/scss/_variables.scss",
            "build/apollo/scss/_variables-media.scss",
            "build/apollo/js/colors.js",
            "build/apollo/js/colors.d.ts",
            "build/apollo/js/font.js",
            "build/apollo/js/font.d.ts",
            "build/apollo/debug/tokens.json",
        ]
    );
}

#[test]
fn each_platform_sees_its_own_transforms() {
    let config = PlatformsConfig::new("apollo", "build").with_modes(ModeConfig::with_modes("apollo"));
    let files = render_all(&config);

    let css = file(&files, "build/apollo/css/variables.css");
    assert!(css.starts_with(":root {\n  --xpl-color-bg: #ffffff;\n"));

    let scss = file(&files, "build/apollo/scss/_variables.scss");
    assert!(scss.starts_with("/**\n * Do not edit directly"));
    assert!(scss.contains("--xpl-color-bg: #ffffffff;"));

    let night = file(&files, "build/apollo/android/values-night/colors.xml");
    assert!(night.contains("<color name=\"xpl_color_bg\">#ff000000</color>"));

    let dimens = file(&files, "build/apollo/android/dimens.xml");
    assert!(dimens.contains("<dimen name=\"xpl_font_size_body\">14.00sp</dimen>"));
    assert!(dimens.contains("<dimen name=\"xpl_size_spacing_m\">16.00dp</dimen>"));
    assert!(!dimens.contains("xpl_color"));

    let theme = file(&files, "build/apollo/ios/Theme.swift");
    assert!(theme.contains("UIColor(red: 1.000, green: 1.000, blue: 1.000, alpha: 1)"));
    assert!(theme.contains("public static let m = CGFloat(16.00)"));

    let js = file(&files, "build/apollo/js/colors.js");
    assert!(js.contains("\"light\": \"#ffffffff\""));
    assert!(!js.contains("spacing"));
    let fonts = file(&files, "build/apollo/js/font.d.ts");
    assert!(fonts.contains("readonly body: {\n        readonly value: string;"));

    let debug = file(&files, "build/apollo/debug/tokens.json");
    assert!(debug.starts_with('{'));
}

#[test]
fn newer_brands_skip_native_android() {
    let config = PlatformsConfig::new("fieldedge", "dist");
    let plan = build_platform(&config, Platform::Android);
    assert!(plan.files.is_empty());

    let registry = FormatRegistry::default();
    let files = platforms::render(&build_platform(&config, Platform::Css), &dictionary(), &registry)
        .unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, PathBuf::from("dist/fieldedge/css/variables.css"));
    assert!(!files[0].contents.contains(".dark"));
}

#[test]
fn configured_header_reaches_every_commented_file() {
    let mut config = PlatformsConfig::new("apollo", "build");
    config.header_lines = vec!["Apollo design tokens".to_string()];
    let files = render_all(&config);

    assert!(file(&files, "build/apollo/android/colors.xml")
        .contains("<!--\n  Apollo design tokens\n-->"));
    assert!(file(&files, "build/apollo/ios/Theme.swift").starts_with("//\n// Apollo design tokens\n//\n"));
    assert!(file(&files, "build/apollo/js/colors.js").starts_with("/**\n * Apollo design tokens\n */\n"));
    assert!(!file(&files, "build/apollo/debug/tokens.json").contains("Apollo"));
}
