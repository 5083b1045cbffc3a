//! Platform build plans
//!
//!     A plan says, for one (brand, platform) pair, which files to write, with which format, over
//!     which subset of tokens, after which value transforms. Plans are plain data: building one
//!     touches nothing, [`render`] turns one into file contents, and writing them is up to the
//!     caller.
//!
//!     | platform | files                                                                  |
//!     |----------|------------------------------------------------------------------------|
//!     | android  | colors.xml, values-night/colors.xml, dimens.xml, Theme.kt (legacy only)|
//!     | ios      | StyleDictionaryColor.swift, StyleDictionaryFont.swift (legacy only), Theme.swift |
//!     | css      | variables.css (+ variables-media.css with modes)                       |
//!     | scss     | _variables.scss (+ _variables-media.scss with modes)                   |
//!     | js       | colors.js, colors.d.ts, font.js, font.d.ts                             |
//!     | debug    | tokens.json                                                            |

use crate::dictionary::{Dictionary, Token, TokenKind};
use crate::error::FormatError;
use crate::format::{FileSpec, FormatContext, FormatOptions, PlatformMeta, DEFAULT_PREFIX};
use crate::modes::detect::ModeConfig;
use crate::modes::ModeConvention;
use crate::registry::FormatRegistry;
use crate::transforms::{self, ValueTransform};
use std::path::PathBuf;

/// Brands that still ship the legacy Android resources and flat Swift enums.
pub const DEFAULT_LEGACY_BRANDS: &[&str] = &["apollo"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Android,
    Ios,
    Css,
    Scss,
    Js,
    Debug,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Android,
        Platform::Ios,
        Platform::Css,
        Platform::Scss,
        Platform::Js,
        Platform::Debug,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Css => "css",
            Platform::Scss => "scss",
            Platform::Js => "js",
            Platform::Debug => "debug",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mode-marker convention per generator family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conventions {
    /// CSS and SCSS.
    pub css: ModeConvention,
    pub js: ModeConvention,
    /// XML resources and the Kotlin theme.
    pub android: ModeConvention,
    pub ios: ModeConvention,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IosNames {
    pub color_class_name: String,
    pub size_class_name: String,
    pub theme_class_name: String,
}

impl Default for IosNames {
    fn default() -> Self {
        IosNames {
            color_class_name: "StyleDictionaryColor".to_string(),
            size_class_name: "StyleDictionarySize".to_string(),
            theme_class_name: "Theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidNames {
    pub kotlin_class_name: String,
    pub package_name: String,
}

impl Default for AndroidNames {
    fn default() -> Self {
        AndroidNames {
            kotlin_class_name: "ApolloTheme".to_string(),
            package_name: "com.xplor.apollo.design".to_string(),
        }
    }
}

/// Inputs of [`build_platforms`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformsConfig {
    pub brand: String,
    pub build_path: String,
    pub prefix: String,
    pub legacy_brands: Vec<String>,
    pub mode_config: ModeConfig,
    pub conventions: Conventions,
    pub output_references: bool,
    /// Header lines for every file; empty means the default line.
    pub header_lines: Vec<String>,
    pub ios: IosNames,
    pub android: AndroidNames,
}

impl PlatformsConfig {
    pub fn new(brand: impl Into<String>, build_path: impl Into<String>) -> Self {
        PlatformsConfig {
            brand: brand.into(),
            build_path: build_path.into(),
            prefix: DEFAULT_PREFIX.to_string(),
            legacy_brands: DEFAULT_LEGACY_BRANDS.iter().map(|b| b.to_string()).collect(),
            mode_config: ModeConfig::without_modes(),
            conventions: Conventions::default(),
            output_references: true,
            header_lines: Vec::new(),
            ios: IosNames::default(),
            android: AndroidNames::default(),
        }
    }

    pub fn with_modes(mut self, mode_config: ModeConfig) -> Self {
        self.mode_config = mode_config;
        self
    }

    pub fn is_legacy_brand(&self) -> bool {
        self.legacy_brands.iter().any(|b| b == &self.brand)
    }

    fn has_modes(&self) -> bool {
        self.mode_config.has_modes
    }

    fn build_path_for(&self, platform: Platform) -> String {
        format!(
            "{}/{}/{}/",
            self.build_path.trim_end_matches('/'),
            self.brand,
            platform.name()
        )
    }
}

/// Which tokens a file receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenFilter {
    All,
    /// Color tokens.
    Colors,
    /// Font sizes, dimensions and font weights.
    Sizes,
    /// Tokens whose category (falling back to the first path segment) matches.
    Category(String),
}

impl TokenFilter {
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            TokenFilter::All => true,
            TokenFilter::Colors => token.kind == TokenKind::Color,
            TokenFilter::Sizes => token.kind.is_size() || token.kind == TokenKind::FontWeight,
            TokenFilter::Category(category) => {
                token
                    .category
                    .as_deref()
                    .or_else(|| token.path.first().map(String::as_str))
                    == Some(category.as_str())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilePlan {
    pub destination: String,
    pub format: String,
    pub filter: TokenFilter,
    pub options: FormatOptions,
    pub show_header: bool,
}

impl FilePlan {
    fn new(destination: &str, format: &str, filter: TokenFilter, convention: ModeConvention) -> Self {
        FilePlan {
            destination: destination.to_string(),
            format: format.to_string(),
            filter,
            options: FormatOptions {
                mode_convention: convention,
                ..FormatOptions::default()
            },
            show_header: true,
        }
    }

    fn output_references(mut self, on: bool) -> Self {
        self.options.output_references = on;
        self
    }

    fn class_name(mut self, name: &str) -> Self {
        self.options.class_name = Some(name.to_string());
        self
    }

    fn package_name(mut self, name: &str) -> Self {
        self.options.package_name = Some(name.to_string());
        self
    }

    fn without_header(mut self) -> Self {
        self.show_header = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformPlan {
    pub platform: Platform,
    pub build_path: String,
    pub prefix: Option<String>,
    pub transforms: Vec<ValueTransform>,
    pub header_lines: Vec<String>,
    pub files: Vec<FilePlan>,
}

impl PlatformPlan {
    /// The context handed to the generator of `file`.
    pub fn context(&self, file: &FilePlan) -> FormatContext {
        FormatContext {
            file: FileSpec {
                destination: file.destination.clone(),
                show_header: file.show_header,
                header_lines: self.header_lines.clone(),
            },
            options: file.options.clone(),
            platform: PlatformMeta {
                prefix: self.prefix.clone(),
            },
        }
    }
}

fn plan(config: &PlatformsConfig, platform: Platform, transforms: Vec<ValueTransform>) -> PlatformPlan {
    PlatformPlan {
        platform,
        build_path: config.build_path_for(platform),
        prefix: Some(config.prefix.clone()),
        transforms,
        header_lines: config.header_lines.clone(),
        files: Vec::new(),
    }
}

fn android(config: &PlatformsConfig) -> PlatformPlan {
    let conv = config.conventions.android;
    let refs = config.output_references;
    let mut plan = plan(
        config,
        Platform::Android,
        vec![
            ValueTransform::Hex8Android,
            ValueTransform::PxToDp,
            ValueTransform::PxToSp,
        ],
    );

    // Newer brands ship no native Android output.
    if config.is_legacy_brand() {
        let light_format = if config.has_modes() {
            "android/resources-light"
        } else {
            "android/resources-with-modes"
        };
        plan.files
            .push(FilePlan::new("colors.xml", light_format, TokenFilter::Colors, conv).output_references(refs));
        if config.has_modes() {
            plan.files.push(
                FilePlan::new(
                    "values-night/colors.xml",
                    "android/resources-dark",
                    TokenFilter::Colors,
                    conv,
                )
                .output_references(refs),
            );
        }
        plan.files
            .push(FilePlan::new("dimens.xml", "android/dimens", TokenFilter::Sizes, conv));
        plan.files.push(
            FilePlan::new("Theme.kt", "android/kotlin-theme", TokenFilter::All, conv)
                .class_name(&config.android.kotlin_class_name)
                .package_name(&config.android.package_name),
        );
    }
    plan
}

fn ios(config: &PlatformsConfig) -> PlatformPlan {
    let conv = config.conventions.ios;
    let refs = config.output_references;
    let mut plan = plan(
        config,
        Platform::Ios,
        vec![ValueTransform::UiColorSwift, ValueTransform::PxToCgFloat],
    );

    if config.is_legacy_brand() {
        plan.files.push(
            FilePlan::new(
                "StyleDictionaryColor.swift",
                "ios-swift/enum-with-modes-legacy",
                TokenFilter::Colors,
                conv,
            )
            .class_name(&config.ios.color_class_name)
            .output_references(refs),
        );
        plan.files.push(
            FilePlan::new(
                "StyleDictionaryFont.swift",
                "ios-swift/enum-with-modes-legacy",
                TokenFilter::Sizes,
                conv,
            )
            .class_name(&config.ios.size_class_name)
            .output_references(refs),
        );
    }
    plan.files.push(
        FilePlan::new("Theme.swift", "ios-swift/enum-with-modes", TokenFilter::All, conv)
            .class_name(&config.ios.theme_class_name)
            .output_references(refs),
    );
    plan
}

fn stylesheet(config: &PlatformsConfig, platform: Platform) -> PlatformPlan {
    let conv = config.conventions.css;
    let refs = config.output_references;
    let (family, main, media, transforms) = match platform {
        Platform::Scss => ("scss", "_variables.scss", "_variables-media.scss", Vec::new()),
        _ => (
            "css",
            "variables.css",
            "variables-media.css",
            vec![ValueTransform::Hex6],
        ),
    };
    let mut plan = plan(config, platform, transforms);

    let mut files = if config.has_modes() {
        vec![
            FilePlan::new(main, &format!("{family}/variables-class-mode"), TokenFilter::All, conv),
            FilePlan::new(media, &format!("{family}/variables-media-mode"), TokenFilter::All, conv),
        ]
    } else {
        vec![FilePlan::new(main, &format!("{family}/variables"), TokenFilter::All, conv)]
    };
    for file in &mut files {
        file.options.output_references = refs;
        if platform == Platform::Css {
            file.show_header = false;
        }
    }
    plan.files = files;
    plan
}

fn js(config: &PlatformsConfig) -> PlatformPlan {
    let conv = config.conventions.js;
    let refs = config.output_references;
    let mut plan = plan(config, Platform::Js, Vec::new());
    plan.prefix = None;
    for (category, stem) in [("color", "colors"), ("font", "font")] {
        let filter = TokenFilter::Category(category.to_string());
        plan.files.push(
            FilePlan::new(
                &format!("{stem}.js"),
                "javascript/umd-with-modes",
                filter.clone(),
                conv,
            )
            .output_references(refs),
        );
        plan.files.push(
            FilePlan::new(&format!("{stem}.d.ts"), "typescript/declarations", filter, conv)
                .output_references(refs),
        );
    }
    plan
}

fn debug(config: &PlatformsConfig) -> PlatformPlan {
    let mut plan = plan(config, Platform::Debug, Vec::new());
    plan.prefix = None;
    plan.files.push(
        FilePlan::new("tokens.json", "json/debug", TokenFilter::All, ModeConvention::default())
            .without_header(),
    );
    plan
}

/// The plan of one platform.
pub fn build_platform(config: &PlatformsConfig, platform: Platform) -> PlatformPlan {
    match platform {
        Platform::Android => android(config),
        Platform::Ios => ios(config),
        Platform::Css | Platform::Scss => stylesheet(config, platform),
        Platform::Js => js(config),
        Platform::Debug => debug(config),
    }
}

/// Plans for every platform, in [`Platform::ALL`] order.
pub fn build_platforms(config: &PlatformsConfig) -> Vec<PlatformPlan> {
    Platform::ALL
        .into_iter()
        .map(|platform| build_platform(config, platform))
        .collect()
}

/// One generated file, relative to the output root.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Applies the plan's transforms and generates every file of the plan.
pub fn render(
    plan: &PlatformPlan,
    dictionary: &Dictionary,
    registry: &FormatRegistry,
) -> Result<Vec<RenderedFile>, FormatError> {
    let mut transformed = dictionary.clone();
    transforms::apply_all(&mut transformed, &plan.transforms);

    let mut rendered = Vec::with_capacity(plan.files.len());
    for file in &plan.files {
        let subset = transformed.filtered(|t| file.filter.matches(t));
        let ctx = plan.context(file);
        let contents = registry.generate(&subset, &file.format, &ctx)?;
        tracing::info!(
            platform = %plan.platform,
            file = %file.destination,
            tokens = subset.all_tokens().len(),
            "rendered"
        );
        rendered.push(RenderedFile {
            path: PathBuf::from(&plan.build_path).join(&file.destination),
            contents,
        });
    }
    Ok(rendered)
}
