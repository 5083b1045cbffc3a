// Command-line interface for the design-token pipeline
//
// This binary renders dictionary exports (the flattened token list produced by the token engine)
// into platform artifacts. The generators live in token-babel; this crate only reads files,
// layers configuration and writes results.
//
// Usage:
//  tokens convert <dictionary.json> --to <format> [-o <file>] [--destination <name>]
//  tokens build <dictionary.json> --brand <brand> [--platform <p>]... [--tokens-dir <dir>] [--out <dir>]
//  tokens --list-formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  tokens convert dict.json --to ios-swift/enum-with-modes --extra-class-name Theme

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use token_babel::platforms::{self, Platform};
use token_babel::{parse_flag, Dictionary, FormatContext, FormatRegistry, ModeDetector};
use token_config::{Loader, TokensConfig};

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag (default to "true")
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    let platform_names: Vec<&'static str> = Platform::ALL.iter().map(|p| p.name()).collect();

    Command::new("tokens")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate platform code from design tokens")
        .long_about(
            "tokens renders a design-token dictionary export into CSS, SCSS, Android, Swift,\n\
            JavaScript and TypeScript sources.\n\n\
            Commands:\n  \
            - convert: Render the dictionary with a single format\n  \
            - build:   Render every file of one or more platforms for a brand\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            tokens convert dict.json --to css/variables-class-mode   # Print CSS to stdout\n  \
            tokens convert dict.json -o Theme.kt                     # Format detected from extension\n  \
            tokens build dict.json --brand apollo --platform ios     # Write build/apollo/ios/*"
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tokens.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log what is being generated (RUST_LOG takes precedence)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a dictionary export with one format")
                .long_about(
                    "Render a dictionary export with one format.\n\n\
                    The format is taken from --to, or detected from the extension of --output.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    tokens convert dict.json --to json/debug\n  \
                    tokens convert dict.json --to android/kotlin-theme --extra-class-name AppTheme"
                )
                .arg(
                    Arg::new("input")
                        .help("Dictionary export (JSON)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (detected from --output if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("destination")
                        .long("destination")
                        .help("Destination name used to pick the header comment style")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("build")
                .about("Render every file of a brand's platforms")
                .long_about(
                    "Detect the brand's color modes, then render every file of the selected\n\
                    platforms under <out>/<brand>/<platform>/.\n\n\
                    Without --platform, every platform is built.\n\n\
                    Examples:\n  \
                    tokens build dict.json --brand apollo\n  \
                    tokens build dict.json --brand fieldedge --platform css --platform js"
                )
                .arg(
                    Arg::new("input")
                        .help("Dictionary export (JSON)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("brand")
                        .long("brand")
                        .help("Brand to build")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("platform")
                        .long("platform")
                        .help("Platform to build (repeatable)")
                        .action(ArgAction::Append)
                        .value_parser(clap::builder::PossibleValuesParser::new(platform_names)),
                )
                .arg(
                    Arg::new("tokens-dir")
                        .long("tokens-dir")
                        .help("Token source directory used for mode detection")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Build directory (overrides build.build_path)")
                        .value_hint(ValueHint::DirPath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = build_cli()
        .try_get_matches_from(&cleaned_args)
        .unwrap_or_else(|e| e.exit());

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &extra_params, &config),
        Some(("build", sub_matches)) => handle_build_command(sub_matches, &config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(verbose))
        .init();
}

/// RUST_LOG when set, otherwise `debug` with --verbose and `warn` without.
fn log_filter(verbose: bool) -> tracing_subscriber::EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level))
}

fn read_dictionary(path: &str) -> Dictionary {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    Dictionary::from_json(&source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(
    matches: &ArgMatches,
    extra_params: &HashMap<String, String>,
    config: &TokensConfig,
) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = matches.get_one::<String>("output").map(|s| s.as_str());
    let registry = FormatRegistry::default();

    // Auto-detect --to from the output filename if not provided
    let to = match matches.get_one::<String>("to") {
        Some(to) => to.clone(),
        None => match output.and_then(|o| registry.detect_format_from_filename(o)) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: Could not detect format from the output filename");
                eprintln!("Please specify --to explicitly");
                std::process::exit(1);
            }
        },
    };
    if let Err(e) = registry.get(&to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let destination = matches
        .get_one::<String>("destination")
        .cloned()
        .or_else(|| {
            output.and_then(|o| {
                Path::new(o)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
        })
        .unwrap_or_else(|| default_destination(&registry, &to));

    let dictionary = read_dictionary(input);
    let params = convert_params(config, &to, extra_params);
    let mut ctx = FormatContext::from_params(destination, &params).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    if !params.contains_key("header") {
        ctx.file.header_lines = config.header.lines.clone();
    }

    let text = registry.generate(&dictionary, &to, &ctx).unwrap_or_else(|e| {
        eprintln!("Generation error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

/// `tokens.<ext>` for the format's default extension, so the header style still matches.
fn default_destination(registry: &FormatRegistry, format: &str) -> String {
    registry
        .get(format)
        .ok()
        .and_then(|f| f.file_extensions().first().map(|ext| format!("tokens.{ext}")))
        .unwrap_or_else(|| "tokens".to_string())
}

/// Configured defaults for a single-format run, overridden by any --extra-* parameter.
fn convert_params(
    config: &TokensConfig,
    format: &str,
    extra_params: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert("prefix".to_string(), config.build.prefix.clone());
    params.insert(
        "output-references".to_string(),
        config.build.output_references.to_string(),
    );
    params.insert(
        "mode-convention".to_string(),
        config.modes.for_format(format).name().to_string(),
    );
    for (key, value) in extra_params {
        params.insert(key.clone(), value.clone());
    }
    params
}

/// Handle the build command
fn handle_build_command(matches: &ArgMatches, config: &TokensConfig) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let brand = matches
        .get_one::<String>("brand")
        .expect("brand is required");
    let selected: Vec<Platform> = match matches.get_many::<String>("platform") {
        Some(names) => names.filter_map(|n| Platform::from_name(n)).collect(),
        None => Platform::ALL.to_vec(),
    };
    let tokens_dir = matches
        .get_one::<String>("tokens-dir")
        .cloned()
        .unwrap_or_else(|| config.build.tokens_dir.clone());

    let dictionary = read_dictionary(input);
    let mut detector = ModeDetector::new();
    let mode_config = detector.detect(brand, Path::new(&tokens_dir));
    tracing::info!(brand = %brand, has_modes = mode_config.has_modes, "detected color modes");

    let mut platforms_config = config.platforms_config(brand, mode_config);
    if let Some(out) = matches.get_one::<String>("out") {
        platforms_config.build_path = out.clone();
    }

    let registry = FormatRegistry::default();
    for platform in selected {
        let plan = platforms::build_platform(&platforms_config, platform);
        let files = platforms::render(&plan, &dictionary, &registry).unwrap_or_else(|e| {
            eprintln!("Error building {platform}: {e}");
            std::process::exit(1);
        });
        for file in files {
            write_file(&file.path, &file.contents);
            println!("{}", file.path.display());
        }
    }
}

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap_or_else(|e| {
            eprintln!("Error creating directory '{}': {e}", parent.display());
            std::process::exit(1);
        });
    }
    fs::write(path, contents).unwrap_or_else(|e| {
        eprintln!("Error writing file '{}': {e}", path.display());
        std::process::exit(1);
    });
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for (name, description) in registry.describe() {
        println!("  {name:<36} {description}");
    }

    println!("\nPlatforms:");
    for platform in Platform::ALL {
        println!("  {platform}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> TokensConfig {
    let loader = Loader::new().with_optional_file("tokens.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Moves --extra-* parameters that name configuration keys into the config. Format parameters
/// are left in place for convert.
fn apply_config_overrides(config: &mut TokensConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(prefix) = take_override(extra_params, &["prefix"]) {
        config.build.prefix = prefix;
    }
    if let Some(raw) = take_override(extra_params, &["output-references", "output-refs"]) {
        config.build.output_references =
            parse_flag("output-references", &raw).unwrap_or_else(|err| {
                eprintln!("Error: {err}");
                std::process::exit(1);
            });
    }
    if let Some(line) = take_override(extra_params, &["header"]) {
        config.header.lines = vec![line];
    }
    if let Some(brands) = take_override(extra_params, &["legacy-brands"]) {
        config.build.legacy_brands = brands
            .split(',')
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .collect();
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}
