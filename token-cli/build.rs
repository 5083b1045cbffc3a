use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of token_babel::platforms::Platform::ALL
// We need to duplicate this here since build scripts can't access src/ modules
const PLATFORMS: &[&str] = &["android", "ios", "css", "scss", "js", "debug"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("tokens")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate platform code from design tokens")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a tokens.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert")
                .arg(Arg::new("input").index(1).value_hint(ValueHint::FilePath))
                .arg(Arg::new("to").long("to").value_hint(ValueHint::Other))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("destination").long("destination")),
        )
        .subcommand(
            Command::new("build")
                .arg(Arg::new("input").index(1).value_hint(ValueHint::FilePath))
                .arg(Arg::new("brand").long("brand"))
                .arg(
                    Arg::new("platform")
                        .long("platform")
                        .action(ArgAction::Append)
                        .value_parser(clap::builder::PossibleValuesParser::new(PLATFORMS)),
                )
                .arg(
                    Arg::new("tokens-dir")
                        .long("tokens-dir")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(Arg::new("out").long("out").value_hint(ValueHint::DirPath)),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tokens", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tokens", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tokens", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
