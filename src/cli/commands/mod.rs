mod folder;
mod parse;
mod profile;
mod range;

use anyhow::Context;
use clap::Subcommand;
use config::{CONFIG, Config, OutputFormat};

use super::Args;
use super::output::emit;

#[derive(Subcommand)]
pub(super) enum Commands {
    /// Parse target framework names.
    ///
    /// Accepts short folder names (`net45`, `netstandard2.0`,
    /// `net8.0-windows10.0.19041`, `portable-net45+win8`), full monikers
    /// (`.NETFramework,Version=v4.0,Profile=Client`) and configured aliases,
    /// and prints the normalized short name and moniker of each.
    #[command(verbatim_doc_comment)]
    Parse(parse::Args),
    /// Resolve the framework of package-relative paths.
    ///
    /// The first folder below a known root (`lib`, `ref`, `build`, ...)
    /// names the framework; the rest of the path is reported as the
    /// effective path.
    #[command(verbatim_doc_comment)]
    Folder(folder::Args),
    /// Find the portable profile supporting exactly the given frameworks.
    #[command(verbatim_doc_comment)]
    Profile(profile::Args),
    /// Normalize a version range and pick the best matching version.
    ///
    /// Floating ranges (`1.2.*`) select the highest matching candidate;
    /// all other ranges select the lowest candidate within bounds.
    #[command(verbatim_doc_comment)]
    Range(range::Args),
}

/// Runs the selected subcommand against the global configuration.
pub fn run(args: Args) -> anyhow::Result<()> {
    let config: &Config = &CONFIG;
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match args.command {
        Commands::Parse(args) => emit(format, &parse::run(config, args)?),
        Commands::Folder(args) => emit(format, &folder::run(config, args)?),
        Commands::Profile(args) => emit(format, &[profile::run(config, args)?]),
        Commands::Range(args) => emit(format, &[range::run(args)?]),
    }
}

/// Expands a configured alias before parsing `token` as a framework.
fn parse_framework(config: &Config, token: &str) -> anyhow::Result<frameworks::Framework> {
    let resolved = config.resolve_alias(token);
    if resolved != token {
        tracing::debug!(alias = token, target = resolved, "expanded framework alias");
    }
    frameworks::parse(resolved).with_context(|| format!("could not parse `{token}`"))
}
