//! The `folder` subcommand.
use std::fmt;

use anyhow::Context;
use clap::Parser;
use config::Config;
use frameworks::identifiers::KNOWN_FOLDERS;
use frameworks::{NameProvider, parse_folder_path_with};
use serde::Serialize;

//================================================================================================
// Types
//================================================================================================

#[derive(Parser, Debug)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Fail on folders below a root that do not name a specific framework
    ///
    /// Also enabled by the `folders.strict` configuration setting.
    #[arg(long)]
    strict: bool,
    /// Recognize DIR as a root folder; may be repeated
    ///
    /// Replaces the configured `folders.roots` and the standard package folders.
    #[arg(long = "root", value_name = "DIR")]
    roots: Vec<String>,
    /// Package-relative paths such as `lib/net45/Foo.dll`.
    paths: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub(super) struct Report {
    path: String,
    framework: Option<String>,
    moniker: Option<String>,
    effective_path: String,
}

//================================================================================================
// Impls
//================================================================================================

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let framework = self.framework.as_deref().unwrap_or("-");
        write!(f, "{}: {framework} {}", self.path, self.effective_path)
    }
}

//================================================================================================
// Functions
//================================================================================================

pub(super) fn run(config: &Config, args: Args) -> anyhow::Result<Vec<Report>> {
    let strict = args.strict || config.folders.strict;
    let roots: Vec<&str> = if !args.roots.is_empty() {
        args.roots.iter().map(String::as_str).collect()
    } else if !config.folders.roots.is_empty() {
        config.folders.roots.iter().map(String::as_str).collect()
    } else {
        KNOWN_FOLDERS.to_vec()
    };
    tracing::debug!(strict, ?roots, "resolving package paths");

    let provider = NameProvider::shared();
    args.paths
        .into_iter()
        .map(|path| {
            let found = parse_folder_path_with(&path, strict, roots.as_slice(), provider)
                .with_context(|| format!("could not resolve `{path}`"))?;
            let framework = found
                .framework
                .as_ref()
                .map(|fw| fw.short_folder_name())
                .transpose()?;
            Ok(Report {
                moniker: found.framework.as_ref().map(|fw| fw.moniker().to_owned()),
                framework,
                effective_path: found.effective_path,
                path,
            })
        })
        .collect()
}
