//! The `parse` subcommand.
use std::fmt;

use clap::Parser;
use config::Config;
use frameworks::FrameworkKind;
use serde::Serialize;

//================================================================================================
// Types
//================================================================================================

#[derive(Parser, Debug)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Framework names, monikers or aliases to parse.
    tokens: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub(super) struct Report {
    token: String,
    kind: FrameworkKind,
    identifier: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    short_folder_name: Option<String>,
    moniker: String,
}

//================================================================================================
// Impls
//================================================================================================

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token, self.moniker)?;
        if let Some(platform) = &self.platform {
            write!(f, " ({platform})")?;
        }
        if let Some(short) = &self.short_folder_name {
            write!(f, " [{short}]")?;
        }
        Ok(())
    }
}

//================================================================================================
// Functions
//================================================================================================

pub(super) fn run(config: &Config, args: Args) -> anyhow::Result<Vec<Report>> {
    args.tokens
        .into_iter()
        .map(|token| {
            let fw = super::parse_framework(config, &token)?;
            let short_folder_name = match fw.short_folder_name() {
                Ok(short) => Some(short),
                Err(e) => {
                    tracing::warn!(%token, error = %e, "framework has no short folder name");
                    None
                },
            };
            Ok(Report {
                kind: fw.kind(),
                identifier: fw.identifier().to_owned(),
                version: fw.version().to_string(),
                profile: fw.has_profile().then(|| fw.profile().to_owned()),
                platform: fw.platform_moniker(),
                short_folder_name,
                moniker: fw.moniker().to_owned(),
                token,
            })
        })
        .collect()
}
