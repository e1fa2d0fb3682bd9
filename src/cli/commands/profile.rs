//! The `profile` subcommand.
use std::fmt;

use clap::Parser;
use config::Config;
use frameworks::identifiers::{PORTABLE, PROFILE_PREFIX};
use frameworks::{Framework, NameProvider, Version};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// The frameworks a portable library targets, e.g. `net45 win8 wpa81`.
    frameworks: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub(super) struct Report {
    frameworks: Vec<String>,
    profile: u32,
    short_folder_name: String,
    moniker: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}{} [{}]",
            self.frameworks.join("+"),
            PROFILE_PREFIX,
            self.profile,
            self.short_folder_name
        )
    }
}

pub(super) fn run(config: &Config, args: Args) -> anyhow::Result<Report> {
    let targets = args
        .frameworks
        .iter()
        .map(|token| super::parse_framework(config, token))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let frameworks = targets
        .iter()
        .map(Framework::short_folder_name)
        .collect::<Result<Vec<_>, _>>()?;

    let Some(profile) = NameProvider::shared().portable_profile(&targets) else {
        anyhow::bail!(
            "no portable profile supports exactly {}",
            frameworks.join(", ")
        );
    };

    let portable =
        Framework::with_profile(PORTABLE, Version::EMPTY, format!("{PROFILE_PREFIX}{profile}"));
    Ok(Report {
        frameworks,
        profile,
        short_folder_name: portable.short_folder_name()?,
        moniker: portable.moniker().to_owned(),
    })
}
