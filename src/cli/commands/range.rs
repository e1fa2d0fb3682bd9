//! The `range` subcommand.
use std::fmt;

use anyhow::Context;
use clap::Parser;
use nuversion::{Version, VersionRange};
use serde::Serialize;

//================================================================================================
// Types
//================================================================================================

#[derive(Parser, Debug)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// A version range such as `[1.0, 2.0)`, `1.2.*` or `3.1.0`.
    range: String,
    /// Candidate versions to test against the range.
    versions: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub(super) struct Candidate {
    version: Version,
    satisfies: bool,
}

#[derive(Serialize, Debug, PartialEq)]
pub(super) struct Report {
    range: VersionRange,
    floating: bool,
    candidates: Vec<Candidate>,
    best_match: Option<Version>,
}

//================================================================================================
// Impls
//================================================================================================

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.range)?;
        for candidate in &self.candidates {
            let mark = if candidate.satisfies { "ok" } else { "no" };
            write!(f, "\n  {mark} {}", candidate.version)?;
        }
        match &self.best_match {
            Some(best) => write!(f, "\nbest match: {best}"),
            None if self.candidates.is_empty() => Ok(()),
            None => write!(f, "\nbest match: none"),
        }
    }
}

//================================================================================================
// Functions
//================================================================================================

pub(super) fn run(args: Args) -> anyhow::Result<Report> {
    let range = VersionRange::parse(&args.range)
        .with_context(|| format!("could not parse range `{}`", args.range))?;
    let versions = args
        .versions
        .iter()
        .map(|v| Version::parse(v).with_context(|| format!("could not parse version `{v}`")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let best_match = range.find_best_match(&versions).cloned();
    tracing::debug!(%range, best = ?best_match.as_ref().map(ToString::to_string), "matched range");

    Ok(Report {
        floating: range.is_floating(),
        candidates: versions
            .into_iter()
            .map(|version| Candidate {
                satisfies: range.satisfies(&version),
                version,
            })
            .collect(),
        best_match,
        range,
    })
}
