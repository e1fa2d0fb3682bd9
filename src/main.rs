//! The main entry point for the nuframe CLI.

#![warn(missing_docs)]

use std::process::ExitCode;

use clap::Parser;
use nuframe::cli::{self, Args};

//================================================================================================
// Functions
//================================================================================================

fn main() -> ExitCode {
    let args = Args::parse_from(cli::change_directory());

    let _guard = cli::init_global_subscriber(args.log);

    if let Err(e) = cli::run(args) {
        nuframe::fatal!(e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
