//! Metadata Model Registry - Entry Point
//!
//! Binary entry point for the `mmr` command line.

// Force-link mmr-plugins to ensure linkme registrations are included
extern crate mmr_plugins;

use std::process::ExitCode;

use clap::Parser;
use mmr::cli::{Cli, run};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    run(&cli)
}
