//! The preflight Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use crate::cli::args::{Command, PreflightArgs, SysinfoArgs};
use crate::errors::Result;
use crate::logging;
use crate::sysinfo;
use clap::Parser;
use std::io::{self, Write};

pub mod args;

/// The main entry point for the CLI.
pub fn run() -> miette::Result<()> {
    let args = PreflightArgs::parse();
    logging::init(args.verbose);

    match args.command {
        Command::Sysinfo(sysinfo_args) => handle_sysinfo(&sysinfo_args)?,
    }
    Ok(())
}

/// Handles the `sysinfo` subcommand.
fn handle_sysinfo(args: &SysinfoArgs) -> Result<()> {
    let colors = atty::is(atty::Stream::Stdout);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let build = || args.spec().new_sysinfo_probes();
    let result = sysinfo::report(&args.output, build, &mut out, colors);
    out.flush()?;
    result
}
