//! Defines the command-line arguments and subcommands for the preflight CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use crate::probes::host::{SysinfoSpec, DATA_DIR_DEFAULT};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "preflight",
    version,
    about = "Runs preflight system checks and reports the results."
)]
pub struct PreflightArgs {
    /// Enable debug logging on stderr (overridden by PREFLIGHT_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display system information.
    ///
    /// Runs the pre-flight checks and issues the results to stdout.
    Sysinfo(SysinfoArgs),
}

#[derive(Debug, Args)]
pub struct SysinfoArgs {
    /// Include controller-specific sysinfo.
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub controller: bool,

    /// Include worker-specific sysinfo.
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub worker: bool,

    /// Data directory to inspect.
    #[arg(long, default_value = DATA_DIR_DEFAULT)]
    pub data_dir: PathBuf,

    /// Output format (valid values: text, json, yaml).
    #[arg(short, long, default_value = "text")]
    pub output: String,
}

impl SysinfoArgs {
    pub fn spec(&self) -> SysinfoSpec {
        SysinfoSpec {
            controller_role_enabled: self.controller,
            worker_role_enabled: self.worker,
            data_dir: self.data_dir.clone(),
            add_debug_probes: true,
        }
    }
}
