//! The `sysinfo` report driver.
//!
//! Picks a reporter for the requested output format, runs the probes once
//! and turns the outcome into a single result. Text is streamed while the
//! probes run; JSON and YAML are all or nothing.

use crate::errors::{Result, SysinfoError};
use crate::probes::Probe;
use crate::report::{collect_and_print, CliReporter, Encoder};
use std::io::Write;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = SysinfoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(SysinfoError::UnknownOutputFormat(other.to_string())),
        }
    }
}

/// Validates `format`, then builds the probes with `build` and runs them.
///
/// For an unknown format nothing is built and nothing is probed.
pub fn report<P, F>(format: &str, build: F, out: &mut dyn Write, colors: bool) -> Result<()>
where
    P: Probe,
    F: FnOnce() -> P,
{
    let format: OutputFormat = format.parse()?;
    let probes = build();
    run(&probes, format, out, colors)
}

/// Runs `probes` once and reports to `out` in `format`.
///
/// `colors` only affects the text format.
pub fn run(
    probes: &dyn Probe,
    format: OutputFormat,
    out: &mut dyn Write,
    colors: bool,
) -> Result<()> {
    debug!(?format, colors, "running sysinfo probes");
    match format {
        OutputFormat::Text => {
            let mut cli = CliReporter::new(out, colors);
            probes.probe(&mut cli)?;
            if cli.failed() {
                return Err(SysinfoError::Failed);
            }
            Ok(())
        }
        OutputFormat::Json => collect_and_print(probes, out, Encoder::Json),
        OutputFormat::Yaml => collect_and_print(probes, out, Encoder::Yaml),
    }
}
