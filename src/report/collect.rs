//! Structured output: collect every outcome, then encode once.

use super::{probe_path, prop_string, ProbeCategory, ProbeRecord};
use crate::errors::{Result, SysinfoError};
use crate::probes::{Probe, ProbeDesc, ProbedProp, Reporter};
use std::io::{self, Write};
use tracing::debug;

/// Structured document encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoder {
    Json,
    Yaml,
}

impl Encoder {
    pub fn encode(self, records: &[ProbeRecord]) -> Result<Vec<u8>> {
        match self {
            Encoder::Json => {
                let mut bytes = serde_json::to_vec_pretty(records)?;
                bytes.push(b'\n');
                Ok(bytes)
            }
            Encoder::Yaml => Ok(serde_yaml::to_string(records)?.into_bytes()),
        }
    }
}

#[derive(Debug, Default)]
pub struct ResultsCollector {
    results: Vec<ProbeRecord>,
    failed: bool,
}

impl ResultsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    fn push(
        &mut self,
        desc: &dyn ProbeDesc,
        prop: Option<&dyn ProbedProp>,
        msg: &str,
        category: ProbeCategory,
        error: Option<String>,
    ) {
        if category.is_failure() {
            self.failed = true;
        }
        self.results.push(ProbeRecord {
            path: probe_path(desc),
            display_name: desc.display_name().to_string(),
            prop: prop_string(prop),
            message: msg.to_string(),
            category,
            error,
        });
    }
}

impl Reporter for ResultsCollector {
    fn pass(&mut self, desc: &dyn ProbeDesc, prop: Option<&dyn ProbedProp>) -> io::Result<()> {
        self.push(desc, prop, "", ProbeCategory::Pass, None);
        Ok(())
    }

    fn warn(
        &mut self,
        desc: &dyn ProbeDesc,
        prop: Option<&dyn ProbedProp>,
        msg: &str,
    ) -> io::Result<()> {
        self.push(desc, prop, msg, ProbeCategory::Warning, None);
        Ok(())
    }

    fn reject(
        &mut self,
        desc: &dyn ProbeDesc,
        prop: Option<&dyn ProbedProp>,
        msg: &str,
    ) -> io::Result<()> {
        self.push(desc, prop, msg, ProbeCategory::Rejected, None);
        Ok(())
    }

    fn error(
        &mut self,
        desc: &dyn ProbeDesc,
        err: Option<&(dyn std::error::Error + 'static)>,
    ) -> io::Result<()> {
        self.push(
            desc,
            None,
            "",
            ProbeCategory::Error,
            err.map(|e| e.to_string()),
        );
        Ok(())
    }
}

/// Runs `probe` into a fresh collector and writes the encoded document.
///
/// All or nothing: if any probe was rejected or errored, nothing is written
/// and [`SysinfoError::Failed`] is returned.
pub fn collect_and_print(
    probe: &dyn Probe,
    out: &mut dyn Write,
    encoder: Encoder,
) -> Result<()> {
    let mut collector = ResultsCollector::new();
    probe.probe(&mut collector)?;
    if collector.failed() {
        let records = collector.results.len();
        debug!(records, "withholding structured output");
        return Err(SysinfoError::Failed);
    }

    let bytes = encoder.encode(&collector.results)?;
    out.write_all(&bytes)?;
    Ok(())
}
