//! The probe interface consumed by the reporters.
//!
//! A probe engine walks its probes and pushes one outcome per probe into a
//! [`Reporter`]. The reporters never drive the engine; they only receive.

use crate::errors::Result;
use std::fmt;
use std::io;

pub mod host;
pub mod tree;

pub use tree::{ProbeOutcome, Probes};

/// A canonical, ordered path into the probe tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProbePath(pub Vec<String>);

impl ProbePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns a new path with `segment` appended.
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ProbePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

/// Identifies a probe within the probe tree.
pub trait ProbeDesc {
    fn path(&self) -> &[String];
    fn display_name(&self) -> &str;
}

/// A measured value. Anything printable qualifies.
pub trait ProbedProp: fmt::Display {}

impl<T: fmt::Display + ?Sized> ProbedProp for T {}

/// The capability set a probe engine reports into, one method per outcome.
///
/// Every method returns the output sink's error, if any. Semantic failures
/// (`reject`, `error`) are not errors of the reporter itself.
pub trait Reporter {
    fn pass(&mut self, desc: &dyn ProbeDesc, prop: Option<&dyn ProbedProp>) -> io::Result<()>;

    fn warn(
        &mut self,
        desc: &dyn ProbeDesc,
        prop: Option<&dyn ProbedProp>,
        msg: &str,
    ) -> io::Result<()>;

    fn reject(
        &mut self,
        desc: &dyn ProbeDesc,
        prop: Option<&dyn ProbedProp>,
        msg: &str,
    ) -> io::Result<()>;

    fn error(
        &mut self,
        desc: &dyn ProbeDesc,
        err: Option<&(dyn std::error::Error + 'static)>,
    ) -> io::Result<()>;
}

/// The probe engine's single entry point.
pub trait Probe {
    fn probe(&self, reporter: &mut dyn Reporter) -> Result<()>;
}

/// Plain descriptor owned by the probe tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeDescriptor {
    pub path: ProbePath,
    pub display_name: String,
}

impl ProbeDescriptor {
    pub fn new(path: ProbePath, display_name: impl Into<String>) -> Self {
        Self {
            path,
            display_name: display_name.into(),
        }
    }
}

impl ProbeDesc for ProbeDescriptor {
    fn path(&self) -> &[String] {
        self.path.segments()
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}
