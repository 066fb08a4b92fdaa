//! A minimal probe tree.
//!
//! Each node owns a descriptor, an optional check and its children. Probing
//! walks the tree depth-first, pre-order: a node with a check reports
//! exactly once, then its children are probed. There is no ordering beyond
//! insertion order and no skipping of children after a failed parent.

use super::{Probe, ProbeDescriptor, ProbePath, ProbedProp, Reporter};
use crate::errors::Result;
use std::error::Error;
use tracing::trace;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// What a single check found.
#[derive(Debug)]
pub enum ProbeOutcome {
    Pass(Option<String>),
    Warn(Option<String>, String),
    Reject(Option<String>, String),
    Error(Option<BoxError>),
}

impl ProbeOutcome {
    pub fn pass(prop: impl Into<String>) -> Self {
        Self::Pass(Some(prop.into()))
    }

    pub fn warn(prop: Option<String>, msg: impl Into<String>) -> Self {
        Self::Warn(prop, msg.into())
    }

    pub fn reject(prop: Option<String>, msg: impl Into<String>) -> Self {
        Self::Reject(prop, msg.into())
    }

    pub fn error(err: impl Into<BoxError>) -> Self {
        Self::Error(Some(err.into()))
    }
}

type Check = Box<dyn Fn() -> ProbeOutcome>;

/// A node in the probe tree. The root has an empty path and no check.
pub struct Probes {
    desc: ProbeDescriptor,
    check: Option<Check>,
    children: Vec<Probes>,
}

impl Probes {
    pub fn new() -> Self {
        Self {
            desc: ProbeDescriptor::new(ProbePath::root(), ""),
            check: None,
            children: Vec::new(),
        }
    }

    /// Adds a child probe and returns it so that nested probes can be added.
    pub fn add<F>(&mut self, id: &str, display_name: &str, check: F) -> &mut Probes
    where
        F: Fn() -> ProbeOutcome + 'static,
    {
        let node = Probes {
            desc: ProbeDescriptor::new(self.desc.path.join(id), display_name),
            check: Some(Box::new(check)),
            children: Vec::new(),
        };
        self.children.push(node);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn len(&self) -> usize {
        let own = usize::from(self.check.is_some());
        own + self.children.iter().map(Probes::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn report(&self, reporter: &mut dyn Reporter) -> Result<()> {
        if let Some(check) = &self.check {
            trace!(path = %self.desc.path, "running probe");
            match check() {
                ProbeOutcome::Pass(prop) => reporter.pass(&self.desc, as_prop(&prop))?,
                ProbeOutcome::Warn(prop, msg) => reporter.warn(&self.desc, as_prop(&prop), &msg)?,
                ProbeOutcome::Reject(prop, msg) => {
                    reporter.reject(&self.desc, as_prop(&prop), &msg)?
                }
                ProbeOutcome::Error(err) => reporter.error(&self.desc, as_error(&err))?,
            }
        }

        for child in &self.children {
            child.report(reporter)?;
        }
        Ok(())
    }
}

fn as_prop(prop: &Option<String>) -> Option<&dyn ProbedProp> {
    prop.as_ref().map(|p| p as &dyn ProbedProp)
}

fn as_error(err: &Option<BoxError>) -> Option<&(dyn Error + 'static)> {
    err.as_deref().map(|e| e as &(dyn Error + 'static))
}

impl Default for Probes {
    fn default() -> Self {
        Self::new()
    }
}

impl Probe for Probes {
    fn probe(&self, reporter: &mut dyn Reporter) -> Result<()> {
        self.report(reporter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::ProbeDesc;
    use std::io;

    /// Records `(path, category)` for every callback.
    #[derive(Default)]
    struct Trace(Vec<(String, &'static str)>);

    impl Trace {
        fn push(&mut self, desc: &dyn ProbeDesc, category: &'static str) -> io::Result<()> {
            self.0.push((desc.path().join("/"), category));
            Ok(())
        }
    }

    impl Reporter for Trace {
        fn pass(&mut self, d: &dyn ProbeDesc, _: Option<&dyn ProbedProp>) -> io::Result<()> {
            self.push(d, "pass")
        }

        fn warn(
            &mut self,
            d: &dyn ProbeDesc,
            _: Option<&dyn ProbedProp>,
            _: &str,
        ) -> io::Result<()> {
            self.push(d, "warning")
        }

        fn reject(
            &mut self,
            d: &dyn ProbeDesc,
            _: Option<&dyn ProbedProp>,
            _: &str,
        ) -> io::Result<()> {
            self.push(d, "rejected")
        }

        fn error(
            &mut self,
            d: &dyn ProbeDesc,
            _: Option<&(dyn Error + 'static)>,
        ) -> io::Result<()> {
            self.push(d, "error")
        }
    }

    #[test]
    fn walks_depth_first_in_insertion_order() {
        let mut probes = Probes::new();
        let os = probes.add("os", "Operating system", || ProbeOutcome::pass("Linux"));
        os.add("kernel", "Kernel", || ProbeOutcome::warn(None, "old"));
        probes.add("arch", "Arch", || ProbeOutcome::reject(None, "nope"));
        probes.add("cpu", "CPU", || ProbeOutcome::error("boom"));

        let mut trace = Trace::default();
        probes.probe(&mut trace).unwrap();

        assert_eq!(
            trace.0,
            vec![
                ("os".to_string(), "pass"),
                ("os/kernel".to_string(), "warning"),
                ("arch".to_string(), "rejected"),
                ("cpu".to_string(), "error"),
            ]
        );
        assert_eq!(probes.len(), 4);
    }

    #[test]
    fn empty_tree_reports_nothing() {
        let probes = Probes::new();
        let mut trace = Trace::default();
        probes.probe(&mut trace).unwrap();
        assert!(trace.0.is_empty());
        assert!(probes.is_empty());
    }
}
