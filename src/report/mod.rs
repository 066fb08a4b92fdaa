//! Reporters for probe outcomes.
//!
//! - [`text::CliReporter`] streams one human-readable line per outcome.
//! - [`collect::ResultsCollector`] gathers records for JSON or YAML output.

use crate::probes::{ProbeDesc, ProbedProp};
use serde::Serialize;

pub mod collect;
pub mod text;

pub use collect::{collect_and_print, Encoder, ResultsCollector};
pub use text::CliReporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeCategory {
    Pass,
    Warning,
    Rejected,
    Error,
}

impl ProbeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ProbeCategory::Pass => "pass",
            ProbeCategory::Warning => "warning",
            ProbeCategory::Rejected => "rejected",
            ProbeCategory::Error => "error",
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(self, ProbeCategory::Rejected | ProbeCategory::Error)
    }
}

/// One probe outcome as emitted in structured output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProbeRecord {
    pub path: Option<Vec<String>>,
    pub display_name: String,
    pub prop: String,
    pub message: String,
    pub category: ProbeCategory,
    pub error: Option<String>,
}

/// `None` for an empty path so that it encodes as `null`.
pub(crate) fn probe_path(desc: &dyn ProbeDesc) -> Option<Vec<String>> {
    let path = desc.path();
    if path.is_empty() {
        None
    } else {
        Some(path.to_vec())
    }
}

pub(crate) fn prop_string(prop: Option<&dyn ProbedProp>) -> String {
    prop.map(|p| p.to_string()).unwrap_or_default()
}

/// Two spaces per nesting level below the top.
pub(crate) fn indent(desc: &dyn ProbeDesc) -> String {
    let depth = desc.path().len();
    if depth <= 1 {
        return String::new();
    }
    "  ".repeat(depth - 1)
}

/// The parenthesized category suffix, e.g. ` (warning: low memory)`.
pub(crate) fn build_msg(prop: &str, category: ProbeCategory, msg: &str) -> String {
    let mut buf = String::new();
    if !prop.is_empty() {
        buf.push(' ');
    }
    buf.push('(');
    buf.push_str(category.as_str());
    if !msg.is_empty() {
        buf.push_str(": ");
        buf.push_str(msg);
    }
    buf.push(')');
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::{ProbeDescriptor, ProbePath};

    fn desc(depth: usize) -> ProbeDescriptor {
        let path = (0..depth).fold(ProbePath::root(), |p, i| p.join(format!("p{i}")));
        ProbeDescriptor::new(path, "Probe")
    }

    #[test]
    fn indent_depends_only_on_path_length() {
        assert_eq!(indent(&desc(0)), "");
        assert_eq!(indent(&desc(1)), "");
        assert_eq!(indent(&desc(2)), "  ");
        assert_eq!(indent(&desc(4)), "      ");
    }

    #[test]
    fn build_msg_spacing_follows_prop() {
        assert_eq!(build_msg("Linux", ProbeCategory::Pass, ""), " (pass)");
        assert_eq!(build_msg("", ProbeCategory::Warning, ""), "(warning)");
        assert_eq!(
            build_msg("1", ProbeCategory::Rejected, "too few"),
            " (rejected: too few)"
        );
    }

    #[test]
    fn absent_prop_is_empty_string() {
        assert_eq!(prop_string(None), "");
        assert_eq!(prop_string(Some(&"x86_64" as &dyn ProbedProp)), "x86_64");
    }

    #[test]
    fn empty_path_becomes_none() {
        assert_eq!(probe_path(&desc(0)), None);
        assert_eq!(probe_path(&desc(1)), Some(vec!["p0".to_string()]));
    }

    #[test]
    fn only_rejected_and_error_are_failures() {
        assert!(!ProbeCategory::Pass.is_failure());
        assert!(!ProbeCategory::Warning.is_failure());
        assert!(ProbeCategory::Rejected.is_failure());
        assert!(ProbeCategory::Error.is_failure());
    }
}
