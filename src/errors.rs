//! Preflight error handling.
//!
//! Individual probe outcomes are never errors. Only sink failures, encoding
//! failures, bad input and the aggregate verdict surface here.

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = SysinfoError> = std::result::Result<T, E>;

#[derive(Error, Diagnostic, Debug)]
pub enum SysinfoError {
    /// At least one probe rejected or errored. Carries no per-probe detail.
    #[error("sysinfo failed")]
    #[diagnostic(
        code(preflight::sysinfo::failed),
        help("one or more probes were rejected or failed to run")
    )]
    Failed,

    #[error("unknown output format: {0:?}")]
    #[diagnostic(
        code(preflight::cli::output_format),
        help("valid values are: text, json, yaml")
    )]
    UnknownOutputFormat(String),

    #[error("failed to write report")]
    #[diagnostic(code(preflight::io::write))]
    Write(#[from] std::io::Error),

    #[error("failed to encode results as JSON")]
    #[diagnostic(code(preflight::encode::json))]
    Json(#[from] serde_json::Error),

    #[error("failed to encode results as YAML")]
    #[diagnostic(code(preflight::encode::yaml))]
    Yaml(#[from] serde_yaml::Error),

    /// The probe engine itself gave up, as opposed to a probe failing.
    #[error("probe engine error: {0}")]
    #[diagnostic(code(preflight::probe::engine))]
    Probe(String),
}
