pub use crate::errors::{Result, SysinfoError};

pub mod cli;
pub mod errors;
pub mod logging;
pub mod probes;
pub mod report;
pub mod sysinfo;
