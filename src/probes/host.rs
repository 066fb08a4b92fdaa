//! The host probe set run by `preflight sysinfo`.
//!
//! Only std is used here. The set is small: operating system,
//! architecture, CPU threads, the data directory and a few role-specific
//! and debug probes.

use super::{ProbeOutcome, Probes};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the data directory.
pub const DATA_DIR_DEFAULT: &str = "/var/lib/preflight";

const KERNEL_RELEASE: &str = "/proc/sys/kernel/osrelease";
const PROC_SELF: &str = "/proc/self";

/// Which probes to run and where to look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysinfoSpec {
    pub controller_role_enabled: bool,
    pub worker_role_enabled: bool,
    pub data_dir: PathBuf,
    pub add_debug_probes: bool,
}

impl Default for SysinfoSpec {
    fn default() -> Self {
        Self {
            controller_role_enabled: true,
            worker_role_enabled: true,
            data_dir: PathBuf::from(DATA_DIR_DEFAULT),
            add_debug_probes: false,
        }
    }
}

impl SysinfoSpec {
    pub fn new_sysinfo_probes(&self) -> Probes {
        let mut probes = Probes::new();

        let os = probes.add("os", "Operating system", probe_os);
        os.add("kernel", "Kernel release", probe_kernel_release);

        probes.add("arch", "Machine architecture", || {
            ProbeOutcome::pass(std::env::consts::ARCH)
        });
        probes.add("cpu", "CPU threads", probe_cpu_threads);

        if self.controller_role_enabled || self.worker_role_enabled {
            let data_dir = self.data_dir.clone();
            probes.add("data-dir", "Data directory", move || {
                probe_data_dir(&data_dir)
            });
        }

        if self.worker_role_enabled {
            probes.add("procfs", "Process filesystem", || {
                probe_procfs(Path::new(PROC_SELF))
            });
        }

        if self.add_debug_probes {
            let debug = probes.add("debug", "Debug information", || ProbeOutcome::Pass(None));
            debug.add("exe", "Executable", || match std::env::current_exe() {
                Ok(path) => ProbeOutcome::pass(path.display().to_string()),
                Err(err) => ProbeOutcome::error(err),
            });
            debug.add("pid", "Process ID", || {
                ProbeOutcome::pass(std::process::id().to_string())
            });
        }

        probes
    }
}

fn probe_os() -> ProbeOutcome {
    match std::env::consts::OS {
        "linux" => ProbeOutcome::pass("Linux"),
        other => ProbeOutcome::warn(Some(other.to_string()), "only Linux is fully supported"),
    }
}

fn probe_kernel_release() -> ProbeOutcome {
    match fs::read_to_string(KERNEL_RELEASE) {
        Ok(release) => ProbeOutcome::pass(release.trim()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            ProbeOutcome::warn(None, "unable to determine kernel release")
        }
        Err(err) => ProbeOutcome::error(err),
    }
}

fn probe_cpu_threads() -> ProbeOutcome {
    match std::thread::available_parallelism() {
        Ok(n) => ProbeOutcome::pass(n.to_string()),
        Err(err) => ProbeOutcome::error(err),
    }
}

fn probe_data_dir(path: &Path) -> ProbeOutcome {
    let shown = Some(path.display().to_string());
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => ProbeOutcome::Pass(shown),
        Ok(_) => ProbeOutcome::reject(shown, "not a directory"),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            ProbeOutcome::warn(shown, "does not exist yet")
        }
        Err(err) => ProbeOutcome::error(err),
    }
}

fn probe_procfs(path: &Path) -> ProbeOutcome {
    if path.exists() {
        ProbeOutcome::pass("available")
    } else {
        ProbeOutcome::warn(None, "unavailable")
    }
}
