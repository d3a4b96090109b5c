//! The bootstrap result record
//!
//! One immutable-in-spirit record threaded through the sequential phases;
//! each phase returns an updated copy instead of mutating ambient state.
//! Serializable so `doctor --json` can emit it directly.

use serde::Serialize;
use std::path::PathBuf;

use crate::probe::Interpreter;

#[derive(Debug, Clone, Serialize)]
pub struct InterpreterInfo {
    pub path: PathBuf,
    pub version: String,
}

impl From<&Interpreter> for InterpreterInfo {
    fn from(interpreter: &Interpreter) -> Self {
        Self {
            path: interpreter.path.clone(),
            version: interpreter.version.clone(),
        }
    }
}

/// Import status of one required library
#[derive(Debug, Clone, Serialize)]
pub struct PackageStatus {
    /// pip package name, e.g. "Pillow"
    pub package: String,
    /// import module name, e.g. "PIL"
    pub module: String,
    pub importable: bool,
}

/// Outcome of the optional accelerator phase. Purely informational;
/// never affects the exit status.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AcceleratorStatus {
    /// cjpeg already present at a known prefix
    Found { path: PathBuf },
    /// Installed via Homebrew during this run
    Installed { path: PathBuf },
    /// Not present and not probed further (doctor, or nothing found after install)
    #[default]
    Missing,
    /// User declined the Homebrew install
    Declined,
    /// Homebrew itself is not available
    BrewUnavailable,
    /// Homebrew install attempt failed
    InstallFailed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InstallOutcome {
    /// Flow never reached the install phase (doctor, or a fatal earlier phase)
    #[default]
    NotAttempted,
    /// Bundle copied into the applications directory
    Installed { destination: PathBuf },
    /// User declined the copy; the app runs from the source location
    RunFromSource { source: PathBuf },
}

/// Result record of a bootstrap run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BootstrapReport {
    pub interpreter: Option<InterpreterInfo>,
    pub packages: Vec<PackageStatus>,
    /// Whether the dependency phase had to invoke pip
    pub installed_via_pip: bool,
    pub accelerator: AcceleratorStatus,
    pub bundle_source: Option<PathBuf>,
    pub install: InstallOutcome,
    pub launched: bool,
    /// Set by doctor only: whether the web server module is importable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_server_ready: Option<bool>,
}

impl BootstrapReport {
    pub fn new() -> Self {
        Self::default()
    }
}
