//! Environment probing and remediation capabilities
//!
//! The orchestrator never touches the filesystem or spawns processes
//! directly; everything goes through [`EnvironmentProbe`] so the bootstrap
//! decision flow can be tested against an in-memory double.

use std::path::{Path, PathBuf};

use crate::error::Result;

pub mod system;

pub use system::SystemProbe;

/// A discovered Python interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    pub path: PathBuf,
    /// Version string as reported by `--version`, e.g. "Python 3.12.4"
    pub version: String,
}

/// Capability seam over the host environment.
///
/// Remediation methods (`upgrade_installer`, `install_packages`,
/// `install_manifest`, `brew_install`) return whether the underlying command
/// reported success, but callers must not treat that as authoritative:
/// installation success is defined by a subsequent import check.
pub trait EnvironmentProbe {
    /// Locate a usable interpreter, preferring the override when given
    fn find_interpreter(&self, override_path: Option<&Path>) -> Option<Interpreter>;

    /// Whether `import <module>` succeeds under the given interpreter
    fn import_ok(&self, python: &Path, module: &str) -> bool;

    /// Best-effort `pip install --upgrade pip`
    fn upgrade_installer(&self, python: &Path) -> bool;

    /// `pip install` the given packages
    fn install_packages(&self, python: &Path, packages: &[&str]) -> bool;

    /// `pip install -r` the given manifest
    fn install_manifest(&self, python: &Path, manifest: &Path) -> bool;

    /// Whether a path exists on the host filesystem
    fn path_exists(&self, path: &Path) -> bool;

    /// Whether the Homebrew package manager is available
    fn brew_available(&self) -> bool;

    /// `brew install <formula>`
    fn brew_install(&self, formula: &str) -> bool;

    /// Remove an installed bundle entirely
    fn remove_bundle(&self, path: &Path) -> Result<()>;

    /// Copy the bundle directory recursively; never merges into an
    /// existing destination, callers remove it first
    fn copy_bundle(&self, src: &Path, dst: &Path) -> Result<()>;

    /// Clear the OS quarantine attribute that gates first execution
    fn clear_quarantine(&self, path: &Path) -> Result<()>;

    /// Start the application detached and return immediately
    fn launch_detached(&self, path: &Path) -> Result<()>;
}
