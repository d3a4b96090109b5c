//! Resolved settings and well-known constants
//!
//! The original installer hard-codes everything; here the same defaults are
//! kept but every path can be overridden via a flag or environment variable
//! so the orchestrator can be exercised against a throwaway directory tree.

use std::path::PathBuf;

/// Name of the installable application bundle, expected next to the setup tool
pub const BUNDLE_NAME: &str = "JPG Optimizer Pro.app";

/// Entry point of the Streamlit web variant
pub const APP_ENTRY: &str = "app.py";

/// Dependency manifest consumed by the web variant
pub const REQUIREMENTS_MANIFEST: &str = "requirements.txt";

/// Module whose importability gates the web variant
pub const SERVER_MODULE: &str = "streamlit";

/// Required libraries as (pip package, import module) pairs.
/// Install success is defined by the import succeeding, not by pip's exit code.
pub const REQUIRED_PACKAGES: &[(&str, &str)] = &[("Pillow", "PIL"), ("piexif", "piexif")];

/// Well-known Homebrew prefixes where the MozJPEG cjpeg binary may live
pub const CJPEG_PROBE_PATHS: &[&str] = &[
    "/opt/homebrew/opt/mozjpeg/bin/cjpeg",
    "/usr/local/opt/mozjpeg/bin/cjpeg",
];

/// Homebrew formula for the optional accelerator
pub const BREW_FORMULA: &str = "mozjpeg";

/// Raw override values collected from the CLI (flags or environment)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub python: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub applications_dir: Option<PathBuf>,
    pub cjpeg: Option<PathBuf>,
    pub verbose: bool,
}

/// Fully resolved settings used by every command
#[derive(Debug, Clone)]
pub struct Settings {
    /// Explicit interpreter path, if the user pinned one
    pub python_override: Option<PathBuf>,
    /// Directory holding the app bundle / web app
    pub source_dir: PathBuf,
    /// Destination applications directory
    pub applications_dir: PathBuf,
    /// Explicit cjpeg path, checked before the Homebrew prefixes
    pub cjpeg_override: Option<PathBuf>,
    pub verbose: bool,
}

impl Settings {
    /// Resolve settings from CLI overrides, falling back to the defaults
    /// the original installer hard-coded.
    pub fn resolve(overrides: &Overrides) -> Self {
        Self {
            python_override: overrides.python.clone(),
            source_dir: overrides.source_dir.clone().unwrap_or_else(exe_dir),
            applications_dir: overrides
                .applications_dir
                .clone()
                .unwrap_or_else(default_applications_dir),
            cjpeg_override: overrides.cjpeg.clone(),
            verbose: overrides.verbose,
        }
    }

    /// Path where the bundle is expected next to the setup tool
    pub fn bundle_source(&self) -> PathBuf {
        self.source_dir.join(BUNDLE_NAME)
    }

    /// Path the bundle is installed to
    pub fn bundle_destination(&self) -> PathBuf {
        self.applications_dir.join(BUNDLE_NAME)
    }

    /// Candidate cjpeg locations, override first
    pub fn cjpeg_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(ref path) = self.cjpeg_override {
            candidates.push(path.clone());
        }
        candidates.extend(CJPEG_PROBE_PATHS.iter().map(PathBuf::from));
        candidates
    }
}

/// Directory the setup executable itself lives in
fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_applications_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        PathBuf::from("/Applications")
    } else {
        dirs::home_dir()
            .map(|home| home.join("Applications"))
            .unwrap_or_else(|| PathBuf::from("/Applications"))
    }
}
