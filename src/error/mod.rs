//! Error types and handling for jpgopt-setup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Fatal precondition failures (missing interpreter, unimportable libraries,
//! missing bundle) carry actionable remediation hints in their `help` text;
//! optional-step failures never surface here, they are reported as
//! informational output and the flow continues.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for jpgopt-setup operations
#[derive(Error, Diagnostic, Debug)]
pub enum SetupError {
    // Environment errors
    #[error("No Python 3 interpreter found")]
    #[diagnostic(
        code(jpgopt::env::interpreter_not_found),
        help(
            "Install Python 3 from https://www.python.org/downloads/ (or `brew install python3`), then re-run"
        )
    )]
    InterpreterNotFound,

    #[error("Required libraries are not importable after install: {packages}")]
    #[diagnostic(
        code(jpgopt::env::import_verification_failed),
        help("Try `python3 -m pip install Pillow piexif` manually and re-run")
    )]
    ImportVerificationFailed { packages: String },

    // Bundle errors
    #[error("Application bundle not found: {path}")]
    #[diagnostic(
        code(jpgopt::bundle::not_found),
        help(
            "Run jpgopt-setup from the distribution directory containing 'JPG Optimizer Pro.app', or pass --source-dir"
        )
    )]
    BundleNotFound { path: String },

    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(code(jpgopt::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("Failed to copy bundle to {path}: {reason}")]
    #[diagnostic(code(jpgopt::fs::copy_failed))]
    CopyFailed { path: String, reason: String },

    #[error("Failed to launch {path}: {reason}")]
    #[diagnostic(code(jpgopt::launch::failed))]
    LaunchFailed { path: String, reason: String },

    // Web variant errors
    #[error("Web app entry point not found: {path}")]
    #[diagnostic(
        code(jpgopt::serve::app_not_found),
        help("The web variant expects app.py in the source directory; pass --source-dir")
    )]
    AppEntryNotFound { path: String },

    #[error("Requirements manifest not found: {path}")]
    #[diagnostic(
        code(jpgopt::serve::manifest_not_found),
        help("The web app ships a requirements.txt next to app.py")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to start web server: {reason}")]
    #[diagnostic(
        code(jpgopt::serve::spawn_failed),
        help("Check that streamlit is installed for the selected interpreter")
    )]
    ServerSpawnFailed { reason: String },

    // UI errors
    #[error("Failed to read confirmation: {reason}")]
    #[diagnostic(code(jpgopt::ui::prompt_failed))]
    PromptFailed { reason: String },

    // Generic I/O
    #[error("{message}")]
    #[diagnostic(code(jpgopt::io::error))]
    IoError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for jpgopt-setup operations
pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn test_interpreter_not_found_has_download_hint() {
        let err = SetupError::InterpreterNotFound;
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("python.org"));
    }

    #[test]
    fn test_bundle_not_found_display() {
        let err = SetupError::BundleNotFound {
            path: "/tmp/dist/JPG Optimizer Pro.app".to_string(),
        };
        assert!(err.to_string().contains("JPG Optimizer Pro.app"));
    }

    #[test]
    fn test_import_verification_lists_packages() {
        let err = SetupError::ImportVerificationFailed {
            packages: "Pillow, piexif".to_string(),
        };
        assert!(err.to_string().contains("Pillow"));
        assert!(err.to_string().contains("piexif"));
    }
}
