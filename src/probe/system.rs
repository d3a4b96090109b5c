//! Real [`EnvironmentProbe`] backed by process spawns and the filesystem

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::common::fs::{CopyOptions, copy_dir_recursive, count_files};
use crate::error::{Result, SetupError};
use crate::probe::{EnvironmentProbe, Interpreter};
use crate::progress::CopyProgress;

/// Interpreter names tried on PATH, in order
const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];

/// Opener command override, mainly for tests and unusual desktops
const OPEN_CMD_ENV: &str = "JPGOPT_OPEN";

pub struct SystemProbe {
    verbose: bool,
}

impl SystemProbe {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Run an interpreter with `--version` and return the trimmed banner
    fn query_version(path: &Path) -> Option<String> {
        let output = Command::new(path)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        // Python 2 printed the banner to stderr; tolerate both streams
        let banner = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr).trim().to_string()
        } else {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        };
        if banner.is_empty() { None } else { Some(banner) }
    }

    fn run_pip(&self, python: &Path, args: &[&str]) -> bool {
        let mut cmd = Command::new(python);
        cmd.args(["-m", "pip"]).args(args).arg("--quiet");
        if self.verbose {
            eprintln!("Running: {} -m pip {}", python.display(), args.join(" "));
        }
        cmd.status().map(|s| s.success()).unwrap_or(false)
    }

    fn opener_command() -> String {
        if let Ok(cmd) = std::env::var(OPEN_CMD_ENV) {
            return cmd;
        }
        if cfg!(target_os = "macos") {
            "open".to_string()
        } else {
            "xdg-open".to_string()
        }
    }
}

impl EnvironmentProbe for SystemProbe {
    fn find_interpreter(&self, override_path: Option<&Path>) -> Option<Interpreter> {
        let candidates: Vec<PathBuf> = match override_path {
            Some(path) => vec![path.to_path_buf()],
            None => INTERPRETER_CANDIDATES.iter().map(PathBuf::from).collect(),
        };

        for path in candidates {
            if let Some(version) = Self::query_version(&path) {
                return Some(Interpreter { path, version });
            }
        }
        None
    }

    fn import_ok(&self, python: &Path, module: &str) -> bool {
        Command::new(python)
            .args(["-c", &format!("import {module}")])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn upgrade_installer(&self, python: &Path) -> bool {
        self.run_pip(python, &["install", "--upgrade", "pip"])
    }

    fn install_packages(&self, python: &Path, packages: &[&str]) -> bool {
        let mut args = vec!["install"];
        args.extend_from_slice(packages);
        self.run_pip(python, &args)
    }

    fn install_manifest(&self, python: &Path, manifest: &Path) -> bool {
        let manifest = manifest.display().to_string();
        self.run_pip(python, &["install", "-r", &manifest])
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn brew_available(&self) -> bool {
        Command::new("brew")
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn brew_install(&self, formula: &str) -> bool {
        // Inherit stdio so the user sees brew's own progress output
        Command::new("brew")
            .args(["install", formula])
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn remove_bundle(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        std::fs::remove_dir_all(path).map_err(|e| SetupError::RemoveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn copy_bundle(&self, src: &Path, dst: &Path) -> Result<()> {
        let options = CopyOptions::exclude_mac_cruft();
        let total = count_files(src, &options);
        let progress = CopyProgress::new(total as u64);

        let result = copy_dir_recursive(src, dst, &options, &mut |file| {
            progress.file_copied(&file.display().to_string());
        });

        match result {
            Ok(()) => {
                progress.finish();
                Ok(())
            }
            Err(e) => {
                progress.abandon();
                Err(SetupError::CopyFailed {
                    path: dst.display().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    fn clear_quarantine(&self, path: &Path) -> Result<()> {
        if !cfg!(target_os = "macos") {
            return Ok(());
        }
        let status = Command::new("xattr")
            .arg("-cr")
            .arg(path)
            .status()
            .map_err(|e| SetupError::IoError {
                message: format!("Failed to run xattr: {e}"),
                source: Some(Box::new(e)),
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(SetupError::IoError {
                message: format!("xattr -cr {} exited with {status}", path.display()),
                source: None,
            })
        }
    }

    fn launch_detached(&self, path: &Path) -> Result<()> {
        let opener = Self::opener_command();
        // Fire and forget: spawn and drop the child handle without waiting
        Command::new(&opener)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| SetupError::LaunchFailed {
                path: path.display().to_string(),
                reason: format!("{opener}: {e}"),
            })
    }
}
