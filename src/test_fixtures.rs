//! Test doubles for the orchestrator: an in-memory environment probe and a
//! scripted confirmation source

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};
use crate::probe::{EnvironmentProbe, Interpreter};
use crate::ui::Confirmer;

/// In-memory [`EnvironmentProbe`] that records every remediation and
/// filesystem operation it is asked to perform.
#[derive(Default)]
pub struct MockProbe {
    pub interpreter: Option<Interpreter>,
    /// Modules currently importable
    pub importable: RefCell<HashSet<String>>,
    /// Modules that become importable once pip runs
    pub install_provides: Vec<String>,
    /// What pip's exit status claims, independent of what imports say
    pub installer_status_ok: bool,
    pub existing_paths: RefCell<HashSet<PathBuf>>,
    pub brew_present: bool,
    pub brew_install_ok: bool,
    /// Path that appears after a successful brew install
    pub brew_provides: Option<PathBuf>,
    pub fail_copy: bool,
    pub fail_launch: bool,
    pub ops: RefCell<Vec<String>>,
}

impl MockProbe {
    /// Probe with a working interpreter and a well-behaved pip
    pub fn with_python() -> Self {
        Self {
            interpreter: Some(Interpreter {
                path: PathBuf::from("/usr/bin/python3"),
                version: "Python 3.12.4".to_string(),
            }),
            installer_status_ok: true,
            ..Default::default()
        }
    }

    pub fn add_path(&self, path: impl Into<PathBuf>) {
        self.existing_paths.borrow_mut().insert(path.into());
    }

    pub fn add_module(&self, module: &str) {
        self.importable.borrow_mut().insert(module.to_string());
    }

    pub fn has_path(&self, path: &Path) -> bool {
        self.existing_paths.borrow().contains(path)
    }

    pub fn op_log(&self) -> Vec<String> {
        self.ops.borrow().clone()
    }

    fn record(&self, op: String) {
        self.ops.borrow_mut().push(op);
    }
}

impl EnvironmentProbe for MockProbe {
    fn find_interpreter(&self, _override_path: Option<&Path>) -> Option<Interpreter> {
        self.interpreter.clone()
    }

    fn import_ok(&self, _python: &Path, module: &str) -> bool {
        self.importable.borrow().contains(module)
    }

    fn upgrade_installer(&self, _python: &Path) -> bool {
        self.record("pip-upgrade".to_string());
        true
    }

    fn install_packages(&self, _python: &Path, packages: &[&str]) -> bool {
        self.record(format!("pip-install {}", packages.join(" ")));
        for module in &self.install_provides {
            self.importable.borrow_mut().insert(module.clone());
        }
        self.installer_status_ok
    }

    fn install_manifest(&self, _python: &Path, manifest: &Path) -> bool {
        self.record(format!("pip-install -r {}", manifest.display()));
        for module in &self.install_provides {
            self.importable.borrow_mut().insert(module.clone());
        }
        self.installer_status_ok
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.existing_paths.borrow().contains(path)
    }

    fn brew_available(&self) -> bool {
        self.brew_present
    }

    fn brew_install(&self, formula: &str) -> bool {
        self.record(format!("brew-install {formula}"));
        if self.brew_install_ok {
            if let Some(ref path) = self.brew_provides {
                self.existing_paths.borrow_mut().insert(path.clone());
            }
        }
        self.brew_install_ok
    }

    fn remove_bundle(&self, path: &Path) -> Result<()> {
        self.record(format!("remove {}", path.display()));
        self.existing_paths.borrow_mut().remove(path);
        Ok(())
    }

    fn copy_bundle(&self, src: &Path, dst: &Path) -> Result<()> {
        self.record(format!("copy {} -> {}", src.display(), dst.display()));
        if self.fail_copy {
            return Err(SetupError::CopyFailed {
                path: dst.display().to_string(),
                reason: "mock copy failure".to_string(),
            });
        }
        self.existing_paths.borrow_mut().insert(dst.to_path_buf());
        Ok(())
    }

    fn clear_quarantine(&self, path: &Path) -> Result<()> {
        self.record(format!("clear-quarantine {}", path.display()));
        Ok(())
    }

    fn launch_detached(&self, path: &Path) -> Result<()> {
        self.record(format!("launch {}", path.display()));
        if self.fail_launch {
            return Err(SetupError::LaunchFailed {
                path: path.display().to_string(),
                reason: "mock launch failure".to_string(),
            });
        }
        Ok(())
    }
}

/// Confirmer that replays a fixed sequence of answers
pub struct ScriptedConfirmer {
    answers: RefCell<VecDeque<bool>>,
}

impl ScriptedConfirmer {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
        }
    }

    /// Whether every scripted answer was consumed
    pub fn exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| SetupError::PromptFailed {
                reason: format!("no scripted answer for: {prompt}"),
            })
    }
}
