//! The bootstrap orchestrator
//!
//! Brings the environment to a runnable state in six strictly linear phases:
//!
//! 1. Interpreter check (fatal on miss)
//! 2. Required libraries, where "installed" means "importable" (fatal on miss)
//! 3. Optional MozJPEG accelerator (informational only)
//! 4. Application bundle presence (fatal on miss)
//! 5. Consent-gated install-copy, remove-then-copy, quarantine cleared
//! 6. Consent-gated detached launch
//!
//! No loops, no backward transitions. A declined optional step is a skip,
//! not a failure; the process still exits 0.

use std::path::PathBuf;

use crate::config::{BREW_FORMULA, REQUIRED_PACKAGES, Settings};
use crate::error::{Result, SetupError};
use crate::probe::{EnvironmentProbe, Interpreter};
use crate::ui::{self, Confirmer};

pub mod report;


pub use report::{AcceleratorStatus, BootstrapReport, InstallOutcome, PackageStatus};

const PHASES: usize = 6;

pub struct Bootstrap<'a> {
    probe: &'a dyn EnvironmentProbe,
    confirmer: &'a dyn Confirmer,
    settings: &'a Settings,
}

impl<'a> Bootstrap<'a> {
    pub fn new(
        probe: &'a dyn EnvironmentProbe,
        confirmer: &'a dyn Confirmer,
        settings: &'a Settings,
    ) -> Self {
        Self {
            probe,
            confirmer,
            settings,
        }
    }

    /// Run all six phases, threading the result record through each
    pub fn run(&self) -> Result<BootstrapReport> {
        let (report, interpreter) = self.check_interpreter(BootstrapReport::new())?;
        let report = self.ensure_libraries(report, &interpreter)?;
        let report = self.probe_accelerator(report)?;
        let report = self.check_bundle(report)?;
        let report = self.guarded_install(report)?;
        let report = self.offer_launch(report)?;
        Ok(report)
    }

    /// Phase 1: a discoverable Python interpreter is non-negotiable
    fn check_interpreter(
        &self,
        mut report: BootstrapReport,
    ) -> Result<(BootstrapReport, Interpreter)> {
        ui::phase(1, PHASES, "Checking Python interpreter");
        let interpreter = self
            .probe
            .find_interpreter(self.settings.python_override.as_deref())
            .ok_or(SetupError::InterpreterNotFound)?;
        ui::success(&format!(
            "{} ({})",
            interpreter.version,
            interpreter.path.display()
        ));
        report.interpreter = Some((&interpreter).into());
        Ok((report, interpreter))
    }

    /// Phase 2: required libraries, verified by import rather than by pip
    fn ensure_libraries(
        &self,
        mut report: BootstrapReport,
        interpreter: &Interpreter,
    ) -> Result<BootstrapReport> {
        ui::phase(2, PHASES, "Checking required libraries");

        let all_importable = REQUIRED_PACKAGES
            .iter()
            .all(|(_, module)| self.probe.import_ok(&interpreter.path, module));

        if all_importable {
            report.packages = REQUIRED_PACKAGES
                .iter()
                .map(|(package, module)| PackageStatus {
                    package: (*package).to_string(),
                    module: (*module).to_string(),
                    importable: true,
                })
                .collect();
            ui::success("all libraries importable");
            return Ok(report);
        }

        // Any miss installs the full fixed set, mirroring the original
        // installer; pip skips whatever is already present.
        let package_names: Vec<&str> = REQUIRED_PACKAGES
            .iter()
            .map(|(package, _)| *package)
            .collect();
        ui::info(&format!("Installing: {}", package_names.join(", ")));

        if !self.probe.upgrade_installer(&interpreter.path) && self.settings.verbose {
            ui::warn("pip self-upgrade failed; continuing");
        }

        if !self.probe.install_packages(&interpreter.path, &package_names) {
            // pip exit codes are unreliable across environments; the import
            // re-check below is what decides success.
            ui::info("pip reported a failure; verifying imports anyway");
        }
        report.installed_via_pip = true;

        report.packages = REQUIRED_PACKAGES
            .iter()
            .map(|(package, module)| PackageStatus {
                package: (*package).to_string(),
                module: (*module).to_string(),
                importable: self.probe.import_ok(&interpreter.path, module),
            })
            .collect();

        let still_missing: Vec<&str> = report
            .packages
            .iter()
            .filter(|status| !status.importable)
            .map(|status| status.package.as_str())
            .collect();

        if !still_missing.is_empty() {
            return Err(SetupError::ImportVerificationFailed {
                packages: still_missing.join(", "),
            });
        }

        ui::success("all libraries importable");
        Ok(report)
    }

    /// Phase 3: optional accelerator; every outcome here is soft
    fn probe_accelerator(&self, mut report: BootstrapReport) -> Result<BootstrapReport> {
        ui::phase(3, PHASES, "Checking for MozJPEG (optional)");

        if let Some(path) = self.find_cjpeg() {
            ui::success(&format!("cjpeg found at {}", path.display()));
            report.accelerator = AcceleratorStatus::Found { path };
            return Ok(report);
        }

        if !self
            .confirmer
            .confirm("MozJPEG not found. Install it via Homebrew?", true)?
        {
            ui::info("Skipping MozJPEG; Pillow compression will be used");
            report.accelerator = AcceleratorStatus::Declined;
            return Ok(report);
        }

        if !self.probe.brew_available() {
            ui::warn("Homebrew not found; continuing without MozJPEG");
            report.accelerator = AcceleratorStatus::BrewUnavailable;
            return Ok(report);
        }

        if self.probe.brew_install(BREW_FORMULA) {
            match self.find_cjpeg() {
                Some(path) => {
                    ui::success(&format!("cjpeg installed at {}", path.display()));
                    report.accelerator = AcceleratorStatus::Installed { path };
                }
                None => {
                    ui::warn("brew finished but cjpeg was not found at a known prefix");
                    report.accelerator = AcceleratorStatus::Missing;
                }
            }
        } else {
            ui::warn("Homebrew install failed; continuing without MozJPEG");
            report.accelerator = AcceleratorStatus::InstallFailed;
        }
        Ok(report)
    }

    /// Phase 4: the bundle must sit next to the setup tool
    fn check_bundle(&self, mut report: BootstrapReport) -> Result<BootstrapReport> {
        ui::phase(4, PHASES, "Checking application bundle");
        let source = self.settings.bundle_source();
        if !self.probe.path_exists(&source) {
            return Err(SetupError::BundleNotFound {
                path: source.display().to_string(),
            });
        }
        ui::success(&format!("bundle at {}", source.display()));
        report.bundle_source = Some(source);
        Ok(report)
    }

    /// Phase 5: consent-gated install-copy
    fn guarded_install(&self, mut report: BootstrapReport) -> Result<BootstrapReport> {
        ui::phase(5, PHASES, "Installing application");
        let source = self.settings.bundle_source();
        let destination = self.settings.bundle_destination();

        let prompt = format!("Install to {}?", self.settings.applications_dir.display());
        if !self.confirmer.confirm(&prompt, true)? {
            ui::info(&format!(
                "Skipping install; the app can run from {}",
                source.display()
            ));
            report.install = InstallOutcome::RunFromSource { source };
            return Ok(report);
        }

        // Remove-then-copy: the destination must never end up as a merge
        // of old and new bundle contents.
        if self.probe.path_exists(&destination) {
            ui::info(&format!(
                "Removing previous install at {}",
                destination.display()
            ));
            self.probe.remove_bundle(&destination)?;
        }
        self.probe.copy_bundle(&source, &destination)?;

        if let Err(e) = self.probe.clear_quarantine(&destination) {
            ui::warn(&format!("Could not clear the quarantine attribute: {e}"));
        }

        ui::success(&format!("Installed to {}", destination.display()));
        report.install = InstallOutcome::Installed { destination };
        Ok(report)
    }

    /// Phase 6: consent-gated detached launch, fire-and-forget
    fn offer_launch(&self, mut report: BootstrapReport) -> Result<BootstrapReport> {
        ui::phase(6, PHASES, "Launch");
        let target = match &report.install {
            InstallOutcome::Installed { destination } => destination.clone(),
            InstallOutcome::RunFromSource { source } => source.clone(),
            InstallOutcome::NotAttempted => return Ok(report),
        };

        if !self
            .confirmer
            .confirm("Launch JPG Optimizer Pro now?", true)?
        {
            ui::info("Not launching");
            return Ok(report);
        }

        match self.probe.launch_detached(&target) {
            Ok(()) => {
                ui::success("Launched");
                report.launched = true;
            }
            Err(e) => ui::warn(&format!("Could not launch automatically: {e}")),
        }
        Ok(report)
    }

    fn find_cjpeg(&self) -> Option<PathBuf> {
        self.settings
            .cjpeg_candidates()
            .into_iter()
            .find(|path| self.probe.path_exists(path))
    }
}
