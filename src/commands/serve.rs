//! Serve command implementation: the web-launcher variant
//!
//! Two gates instead of six phases: the interpreter must be present, and the
//! web-serving library must be importable. On an import miss the declared
//! dependency manifest is installed and the import re-checked; only the
//! re-check decides success. The server then runs in the foreground and
//! occupies the terminal until interrupted.

use std::process::Command;

use crate::config::{APP_ENTRY, Overrides, REQUIREMENTS_MANIFEST, SERVER_MODULE, Settings};
use crate::error::{Result, SetupError};
use crate::manifest::Manifest;
use crate::probe::{EnvironmentProbe, SystemProbe};
use crate::ui;

pub fn run(overrides: &Overrides) -> Result<()> {
    let settings = Settings::resolve(overrides);
    let probe = SystemProbe::new(settings.verbose);

    let interpreter = probe
        .find_interpreter(settings.python_override.as_deref())
        .ok_or(SetupError::InterpreterNotFound)?;
    ui::info(&format!(
        "{} ({})",
        interpreter.version,
        interpreter.path.display()
    ));

    let app_entry = settings.source_dir.join(APP_ENTRY);
    if !app_entry.exists() {
        return Err(SetupError::AppEntryNotFound {
            path: app_entry.display().to_string(),
        });
    }

    if !probe.import_ok(&interpreter.path, SERVER_MODULE) {
        let manifest_path = settings.source_dir.join(REQUIREMENTS_MANIFEST);
        let manifest = Manifest::load(&manifest_path)?;
        if manifest.is_empty() {
            ui::warn(&format!("{} lists no packages", manifest_path.display()));
        } else {
            ui::info(&format!(
                "Installing {} package(s) from {}",
                manifest.packages.len(),
                manifest_path.display()
            ));
        }

        // pip's exit status is advisory; the import re-check decides
        probe.install_manifest(&interpreter.path, &manifest_path);

        if !probe.import_ok(&interpreter.path, SERVER_MODULE) {
            return Err(SetupError::ImportVerificationFailed {
                packages: SERVER_MODULE.to_string(),
            });
        }
    }

    ui::info(&format!("Starting {SERVER_MODULE} (Ctrl-C to stop)"));
    let status = Command::new(&interpreter.path)
        .args(["-m", SERVER_MODULE, "run", APP_ENTRY])
        .current_dir(&settings.source_dir)
        .status()
        .map_err(|e| SetupError::ServerSpawnFailed {
            reason: e.to_string(),
        })?;

    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}
