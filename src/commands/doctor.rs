//! Doctor command implementation
//!
//! Read-only environment report: runs the same checks as the install phases
//! but never prompts, never installs and never writes. Always exits 0; the
//! report itself is the product.

use crate::bootstrap::report::{AcceleratorStatus, BootstrapReport, PackageStatus};
use crate::cli::DoctorArgs;
use crate::config::{APP_ENTRY, Overrides, REQUIRED_PACKAGES, SERVER_MODULE, Settings};
use crate::error::{Result, SetupError};
use crate::probe::{EnvironmentProbe, SystemProbe};
use crate::ui;

pub fn run(overrides: &Overrides, args: DoctorArgs) -> Result<()> {
    let settings = Settings::resolve(overrides);
    let probe = SystemProbe::new(settings.verbose);
    let report = collect(&probe, &settings);

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| SetupError::IoError {
            message: format!("Failed to serialize report: {e}"),
            source: Some(Box::new(e)),
        })?;
        println!("{json}");
    } else {
        ui::summary::print_summary(&report);
    }
    Ok(())
}

fn collect(probe: &dyn EnvironmentProbe, settings: &Settings) -> BootstrapReport {
    let mut report = BootstrapReport::new();

    let interpreter = probe.find_interpreter(settings.python_override.as_deref());
    if let Some(ref interpreter) = interpreter {
        report.interpreter = Some(interpreter.into());
        report.packages = REQUIRED_PACKAGES
            .iter()
            .map(|(package, module)| PackageStatus {
                package: (*package).to_string(),
                module: (*module).to_string(),
                importable: probe.import_ok(&interpreter.path, module),
            })
            .collect();
        report.web_server_ready = Some(probe.import_ok(&interpreter.path, SERVER_MODULE));
    }

    report.accelerator = settings
        .cjpeg_candidates()
        .into_iter()
        .find(|path| probe.path_exists(path))
        .map_or(AcceleratorStatus::Missing, |path| {
            AcceleratorStatus::Found { path }
        });

    let bundle = settings.bundle_source();
    if probe.path_exists(&bundle) {
        report.bundle_source = Some(bundle);
    } else if probe.path_exists(&settings.source_dir.join(APP_ENTRY)) {
        // Web-only distribution: no .app bundle, just the Streamlit entry
        report.bundle_source = None;
    }

    report
}
