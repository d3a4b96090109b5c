//! Final summary rendering for install and doctor runs

use console::Style;

use crate::bootstrap::report::{AcceleratorStatus, BootstrapReport, InstallOutcome};

fn label(text: &str) -> console::StyledObject<String> {
    Style::new().bold().apply_to(format!("  {text:<12}"))
}

/// Print the human-readable summary of a bootstrap run
pub fn print_summary(report: &BootstrapReport) {
    println!();
    println!("{}", Style::new().bold().green().apply_to("Summary"));

    match &report.interpreter {
        Some(interpreter) => println!(
            "{} {} ({})",
            label("Python:"),
            interpreter.version,
            interpreter.path.display()
        ),
        None => println!("{} not found", label("Python:")),
    }

    if !report.packages.is_empty() {
        let missing: Vec<&str> = report
            .packages
            .iter()
            .filter(|p| !p.importable)
            .map(|p| p.package.as_str())
            .collect();
        if missing.is_empty() {
            let suffix = if report.installed_via_pip {
                " (installed this run)"
            } else {
                ""
            };
            println!("{} all importable{}", label("Libraries:"), suffix);
        } else {
            println!("{} missing: {}", label("Libraries:"), missing.join(", "));
        }
    }

    match &report.accelerator {
        AcceleratorStatus::Found { path } => {
            println!("{} {}", label("MozJPEG:"), path.display());
        }
        AcceleratorStatus::Installed { path } => {
            println!("{} installed at {}", label("MozJPEG:"), path.display());
        }
        AcceleratorStatus::Declined => {
            println!("{} skipped (Pillow-only compression)", label("MozJPEG:"));
        }
        AcceleratorStatus::BrewUnavailable => {
            println!("{} unavailable, Homebrew not found", label("MozJPEG:"));
        }
        AcceleratorStatus::InstallFailed => {
            println!("{} install failed (Pillow-only compression)", label("MozJPEG:"));
        }
        AcceleratorStatus::Missing => {
            println!("{} not found", label("MozJPEG:"));
        }
    }

    match &report.install {
        InstallOutcome::Installed { destination } => {
            println!("{} installed to {}", label("App:"), destination.display());
        }
        InstallOutcome::RunFromSource { source } => {
            println!("{} running from {}", label("App:"), source.display());
        }
        InstallOutcome::NotAttempted => match &report.bundle_source {
            Some(source) => println!("{} present at {}", label("App:"), source.display()),
            None => println!("{} not found", label("App:")),
        },
    }

    if let Some(ready) = report.web_server_ready {
        let status = if ready { "streamlit importable" } else { "streamlit missing" };
        println!("{} {}", label("Web:"), status);
    }

    if matches!(report.install, InstallOutcome::Installed { .. } | InstallOutcome::RunFromSource { .. }) {
        let launched = if report.launched { "yes" } else { "no" };
        println!("{} {}", label("Launched:"), launched);
    }
    println!();
}
