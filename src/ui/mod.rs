//! Terminal UI: confirmation prompts and styled output
//!
//! Prompting is a capability behind the [`Confirmer`] trait so the
//! orchestrator can be driven by a scripted answer source in tests and by
//! the `--yes` / `--no-input` flags in unattended runs.

use console::Style;
use inquire::Confirm;

use crate::error::{Result, SetupError};

pub mod summary;

/// Yes/no prompt capability
pub trait Confirmer {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Interactive prompt on the controlling terminal
pub struct InteractiveConfirmer;

impl Confirmer for InteractiveConfirmer {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new(prompt)
            .with_default(default)
            .with_help_message("Press Enter for the default, or answer y/n")
            .prompt()
            .map_err(|e| SetupError::PromptFailed {
                reason: e.to_string(),
            })
    }
}

/// Answers "yes" to everything (`--yes`)
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _prompt: &str, _default: bool) -> Result<bool> {
        Ok(true)
    }
}

/// Declines everything without reading stdin (`--no-input`)
pub struct AssumeNo;

impl Confirmer for AssumeNo {
    fn confirm(&self, _prompt: &str, _default: bool) -> Result<bool> {
        Ok(false)
    }
}

/// Print a numbered phase header
pub fn phase(current: usize, total: usize, message: &str) {
    println!(
        "{} {}",
        Style::new().bold().cyan().apply_to(format!("[{current}/{total}]")),
        message
    );
}

/// Informational line, indented under a phase header
pub fn info(message: &str) {
    println!("      {message}");
}

/// Success line
pub fn success(message: &str) {
    println!("      {} {}", Style::new().green().apply_to("ok:"), message);
}

/// Soft-failure line; the flow continues after these
pub fn warn(message: &str) {
    println!(
        "      {} {}",
        Style::new().yellow().bold().apply_to("warning:"),
        message
    );
}
