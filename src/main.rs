//! jpgopt-setup - installer and launcher for JPG Optimizer Pro
//!
//! A command line tool that brings a machine to a state where the
//! JPG Optimizer Pro desktop bundle (and its Streamlit web variant) can run:
//! it verifies a Python interpreter, installs the required imaging libraries,
//! probes for the optional MozJPEG accelerator, installs the app bundle into
//! the applications directory and launches it.

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod manifest;
mod probe;
mod progress;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use config::Overrides;

fn main() {
    let Cli {
        python,
        source_dir,
        applications_dir,
        cjpeg,
        verbose,
        command,
    } = Cli::parse();

    let overrides = Overrides {
        python,
        source_dir,
        applications_dir,
        cjpeg,
        verbose,
    };

    let result = match command {
        Commands::Install(args) => commands::install::run(&overrides, args),
        Commands::Serve => commands::serve::run(&overrides),
        Commands::Doctor(args) => commands::doctor::run(&overrides, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        use miette::Diagnostic;
        eprintln!("Error: {e}");
        // Remediation hints (e.g. the Python download link) matter more
        // than the failure itself; always surface them.
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
