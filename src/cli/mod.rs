//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - doctor: Doctor command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod doctor;
pub mod install;

pub use completions::CompletionsArgs;
pub use doctor::DoctorArgs;
pub use install::InstallArgs;

/// jpgopt-setup - installer and launcher for JPG Optimizer Pro
#[derive(Parser, Debug)]
#[command(
    name = "jpgopt-setup",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installer and launcher for the JPG Optimizer Pro desktop and web app",
    long_about = "jpgopt-setup verifies the Python runtime and imaging libraries \
                  (Pillow, piexif), probes for the optional MozJPEG accelerator, \
                  installs the JPG Optimizer Pro bundle into the applications \
                  directory and launches it. The `serve` command runs the \
                  Streamlit web variant in the foreground instead.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  jpgopt-setup install              \x1b[90m# Interactive desktop install\x1b[0m\n   \
                  jpgopt-setup install --yes        \x1b[90m# Accept every prompt\x1b[0m\n   \
                  jpgopt-setup install --no-input   \x1b[90m# Decline optional steps, never prompt\x1b[0m\n   \
                  jpgopt-setup serve                \x1b[90m# Run the web version in the foreground\x1b[0m\n   \
                  jpgopt-setup doctor --json        \x1b[90m# Machine-readable environment report\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Python interpreter to use (defaults to python3/python on PATH)
    #[arg(long, global = true, env = "JPGOPT_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Directory containing the app bundle (defaults to the executable's directory)
    #[arg(
        long,
        short = 's',
        global = true,
        env = "JPGOPT_SOURCE_DIR",
        value_name = "DIR"
    )]
    pub source_dir: Option<PathBuf>,

    /// Destination applications directory (defaults to /Applications)
    #[arg(long, global = true, env = "JPGOPT_APPLICATIONS_DIR", value_name = "DIR")]
    pub applications_dir: Option<PathBuf>,

    /// Path to an existing cjpeg binary (skips the Homebrew probe)
    #[arg(long, global = true, env = "JPGOPT_CJPEG", value_name = "PATH", hide = true)]
    pub cjpeg: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the desktop app (checks runtime, libraries, bundle, then copies and launches)
    Install(InstallArgs),

    /// Run the Streamlit web version in the foreground
    Serve,

    /// Report the environment without making any changes
    Doctor(DoctorArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
