use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Interactive install:\n    jpgopt-setup install\n\n\
                  Unattended install (accept everything):\n    jpgopt-setup install --yes\n\n\
                  Checks only, decline the copy and launch:\n    jpgopt-setup install --no-input")]
pub struct InstallArgs {
    /// Assume "yes" for every prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Never prompt; decline the optional steps instead
    #[arg(long, conflicts_with = "yes")]
    pub no_input: bool,
}
