use clap::Parser;

/// Arguments for the doctor command
#[derive(Parser, Debug)]
pub struct DoctorArgs {
    /// Emit the report as JSON instead of the human-readable summary
    #[arg(long)]
    pub json: bool,
}
