//! Install command implementation
//!
//! Runs the six-phase bootstrap:
//! 1. Interpreter check
//! 2. Required libraries (verified by import, installed via pip on miss)
//! 3. Optional MozJPEG accelerator probe/install
//! 4. Application bundle check
//! 5. Consent-gated install-copy with quarantine clearing
//! 6. Consent-gated detached launch
//!
//! Declined optional steps are skips, not failures: the command still
//! exits 0 and the summary reflects the degraded-but-functional state.

use crate::bootstrap::Bootstrap;
use crate::cli::InstallArgs;
use crate::config::{Overrides, Settings};
use crate::error::Result;
use crate::probe::SystemProbe;
use crate::ui::{self, AssumeNo, AssumeYes, Confirmer, InteractiveConfirmer};

pub fn run(overrides: &Overrides, args: InstallArgs) -> Result<()> {
    let settings = Settings::resolve(overrides);
    let probe = SystemProbe::new(settings.verbose);

    let confirmer: Box<dyn Confirmer> = if args.yes {
        Box::new(AssumeYes)
    } else if args.no_input {
        Box::new(AssumeNo)
    } else {
        Box::new(InteractiveConfirmer)
    };

    let report = Bootstrap::new(&probe, confirmer.as_ref(), &settings).run()?;
    ui::summary::print_summary(&report);
    Ok(())
}
