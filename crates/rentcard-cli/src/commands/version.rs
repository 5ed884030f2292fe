//! Current version command
//!
//! Usage: rentcard db:version

use super::open_existing_ledger;
use crate::config::CliConfig;
use crate::output;
use rentcard_core::{Result, VersionLedger};

/// Execute db:version
pub fn execute(config: &CliConfig) -> Result<()> {
    let current = match open_existing_ledger(config)? {
        Some(ledger) => ledger.current_version()?,
        None => None,
    };

    let rendered = if config.json_output {
        output::to_json(&current)?
    } else {
        output::render_current(current.as_ref())
    };
    println!("{}", rendered);

    Ok(())
}
