//! Version history command
//!
//! Usage: rentcard db:list

use super::open_existing_ledger;
use crate::config::CliConfig;
use crate::output;
use rentcard_core::{Result, VersionLedger};

/// Execute db:list
pub fn execute(config: &CliConfig) -> Result<()> {
    let versions = match open_existing_ledger(config)? {
        Some(ledger) => ledger.list_versions()?,
        None => Vec::new(),
    };

    let rendered = if config.json_output {
        output::to_json(&versions)?
    } else {
        output::render_history(&versions)
    };
    println!("{}", rendered);

    Ok(())
}
