//! Record a version
//!
//! Usage: rentcard db:add <VERSION> <DESCRIPTION> [--active]

use super::open_ledger;
use crate::config::CliConfig;
use crate::output;
use clap::Args;
use rentcard_core::{Result, VersionLedger};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Version label, e.g. 1.0.4
    pub version: String,

    /// What changed in this version
    pub description: String,

    /// Make the new version the active one
    #[arg(long)]
    pub active: bool,
}

/// Execute db:add
pub fn execute(args: AddArgs, config: &CliConfig) -> Result<()> {
    let mut ledger = open_ledger(config)?;
    let record = ledger.add_version(&args.version, &args.description, args.active)?;

    let rendered = if config.json_output {
        output::to_json(&record)?
    } else {
        format!(
            "Added version {}{}",
            record.version,
            if record.is_active { " (active)" } else { "" }
        )
    };
    println!("{}", rendered);

    Ok(())
}
