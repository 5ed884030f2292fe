//! Rollback command
//!
//! Usage: rentcard db:rollback <VERSION> [--dry-run]

use super::{open_existing_ledger, open_ledger};
use crate::config::CliConfig;
use crate::output;
use clap::Args;
use rentcard_core::errors::{ExError, LedgerError};
use rentcard_core::rules::validation;
use rentcard_core::{Result, VersionLedger};

#[derive(Debug, Args)]
pub struct RollbackArgs {
    /// Label of the version to make active
    pub version: String,

    /// Report which record would become active without changing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute db:rollback
pub fn execute(args: RollbackArgs, config: &CliConfig) -> Result<()> {
    if args.dry_run {
        return preview(&args.version, config);
    }

    let mut ledger = open_ledger(config)?;

    let previous = ledger.current_version()?;
    let current = ledger.rollback_to_version(&args.version)?;
    let changed = previous.as_ref().map(|p| p.id) != Some(current.id);

    let rendered = if config.json_output {
        output::to_json(&output::RollbackOutcome {
            previous: previous.as_ref(),
            current: &current,
            changed,
            dry_run: false,
        })?
    } else {
        output::render_rollback(previous.as_ref(), &current, changed)
    };
    println!("{}", rendered);

    Ok(())
}

fn preview(version: &str, config: &CliConfig) -> Result<()> {
    let label = validation::validate_version_label(version)
        .map_err(|e| ExError::from(e).with_op("find_version"))?;
    let not_found = || {
        ExError::from(LedgerError::VersionNotFound {
            version: label.clone(),
        })
    };

    let ledger = open_existing_ledger(config)?.ok_or_else(not_found)?;
    let target = ledger.find_version(&label)?.ok_or_else(not_found)?;
    let previous = ledger.current_version()?;
    let changed = !target.is_active;

    let rendered = if config.json_output {
        output::to_json(&output::RollbackOutcome {
            previous: previous.as_ref(),
            current: &target,
            changed,
            dry_run: true,
        })?
    } else {
        output::render_rollback_preview(previous.as_ref(), &target)
    };
    println!("{}", rendered);

    Ok(())
}
