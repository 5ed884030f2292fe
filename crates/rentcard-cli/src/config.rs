//! CLI configuration
//!
//! Precedence: command-line flag, then environment variable, then `.env`
//! (loaded by `main`), then the built-in default.

use clap::{ArgAction, Args, ValueEnum};
use rentcard_core::logging_facility::Profile;
use rentcard_store::DbOptions;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DB_PATH: &str = ".rentcard/ledger.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Path to the ledger database
    #[arg(long, global = true, env = "RENTCARD_DB", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Print command output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log output format (logs go to stderr)
    #[arg(
        long,
        global = true,
        value_enum,
        env = "RENTCARD_LOG_FORMAT",
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,

    /// Milliseconds to wait for another writer's lock
    #[arg(long, global = true, env = "RENTCARD_BUSY_TIMEOUT_MS", default_value_t = 5_000)]
    pub busy_timeout_ms: u64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved configuration handed to every command
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub db_path: PathBuf,
    pub json_output: bool,
    pub log_format: LogFormat,
    pub verbosity: u8,
    pub db_options: DbOptions,
}

impl CliConfig {
    pub fn from_args(args: &GlobalArgs) -> Self {
        Self {
            db_path: args.db.clone(),
            json_output: args.json,
            log_format: args.log_format,
            verbosity: args.verbose,
            db_options: DbOptions {
                busy_timeout: Duration::from_millis(args.busy_timeout_ms),
            },
        }
    }

    pub fn log_profile(&self) -> Profile {
        match self.log_format {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }

    /// Filter used when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "rentcard=warn",
            1 => "rentcard=info",
            _ => "rentcard=debug",
        }
    }
}
