//! RentCard CLI
//!
//! Command-line interface for the database version ledger

use clap::{Parser, Subcommand};
use rentcard_core::logging_facility;
use rentcard_core_types::InvocationContext;

mod commands;
mod config;
mod output;

use config::{CliConfig, GlobalArgs};

#[derive(Debug, Parser)]
#[command(name = "rentcard", version)]
#[command(about = "RentCard - database version ledger", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the active database version
    #[command(name = "db:version")]
    Version,
    /// List every recorded version, most recent first
    #[command(name = "db:list")]
    List,
    /// Make a previously recorded version active again
    #[command(name = "db:rollback")]
    Rollback(commands::rollback::RollbackArgs),
    /// Record a new version
    #[command(name = "db:add")]
    Add(commands::add::AddArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Version => "db:version",
            Commands::List => "db:list",
            Commands::Rollback(_) => "db:rollback",
            Commands::Add(_) => "db:add",
        }
    }
}

fn main() {
    // A missing .env is fine; real environment variables win over it.
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let config = CliConfig::from_args(&cli.global);
    logging_facility::init_with_filter(config.log_profile(), config.default_log_filter());

    let ctx = InvocationContext::new().with_command(cli.command.name());
    let span = tracing::info_span!(
        "invocation",
        invocation_id = %ctx.invocation_id,
        command = ctx.command.as_deref().unwrap_or_default()
    );
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Version => commands::version::execute(&config),
        Commands::List => commands::list::execute(&config),
        Commands::Rollback(args) => commands::rollback::execute(args, &config),
        Commands::Add(args) => commands::add::execute(args, &config),
    };

    if let Err(e) = result {
        let e = e.with_invocation_id(ctx.invocation_id.clone());
        eprintln!("{}", output::render_error(&e, config.json_output));
        std::process::exit(1);
    }
}
