//! autoload-guard: create missing Composer autoload targets before the
//! autoloader is dumped.
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod reconcile;
mod workflow;

use cli::{Command, RootArgs};

fn main() -> ExitCode {
    let args = RootArgs::parse();
    init_tracing(args.command.verbose());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: RootArgs) -> Result<()> {
    match args.command {
        Command::Reconcile(args) => workflow::run_reconcile(args),
        Command::Status(args) => workflow::run_status(args),
    }
}

fn init_tracing(verbose: bool) {
    // --verbose wins over RUST_LOG.
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
