//! CLI argument parsing for the pre-autoload-dump hook.
//!
//! The CLI only collects inputs; resolution of roots and dev mode lives in
//! `config` so the same rules apply to every command.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Manifest filename used when neither `--manifest` nor `COMPOSER` is set.
pub const DEFAULT_MANIFEST_NAME: &str = "composer.json";

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "autoload-guard",
    version,
    about = "Create missing Composer autoload files and classmap directories",
    after_help = "Commands:\n  reconcile   Create missing autoload files and classmap directories\n  status      Report which autoload targets exist without writing\n\nComposer hook:\n  \"scripts\": { \"pre-autoload-dump\": \"autoload-guard reconcile\" }\n\nExamples:\n  autoload-guard reconcile --vendor-dir /srv/app/vendor\n  autoload-guard reconcile --no-dev\n  autoload-guard status --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(alias = "pre-autoload-dump")]
    Reconcile(ReconcileArgs),
    Status(StatusArgs),
}

/// Inputs shared by every command for locating the manifest.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Dependency install directory. An absolute path's parent is the
    /// project root; a relative path is taken from the project root, like
    /// `config.vendor-dir`
    #[arg(long, value_name = "DIR", env = "COMPOSER_VENDOR_DIR")]
    pub vendor_dir: Option<PathBuf>,

    /// Project root unless an absolute vendor dir is given (defaults to cwd)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Manifest filename relative to the project root
    #[arg(
        long,
        value_name = "FILE",
        env = "COMPOSER",
        default_value = DEFAULT_MANIFEST_NAME
    )]
    pub manifest: String,

    /// Honor autoload-dev entries (overrides COMPOSER_DEV_MODE)
    #[arg(long, conflicts_with = "no_dev")]
    pub dev: bool,

    /// Ignore autoload-dev entries (overrides COMPOSER_DEV_MODE)
    #[arg(long, conflicts_with = "dev")]
    pub no_dev: bool,
}

/// Reconcile command inputs.
#[derive(Parser, Debug)]
#[command(about = "Create missing autoload files and classmap directories")]
pub struct ReconcileArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Emit the reconcile report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Emit debug logging
    #[arg(long)]
    pub verbose: bool,
}

/// Status command inputs.
#[derive(Parser, Debug)]
#[command(about = "Report which autoload targets exist without writing")]
pub struct StatusArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when any target is missing or has the wrong kind
    #[arg(long)]
    pub check: bool,

    /// Emit debug logging
    #[arg(long)]
    pub verbose: bool,
}

impl Command {
    /// Whether the selected command asked for debug logging.
    pub fn verbose(&self) -> bool {
        match self {
            Command::Reconcile(args) => args.verbose,
            Command::Status(args) => args.verbose,
        }
    }
}
