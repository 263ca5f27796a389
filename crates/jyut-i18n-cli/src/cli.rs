use std::ffi::OsString;

use clap::{Parser, Subcommand};

use crate::check::{CheckArgs, run_check};
use crate::coverage::{CoverageArgs, run_coverage};
use crate::error::{CliError, Result};
use crate::locales::{LocalesArgs, ResolveArgs, run_locales, run_resolve};
use crate::lookup::{LookupArgs, run_lookup};
use crate::util::init_logging;

#[derive(Debug, Parser)]
#[command(
    name = "jyut-i18n",
    about = "Inspect and validate Jyut Dictionary translation catalogs",
    version
)]
pub struct Cli {
    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Write log records to stderr as JSON lines.
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate one message from a catalog file.
    Lookup(LookupArgs),

    /// Parse catalog files and report their contents and problems.
    Check(CheckArgs),

    /// Compare which message keys each catalog translates.
    Coverage(CoverageArgs),

    /// List catalogs on disk and the languages the application offers.
    Locales(LocalesArgs),

    /// Show which catalog the configured preferences would load.
    Resolve(ResolveArgs),
}

/// A failed run, with the output mode the command line asked for.
#[derive(Debug)]
pub struct Failure {
    pub error: CliError,
    pub json: bool,
}

pub fn run_from_env() -> std::result::Result<(), Failure> {
    run_from_args(std::env::args_os())
}

/// Parse `args` (program name first) and run. Invalid arguments exit
/// through clap.
pub fn run_from_args<I, T>(args: I) -> std::result::Result<(), Failure>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let json = cli.json;
    run(cli).map_err(|error| Failure { error, json })
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_json);
    let json = cli.json;
    match cli.command {
        Commands::Lookup(args) => run_lookup(args, json),
        Commands::Check(args) => run_check(args, json),
        Commands::Coverage(args) => run_coverage(args, json),
        Commands::Locales(args) => run_locales(args, json),
        Commands::Resolve(args) => run_resolve(args, json),
    }
}
