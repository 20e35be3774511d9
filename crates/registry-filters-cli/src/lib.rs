//! `regfilter`: command-line access to the registry filter codec.
//!
//! Useful for taking apart a deep link from a bug report, building a
//! canonical URL from a saved filter state, or checking what a table would
//! show for a given `page`/`rowsPerPage` pair.
//!
//! Every command returns its output as a `String`; `main` prints it. Tests
//! drive [`run_with_env`] directly with a [`MockEnv`](registry_filters::MockEnv).

use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use registry_filters::{EnvReader, Facet, FilterConfig, RealEnv};

pub mod commands;

/// Decode, encode and inspect facility registry filter links.
#[derive(Debug, Parser)]
#[command(name = "regfilter")]
#[command(version)]
#[command(about = "Decode, encode and inspect facility registry filter links")]
pub struct Cli {
    /// Log soft fallbacks (unknown keys, bad boundaries, dropped options) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Rows per page used when a query string does not name one
    #[arg(long, global = true, value_name = "ROWS")]
    pub rows_per_page: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a query string into filter state JSON
    Decode(DecodeArgs),

    /// Encode filter state JSON into its canonical query string
    Encode(EncodeArgs),

    /// Decode a query string and relabel one facet from reference data
    Reconcile(ReconcileArgs),

    /// Validate a number-of-workers entry
    Workers(WorkersArgs),

    /// Show the table page selected by a query string
    Page(PageArgs),

    /// Stable-sort a JSON array of records by one column
    Sort(SortArgs),
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Query string, with or without the leading '?'
    #[arg(value_name = "QUERY")]
    pub query: String,
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Append embed=1
    #[arg(long)]
    pub embed: bool,

    /// Append detail=true
    #[arg(long)]
    pub detail: bool,

    /// Filter state JSON file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ReconcileArgs {
    /// Facet to relabel, by query key (e.g. contributors)
    #[arg(long)]
    pub facet: Facet,

    /// Reference data JSON: a list of options and/or option groups
    #[arg(long, value_name = "FILE")]
    pub source: PathBuf,

    /// Query string to decode
    #[arg(value_name = "QUERY")]
    pub query: String,
}

#[derive(Debug, Args)]
pub struct WorkersArgs {
    /// Number-of-workers text as typed into the form
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,
}

#[derive(Debug, Args)]
pub struct PageArgs {
    /// Query string carrying page and rowsPerPage
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Column to sort by
    #[arg(long)]
    pub key: String,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// JSON array of records (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Builds the pagination config: environment first, then `--rows-per-page`.
    pub fn config(&self, env: &dyn EnvReader) -> Result<FilterConfig> {
        let config = FilterConfig::from_env_reader(env)?;
        match self.rows_per_page {
            Some(rows) => Ok(config.with_default_rows_per_page(rows)?),
            None => Ok(config),
        }
    }
}

/// Runs a parsed command against the process environment.
pub fn run(cli: &Cli, stdin: &mut dyn Read) -> Result<String> {
    run_with_env(cli, &RealEnv, stdin)
}

/// Runs a parsed command.
pub fn run_with_env(cli: &Cli, env: &dyn EnvReader, stdin: &mut dyn Read) -> Result<String> {
    match &cli.command {
        Commands::Decode(args) => commands::decode::run(args),
        Commands::Encode(args) => commands::encode::run(args, stdin),
        Commands::Reconcile(args) => commands::reconcile::run(args),
        Commands::Workers(args) => Ok(commands::workers::run(args)),
        Commands::Page(args) => commands::page::run(args, &cli.config(env)?),
        Commands::Sort(args) => commands::sort::run(args, stdin),
    }
}
