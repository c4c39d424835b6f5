//! Logica CLI - a command-line front end for the Logica language core.
//!
//! Thin glue over the `logica` facade: parses arguments, wires up tracing,
//! and dispatches to the tokenize/check/run/ledger subcommands.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckCommand},
    ledger::{run_ledger, LedgerCommand},
    run::{run_run, RunCommand},
    tokenize::{run_tokenize, TokenizeCommand},
};

#[derive(Parser, Debug)]
#[command(name = "logica")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run and inspect Logica programs", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug-level) tracing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lex a source file and print its token stream
    Tokenize(TokenizeCommand),
    /// Lex, parse, and compile a source file without running it
    Check(CheckCommand),
    /// Execute a source file and print its output
    Run(RunCommand),
    /// Execute a source file and print its final ledger
    Ledger(LedgerCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Tokenize(args) => run_tokenize(args),
        Commands::Check(args) => run_check(args),
        Commands::Run(args) => run_run(args),
        Commands::Ledger(args) => run_ledger(args),
    };

    result.map_err(|err| anyhow::anyhow!(err.to_string()))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
