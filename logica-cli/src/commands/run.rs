use std::path::PathBuf;

use clap::Parser;

use crate::error::{CliError, Result};

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunCommand {
    /// Source file to execute
    pub source: PathBuf,

    /// Suppress the run-complete trace summary
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run_run(args: RunCommand) -> Result<()> {
    let source = std::fs::read_to_string(&args.source)?;
    let outcome = logica::run(&source, args.quiet);
    for line in &outcome.output {
        println!("{line}");
    }
    if let Some(error) = outcome.error {
        return Err(CliError::Source(error));
    }
    Ok(())
}
