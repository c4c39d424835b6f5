use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Source file to check
    pub source: PathBuf,
}

pub fn run_check(args: CheckCommand) -> Result<()> {
    let source = std::fs::read_to_string(&args.source)?;
    logica::check(&source)?;
    println!("ok");
    Ok(())
}
