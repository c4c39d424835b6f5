use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;

/// Arguments for the `tokenize` subcommand.
#[derive(Parser, Debug)]
pub struct TokenizeCommand {
    /// Source file to tokenize
    pub source: PathBuf,
}

pub fn run_tokenize(args: TokenizeCommand) -> Result<()> {
    let source = std::fs::read_to_string(&args.source)?;
    let tokens = logica::tokenize(&source)?;
    for token in tokens {
        println!("{:<12} {:>3}:{:<3} {:?}", format!("{:?}", token.kind), token.pos.line, token.pos.col, token.value);
    }
    Ok(())
}
