use std::path::PathBuf;

use clap::Parser;

use crate::error::{CliError, Result};

/// Arguments for the `ledger` subcommand: runs the program, then prints its
/// final ledger, most-recent first (spec §6 `ledger last N`).
#[derive(Parser, Debug)]
pub struct LedgerCommand {
    /// Source file to execute before inspecting its ledger
    pub source: PathBuf,

    /// How many of the most recent entries to print
    #[arg(long, default_value_t = 10)]
    pub max_ledger_print: usize,
}

pub fn run_ledger(args: LedgerCommand) -> Result<()> {
    let source = std::fs::read_to_string(&args.source)?;
    let outcome = logica::run(&source, true);
    let kernel = outcome.kernel.ok_or_else(|| {
        CliError::Source(
            outcome
                .error
                .clone()
                .unwrap_or_else(|| panic!("run produced neither a kernel nor an error")),
        )
    })?;

    let entries = kernel.ledger_read();
    for entry in entries.iter().rev().take(args.max_ledger_print) {
        let speaker = kernel.speaker_name(entry.speaker_id).unwrap_or("?");
        println!(
            "#{} [{}] {}:{} {}",
            entry.entry_id, speaker, entry.operation, entry.action, entry.status
        );
    }

    if let Some(error) = outcome.error {
        return Err(CliError::Source(error));
    }
    Ok(())
}
