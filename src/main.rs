//! Expense Groups CLI
//!
//! Runs a CSV command script against an in-memory group ledger and prints
//! query results.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- commands.csv
//! cargo run -- commands.csv --summary   # append a final balance report
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use expense_groups::{LedgerEngine, LedgerError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(LedgerError::MissingArgument);
    }

    let input_path = &args[1];
    let summary = args.iter().skip(2).any(|arg| arg == "--summary");

    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let mut engine = LedgerEngine::new();
    engine.process_csv(reader, &mut handle)?;

    if summary {
        handle.flush()?;
        engine.write_balances(handle)?;
    }

    Ok(())
}
