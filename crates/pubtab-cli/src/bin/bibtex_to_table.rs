//! Convert a BibTeX file into an HTML publication table

use clap::Parser;
use pubtab_cli::{init_tracing, run_table, TableArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = TableArgs::parse();
    run_table(&args)?;
    Ok(())
}
