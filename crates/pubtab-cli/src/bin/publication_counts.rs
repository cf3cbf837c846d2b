//! Print publication counts by category and year

use clap::Parser;
use pubtab_cli::{init_tracing, run_counts, CountsArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = CountsArgs::parse();
    print!("{}", run_counts(&args)?);
    Ok(())
}
