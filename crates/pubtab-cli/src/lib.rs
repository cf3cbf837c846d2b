//! Shared plumbing for the `bibtex-to-table` and `publication-counts` binaries

use std::path::{Path, PathBuf};

use clap::Parser;
use pubtab_core::{
    load_entries, load_entries_strict, CountAggregator, CountRenderer, Locale, OutputType,
    ReportConfig, ReportError, Result, TableRenderer,
};

/// Convert a BibTeX file into an HTML publication table
#[derive(Parser, Debug)]
#[command(name = "bibtex-to-table")]
pub struct TableArgs {
    /// BibTeX file to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// HTML file to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Generate publication counts from BibTeX files
#[derive(Parser, Debug)]
#[command(name = "publication-counts")]
pub struct CountsArgs {
    /// Output type: full or simple
    #[arg(long = "output_type", default_value = "full")]
    pub output_type: OutputType,

    /// Label language; repeat for one label column per language
    #[arg(long = "locale", default_value = "en")]
    pub locales: Vec<Locale>,

    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// BibTeX files to process
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`)
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configuration from `path`, or the defaults when none is given
pub fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            ReportConfig::load(path)
        }
        None => Ok(ReportConfig::default()),
    }
}

/// Render the table and write it; the output file is left untouched on error
///
/// Any unreadable block in the input aborts the run.
pub fn run_table(args: &TableArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let entries = load_entries_strict(&args.input)?;
    let html = TableRenderer::new(&config).render(&entries)?;

    std::fs::write(&args.output, html).map_err(|source| ReportError::Io {
        path: args.output.clone(),
        source,
    })?;
    tracing::info!(output = %args.output.display(), "wrote publication table");
    Ok(())
}

/// Aggregate every input file and render the count table
pub fn run_counts(args: &CountsArgs) -> Result<String> {
    let config = load_config(args.config.as_deref())?;
    let mut aggregator = CountAggregator::new(&config.counts);
    for path in &args.files {
        let entries = load_entries(path)?;
        aggregator.add_entries(&entries);
    }
    let matrix = aggregator.finish();

    let renderer = CountRenderer::new(
        args.locales.clone(),
        config.counts.active_special_venues(),
    );
    Ok(renderer.render(&matrix, args.output_type))
}
