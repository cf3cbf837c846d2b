//! Pubtab Core - Publication listings and count tables from BibTeX records
//!
//! - **Normalize**: byline, punctuation and page-range rules for display
//! - **Category**: record type and venue to publication category
//! - **Table**: HTML publication listing grouped by year and month
//! - **Counts**: category × year matrix over one or more sources
//! - **Count table**: full (HTML cells) or simple (CSV) count output
//! - **Locale**: English and German labels for the count table
//! - **Config**: TOML-loadable name rule, link targets and count settings

pub mod category;
pub mod config;
pub mod count_table;
pub mod counts;
pub mod error;
pub mod locale;
pub mod normalize;
pub mod ordering;
pub mod source;
pub mod table;

pub use category::{classify, classify_entry, Category};
pub use config::{CountConfig, NameRule, ReportConfig, SpecialVenue, TableConfig};
pub use count_table::{CountRenderer, OutputType};
pub use counts::{AggregateStats, Bucket, CountAggregator, CountMatrix};
pub use error::{ReportError, Result};
pub use locale::{Locale, LocaleTable};
pub use normalize::{normalize_entry, DisplayFields};
pub use source::{load_entries, load_entries_strict};
pub use table::TableRenderer;
