//! Error types for report generation

use std::path::PathBuf;

/// Errors that abort a report run
///
/// Record-level variants carry the offending citation key.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("{cite_key} has neither author nor editor")]
    MissingAttribution { cite_key: String },

    #[error("Name {surname} faulty in entry {cite_key} ({title}): expected \"{full_name}\"")]
    InconsistentName {
        cite_key: String,
        title: String,
        surname: String,
        full_name: String,
    },

    #[error("{cite_key} is missing required field '{field}'")]
    MissingField { cite_key: String, field: &'static str },

    #[error("{cite_key} has unrecognized month '{month}'")]
    InvalidMonth { cite_key: String, month: String },

    #[error("Failed to parse {path}, {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: pubtab_bibtex::BibTeXParseError,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
