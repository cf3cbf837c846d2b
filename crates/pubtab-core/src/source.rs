//! Loading records from BibTeX files

use std::path::Path;

use pubtab_bibtex::{parse_unicode, BibTeXEntry, BibTeXParseResult};

use crate::error::{ReportError, Result};

fn read_and_parse(path: &Path) -> Result<BibTeXParseResult> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let result = parse_unicode(content);
    tracing::debug!(
        path = %path.display(),
        entries = result.entries.len(),
        errors = result.errors.len(),
        "parsed bibliography"
    );
    Ok(result)
}

/// Read and parse one BibTeX file, with field values decoded to Unicode
///
/// Blocks the parser could not read are logged and skipped.
pub fn load_entries(path: &Path) -> Result<Vec<BibTeXEntry>> {
    let result = read_and_parse(path)?;
    for error in &result.errors {
        tracing::warn!("{}:{}: {}", path.display(), error.line, error.message);
    }
    Ok(result.entries)
}

/// Like [`load_entries`], but the first unreadable block is an error
pub fn load_entries_strict(path: &Path) -> Result<Vec<BibTeXEntry>> {
    read_and_parse(path)?
        .into_entries()
        .map_err(|source| ReportError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn bib_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_entries_decodes_values() {
        let file = bib_file(
            "@article{K1, author = {J{\\\"u}rgen Smith}, title = {T}, year = 2020}\n",
        );

        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].author(), Some("Jürgen Smith"));
    }

    #[test]
    fn test_broken_block_skipped_or_fatal() {
        let file = bib_file("@article{Good, title = {T}}\n\n@article{Broken title = {x}}\n");

        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 1);

        let err = load_entries_strict(file.path()).unwrap_err();
        match &err {
            ReportError::Parse { path, source } => {
                assert_eq!(path, file.path());
                assert_eq!(source.line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().ends_with(", line 3: Failed to parse entry"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_entries(Path::new("/nonexistent/file.bib")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/file.bib"));

        let err = load_entries_strict(Path::new("/nonexistent/file.bib")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
