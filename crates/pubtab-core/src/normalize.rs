//! Field normalization
//!
//! Derives the display-ready strings of one record: byline, title, venue and
//! page text, with TeX dash and tie conventions turned into typographic
//! characters.

use pubtab_bibtex::BibTeXEntry;

use crate::config::{NameRule, TableConfig};
use crate::error::{ReportError, Result};
use crate::ordering::canonical_month;

pub const EM_DASH: &str = "\u{2014}";
pub const EN_DASH: &str = "\u{2013}";

/// Display tuple of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFields {
    pub authors: String,
    pub title: String,
    pub venue: Option<String>,
    pub page_text: Option<String>,
    pub year: String,
    /// Canonical month name, `None` when the record has no month
    pub month: Option<&'static str>,
}

/// Normalize one record for the listing
///
/// Fails on missing attribution, a failed name-consistency check, a missing
/// title or year, or a month that cannot be placed in the month order.
pub fn normalize_entry(
    entry: &BibTeXEntry,
    names: &NameRule,
    table: &TableConfig,
) -> Result<DisplayFields> {
    let byline = select_byline(entry, &table.editor_marker)?;
    let title = required_field(entry, "title")?;
    check_name_consistency(&byline, names, entry)?;

    let year = required_field(entry, "year")?;
    let month = match entry.month() {
        None => None,
        Some(raw) => Some(canonical_month(raw).ok_or_else(|| ReportError::InvalidMonth {
            cite_key: entry.cite_key.clone(),
            month: raw.to_string(),
        })?),
    };

    Ok(DisplayFields {
        authors: join_authors(&byline),
        title: normalize_punctuation(title),
        venue: select_venue(entry).map(normalize_punctuation),
        page_text: page_text(
            entry.get_field("pages"),
            entry.get_field("volume"),
            entry.get_field("number"),
        ),
        year: year.to_string(),
        month,
    })
}

fn required_field<'e>(entry: &'e BibTeXEntry, field: &'static str) -> Result<&'e str> {
    entry.get_field(field).ok_or_else(|| ReportError::MissingField {
        cite_key: entry.cite_key.clone(),
        field,
    })
}

/// Author field, or editor field plus `editor_marker`
pub fn select_byline(entry: &BibTeXEntry, editor_marker: &str) -> Result<String> {
    if let Some(author) = entry.author() {
        Ok(author.to_string())
    } else if let Some(editor) = entry.editor() {
        Ok(format!("{editor}{editor_marker}"))
    } else {
        Err(ReportError::MissingAttribution {
            cite_key: entry.cite_key.clone(),
        })
    }
}

/// Reject bylines that contain the surname but not the canonical full name
pub fn check_name_consistency(byline: &str, rule: &NameRule, entry: &BibTeXEntry) -> Result<()> {
    if rule.enabled && byline.contains(&rule.surname) && !byline.contains(&rule.full_name) {
        return Err(ReportError::InconsistentName {
            cite_key: entry.cite_key.clone(),
            title: entry.title().unwrap_or_default().to_string(),
            surname: rule.surname.clone(),
            full_name: rule.full_name.clone(),
        });
    }
    Ok(())
}

/// `booktitle`, falling back to `journal`
pub fn select_venue(entry: &BibTeXEntry) -> Option<&str> {
    entry.booktitle().or_else(|| entry.journal())
}

/// `---` to em dash, `--` to en dash, `~` to a plain space
pub fn normalize_punctuation(text: &str) -> String {
    text.replace("---", EM_DASH)
        .replace("--", EN_DASH)
        .replace('~', " ")
}

/// Every hyphen in a page range becomes an en dash
pub fn normalize_page_range(pages: &str) -> String {
    pages.replace("--", EN_DASH).replace('-', EN_DASH)
}

/// Replace every " and " separator with ", "
pub fn join_authors(authors: &str) -> String {
    let mut joined = authors.replace(" and ", ", ");
    // "x and and y" leaves a fresh separator behind after one pass
    while joined.contains(" and ") {
        joined = joined.replace(" and ", ", ");
    }
    joined
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// `volume(number):pages`, `volume:pages` or `pp. pages`
pub fn page_text(pages: Option<&str>, volume: Option<&str>, number: Option<&str>) -> Option<String> {
    let pages = normalize_page_range(present(pages)?);

    Some(match (present(volume), present(number)) {
        (Some(volume), Some(number)) => format!("{volume}({number}):{pages}"),
        (Some(volume), None) => format!("{volume}:{pages}"),
        _ => format!("pp. {pages}"),
    })
}
