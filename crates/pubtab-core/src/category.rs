//! Entry classification
//!
//! Maps a record's type tag and venue to the display category used by the
//! count table, and to the colored-box style used by the listing.

use pubtab_bibtex::{BibTeXEntry, BibTeXEntryType};

use crate::config::SpecialVenue;
use crate::normalize::select_venue;

/// Venue or identifier substring that marks a preprint
pub const PREPRINT_MARKER: &str = "arXiv";

/// Display bucket of a publication
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Conferences,
    Journals,
    InBooks,
    Editorship,
    BooksAndTheses,
    Preprints,
    Other,
}

impl Category {
    /// All categories in table order
    pub const ALL: [Category; 7] = [
        Category::Conferences,
        Category::Journals,
        Category::InBooks,
        Category::Editorship,
        Category::BooksAndTheses,
        Category::Preprints,
        Category::Other,
    ];

    /// Base mapping from a declared type tag
    pub fn from_type(entry_type: &BibTeXEntryType) -> Self {
        match entry_type {
            BibTeXEntryType::Article => Category::Journals,
            BibTeXEntryType::InProceedings => Category::Conferences,
            BibTeXEntryType::InBook | BibTeXEntryType::InCollection => Category::InBooks,
            BibTeXEntryType::Book | BibTeXEntryType::Proceedings => Category::Editorship,
            BibTeXEntryType::PhdThesis => Category::BooksAndTheses,
            BibTeXEntryType::Preprint => Category::Preprints,
            _ => Category::Other,
        }
    }

    /// English name, also used as the plain-text column header
    pub fn name(&self) -> &'static str {
        match self {
            Category::Conferences => "Conferences",
            Category::Journals => "Journals",
            Category::InBooks => "In Books",
            Category::Editorship => "Editorship",
            Category::BooksAndTheses => "Books and Theses",
            Category::Preprints => "Preprints",
            Category::Other => "Other",
        }
    }

    /// Stylesheet class of the colored box drawn next to the category
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Conferences => "balken-inproceedings",
            Category::Journals => "balken-article",
            Category::InBooks => "balken-inbook",
            Category::Editorship => "balken-book",
            Category::BooksAndTheses => "balken-phdthesis",
            Category::Preprints => "balken-preprint",
            Category::Other => "balken-other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Type tags that get their own colored box in the listing
const STYLED_TYPES: [&str; 8] = [
    "preprint",
    "article",
    "inproceedings",
    "inbook",
    "incollection",
    "book",
    "proceedings",
    "phdthesis",
];

fn is_preprint_venue(venue: Option<&str>) -> bool {
    venue.is_some_and(|v| v.contains(PREPRINT_MARKER))
}

/// Classify from type tag and venue; an arXiv venue always means preprint
pub fn classify(entry_type: &BibTeXEntryType, venue: Option<&str>) -> Category {
    if is_preprint_venue(venue) {
        Category::Preprints
    } else {
        Category::from_type(entry_type)
    }
}

/// Classify a whole record; the citation key is also checked for arXiv
pub fn classify_entry(entry: &BibTeXEntry) -> Category {
    if entry.cite_key.contains(PREPRINT_MARKER) {
        return Category::Preprints;
    }
    classify(&entry.entry_type, select_venue(entry))
}

/// Style key for the listing's colored box (`balken-<key>`)
pub fn style_key<'a>(entry_type: &'a BibTeXEntryType, venue: Option<&str>) -> &'a str {
    if is_preprint_venue(venue) {
        "preprint"
    } else if STYLED_TYPES.contains(&entry_type.as_str()) {
        entry_type.as_str()
    } else {
        "other"
    }
}

/// Special venues an `inproceedings` record's booktitle matches
///
/// Other entry types, and inproceedings without a booktitle, match nothing.
pub fn special_venue_matches<'v>(
    entry: &BibTeXEntry,
    venues: &'v [SpecialVenue],
) -> Vec<&'v SpecialVenue> {
    if entry.entry_type != BibTeXEntryType::InProceedings {
        return Vec::new();
    }
    let Some(booktitle) = entry.booktitle() else {
        return Vec::new();
    };
    venues
        .iter()
        .filter(|venue| booktitle.contains(&venue.pattern))
        .collect()
}
