//! BibTeX entry data structures

use std::collections::BTreeMap;

/// BibTeX entry type
///
/// Standard tags get their own variant. Anything else is carried verbatim in
/// [`BibTeXEntryType::Other`] so downstream classification still sees the
/// declared tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BibTeXEntryType {
    Article,
    Book,
    Booklet,
    InBook,
    InCollection,
    InProceedings,
    Manual,
    MastersThesis,
    Misc,
    PhdThesis,
    Preprint,
    Proceedings,
    TechReport,
    Unpublished,
    Other(String),
}

impl BibTeXEntryType {
    /// Parse an entry type from its tag (case-insensitive)
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_lowercase();
        match tag.as_str() {
            "article" => Self::Article,
            "book" => Self::Book,
            "booklet" => Self::Booklet,
            "inbook" => Self::InBook,
            "incollection" => Self::InCollection,
            "inproceedings" => Self::InProceedings,
            "manual" => Self::Manual,
            "mastersthesis" => Self::MastersThesis,
            "misc" => Self::Misc,
            "phdthesis" => Self::PhdThesis,
            "preprint" => Self::Preprint,
            "proceedings" => Self::Proceedings,
            "techreport" => Self::TechReport,
            "unpublished" => Self::Unpublished,
            _ => Self::Other(tag),
        }
    }

    /// Canonical lowercase tag
    pub fn as_str(&self) -> &str {
        match self {
            Self::Article => "article",
            Self::Book => "book",
            Self::Booklet => "booklet",
            Self::InBook => "inbook",
            Self::InCollection => "incollection",
            Self::InProceedings => "inproceedings",
            Self::Manual => "manual",
            Self::MastersThesis => "mastersthesis",
            Self::Misc => "misc",
            Self::PhdThesis => "phdthesis",
            Self::Preprint => "preprint",
            Self::Proceedings => "proceedings",
            Self::TechReport => "techreport",
            Self::Unpublished => "unpublished",
            Self::Other(tag) => tag,
        }
    }
}

/// A single BibTeX field (key-value pair)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibTeXField {
    pub key: String,
    pub value: String,
}

/// A parsed BibTeX entry
///
/// Field keys are stored lowercase; lookups are exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibTeXEntry {
    pub cite_key: String,
    pub entry_type: BibTeXEntryType,
    pub fields: Vec<BibTeXField>,
}

impl BibTeXEntry {
    /// Create a new BibTeX entry
    pub fn new(cite_key: impl Into<String>, entry_type: BibTeXEntryType) -> Self {
        Self {
            cite_key: cite_key.into(),
            entry_type,
            fields: Vec::new(),
        }
    }

    /// Add a field, replacing an earlier value stored under the same key
    pub fn add_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into().to_lowercase();
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.key == key) {
            Some(existing) => existing.value = value,
            None => self.fields.push(BibTeXField { key, value }),
        }
    }

    /// Builder-style variant of [`BibTeXEntry::add_field`]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_field(key, value);
        self
    }

    /// Get a field value by its lowercase key
    pub fn get_field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.get_field(key).is_some()
    }

    /// Fields keyed by name, in alphabetical order
    pub fn fields_map(&self) -> BTreeMap<&str, &str> {
        self.fields
            .iter()
            .map(|f| (f.key.as_str(), f.value.as_str()))
            .collect()
    }

    pub fn title(&self) -> Option<&str> {
        self.get_field("title")
    }

    pub fn author(&self) -> Option<&str> {
        self.get_field("author")
    }

    pub fn editor(&self) -> Option<&str> {
        self.get_field("editor")
    }

    pub fn year(&self) -> Option<&str> {
        self.get_field("year")
    }

    pub fn month(&self) -> Option<&str> {
        self.get_field("month")
    }

    pub fn booktitle(&self) -> Option<&str> {
        self.get_field("booktitle")
    }

    pub fn journal(&self) -> Option<&str> {
        self.get_field("journal")
    }
}
