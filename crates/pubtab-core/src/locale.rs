//! Localized labels for the count table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::config::SpecialVenue;
use crate::error::ReportError;

/// Supported label languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    pub fn table(&self) -> &'static LocaleTable {
        match self {
            Locale::En => &EN,
            Locale::De => &DE,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            other => Err(ReportError::Config(format!("unsupported locale '{other}'"))),
        }
    }
}

/// Labels of one language
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleTable {
    pub type_year: &'static str,
    pub total: &'static str,
    /// Extra style put in front of the Conferences box style
    conferences_style_prefix: &'static str,
    /// Category labels in [`Category::ALL`] order
    category_labels: [&'static str; 7],
}

static EN: LocaleTable = LocaleTable {
    type_year: "<div style=\"width:125px; height:10px; display: inline-block;\">Type / Year</div>",
    total: "<div align=\"left\">Total</div>",
    conferences_style_prefix: "align:left; ",
    category_labels: [
        "Conferences",
        "Journals",
        "In Books",
        "Editorship",
        "Books and Theses",
        "Preprints",
        "Other",
    ],
};

static DE: LocaleTable = LocaleTable {
    type_year: "Typ / Jahr",
    total: "Gesamt",
    conferences_style_prefix: "",
    category_labels: [
        "Konferenzen",
        "Zeitschriften",
        "In Büchern",
        "Editor von Büchern oder Zeitschriften",
        "Bücher und Thesen",
        "Preprints",
        "Andere",
    ],
};

impl LocaleTable {
    pub fn category_label(&self, category: Category) -> &'static str {
        let index = Category::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(Category::ALL.len() - 1);
        self.category_labels[index]
    }

    /// Row label cell for a category, with its colored box
    pub fn category_header(&self, category: Category) -> String {
        let prefix = if category == Category::Conferences {
            self.conferences_style_prefix
        } else {
            ""
        };
        format!(
            "<div align=\"left\"><div class=\"{}\" style=\"{}width:10px; height:10px; \
             display: inline-block;\"></div> {} </div>",
            category.css_class(),
            prefix,
            self.category_label(category)
        )
    }

    /// Row label cell for a special venue; identical in every language
    pub fn special_header(&self, venue: &SpecialVenue) -> String {
        format!(
            "<div class=\"{}\" style=\"width:10px; height:10px; display: inline-block;\"></div> \
             <div style=\"text-indent:20px;width:10px; height:10px; display: inline-block;\">\
             <span title=\"{}\">{}</span></div>",
            venue.css_class, venue.description, venue.name
        )
    }
}
