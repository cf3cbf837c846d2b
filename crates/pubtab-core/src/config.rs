//! Configuration for the report tools
//!
//! Every setting has a default, so an empty TOML document (or no config file
//! at all) reproduces the stock behavior:
//!
//! ```toml
//! [names]
//! surname = "Hanebeck"
//! full_name = "Uwe D. Hanebeck"
//!
//! [table]
//! pdf_base_url = "https://isas.iar.kit.edu/pdf/"
//!
//! [counts]
//! target_author = "Hanebeck, Uwe D."
//! min_year = "1989"
//! special_venues_enabled = true
//!
//! [[counts.special_venues]]
//! name = "Fusion"
//! pattern = "International Conference on Information Fusion"
//! css_class = "balken-fusion"
//! description = "Fusion: International Conference on Information Fusion"
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub names: NameRule,
    pub table: TableConfig,
    pub counts: CountConfig,
}

/// Guards against a surname appearing without its canonical full name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NameRule {
    pub enabled: bool,
    pub surname: String,
    pub full_name: String,
}

impl Default for NameRule {
    fn default() -> Self {
        Self {
            enabled: true,
            surname: "Hanebeck".to_string(),
            full_name: "Uwe D. Hanebeck".to_string(),
        }
    }
}

/// Settings for the publication listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    /// Prefix joined with the `pdf` field to form the PDF link
    pub pdf_base_url: String,
    pub bibtex_icon_url: String,
    pub pdf_icon_url: String,
    /// Appended to the byline of editor-only records
    pub editor_marker: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            pdf_base_url: "https://isas.iar.kit.edu/pdf/".to_string(),
            bibtex_icon_url: "https://isas.iar.kit.edu/img/BibTeX.png".to_string(),
            pdf_icon_url: "https://isas.iar.kit.edu/img/PDF.png".to_string(),
            editor_marker: " (Eds.)".to_string(),
        }
    }
}

/// Settings for the publication count table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CountConfig {
    /// Name (in "Last, First" form) a record must list to be counted
    pub target_author: String,
    /// Records with a year lexically below this are dropped
    pub min_year: String,
    pub special_venues_enabled: bool,
    pub special_venues: Vec<SpecialVenue>,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            target_author: "Hanebeck, Uwe D.".to_string(),
            min_year: "1989".to_string(),
            special_venues_enabled: false,
            special_venues: vec![
                SpecialVenue {
                    name: "Fusion".to_string(),
                    pattern: "International Conference on Information Fusion".to_string(),
                    css_class: "balken-fusion".to_string(),
                    description: "Fusion: International Conference on Information Fusion"
                        .to_string(),
                },
                SpecialVenue {
                    name: "MFI".to_string(),
                    pattern: "International Conference on Multisensor Fusion".to_string(),
                    css_class: "balken-mfi".to_string(),
                    description: "MFI: IEEE International Conference on Multisensor Fusion \
                                  and Integration for Intelligent Systems"
                        .to_string(),
                },
            ],
        }
    }
}

impl CountConfig {
    /// Special venues that take part in aggregation and rendering
    pub fn active_special_venues(&self) -> &[SpecialVenue] {
        if self.special_venues_enabled {
            &self.special_venues
        } else {
            &[]
        }
    }
}

/// A recurring conference series counted in its own sub-bucket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecialVenue {
    pub name: String,
    /// Substring searched for in the `booktitle` field
    pub pattern: String,
    pub css_class: String,
    /// Tooltip shown on the row label
    pub description: String,
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ReportError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ReportError::Config(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let rule = &self.names;
        if rule.enabled {
            if rule.surname.is_empty() {
                return Err(ReportError::Config("names.surname must not be empty".into()));
            }
            if !rule.full_name.contains(&rule.surname) {
                return Err(ReportError::Config(format!(
                    "names.full_name \"{}\" does not contain surname \"{}\"",
                    rule.full_name, rule.surname
                )));
            }
        }

        let target = &self.counts.target_author;
        match target.split_once(',') {
            Some((last, _)) if !last.trim().is_empty() => {}
            _ => {
                return Err(ReportError::Config(format!(
                    "counts.target_author \"{target}\" must be in \"Last, First\" form"
                )));
            }
        }

        let mut seen = HashSet::new();
        for venue in &self.counts.special_venues {
            if venue.name.is_empty() || venue.pattern.is_empty() {
                return Err(ReportError::Config(
                    "special venues need a name and a pattern".into(),
                ));
            }
            if !seen.insert(venue.name.as_str()) {
                return Err(ReportError::Config(format!(
                    "duplicate special venue '{}'",
                    venue.name
                )));
            }
        }

        Ok(())
    }
}
