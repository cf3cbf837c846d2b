//! Publication counts by category and year
//!
//! Cells hold sets of citation keys, so a record seen in several input files
//! is counted once per category-year cell.

use std::collections::{BTreeMap, BTreeSet};

use pubtab_bibtex::BibTeXEntry;

use crate::category::{classify_entry, special_venue_matches, Category};
use crate::config::CountConfig;

/// Row key of the count matrix
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    Category(Category),
    /// Sub-bucket of a special venue, by venue name
    Special(String),
}

/// Category × year → distinct citation keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMatrix {
    cells: BTreeMap<Bucket, BTreeMap<String, BTreeSet<String>>>,
}

impl CountMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key to a cell; returns false if it was already counted there
    pub fn insert(&mut self, bucket: Bucket, year: &str, cite_key: &str) -> bool {
        self.cells
            .entry(bucket)
            .or_default()
            .entry(year.to_string())
            .or_default()
            .insert(cite_key.to_string())
    }

    pub fn count(&self, bucket: &Bucket, year: &str) -> usize {
        self.cells
            .get(bucket)
            .and_then(|years| years.get(year))
            .map_or(0, BTreeSet::len)
    }

    /// Counts of a bucket for the given years, 0 for empty cells
    pub fn row(&self, bucket: &Bucket, years: &[&str]) -> Vec<usize> {
        years.iter().map(|year| self.count(bucket, year)).collect()
    }

    pub fn total(&self, bucket: &Bucket) -> usize {
        self.cells
            .get(bucket)
            .map_or(0, |years| years.values().map(BTreeSet::len).sum())
    }

    /// Every year with at least one counted record, descending
    pub fn years(&self) -> Vec<&str> {
        let years: BTreeSet<&str> = self
            .cells
            .values()
            .flat_map(|years| years.keys().map(String::as_str))
            .collect();
        years.into_iter().rev().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Tally of what happened to the records seen by an aggregator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub counted: usize,
    pub missing_year: usize,
    pub before_min_year: usize,
    pub missing_attribution: usize,
    pub other_author: usize,
}

/// Builds a [`CountMatrix`] from one or more record sources
///
/// Anomalous records are skipped with a warning, never fatal.
pub struct CountAggregator<'c> {
    config: &'c CountConfig,
    matrix: CountMatrix,
    stats: AggregateStats,
}

impl<'c> CountAggregator<'c> {
    pub fn new(config: &'c CountConfig) -> Self {
        Self {
            config,
            matrix: CountMatrix::new(),
            stats: AggregateStats::default(),
        }
    }

    /// Add every entry of one source
    pub fn add_entries<'e>(&mut self, entries: impl IntoIterator<Item = &'e BibTeXEntry>) {
        for entry in entries {
            self.add_entry(entry);
        }
    }

    pub fn add_entry(&mut self, entry: &BibTeXEntry) {
        let key = entry.cite_key.as_str();
        let category = classify_entry(entry);

        let Some(year) = entry.year() else {
            tracing::warn!("Entry '{key}' has no year!");
            self.stats.missing_year += 1;
            return;
        };

        if year < self.config.min_year.as_str() {
            self.stats.before_min_year += 1;
            return;
        }

        let Some(names) = attributed_names(entry) else {
            tracing::warn!("Entry '{key}' has neither author nor editor");
            self.stats.missing_attribution += 1;
            return;
        };

        if !lists_author(&names, &self.config.target_author) {
            tracing::warn!(
                "Publication {key} is not by {} but by {}",
                self.config.target_author,
                names.join("; ")
            );
            self.stats.other_author += 1;
            return;
        }

        self.matrix.insert(Bucket::Category(category), year, key);
        for venue in special_venue_matches(entry, self.config.active_special_venues()) {
            self.matrix
                .insert(Bucket::Special(venue.name.clone()), year, key);
        }
        self.stats.counted += 1;
    }

    pub fn stats(&self) -> AggregateStats {
        self.stats
    }

    pub fn finish(self) -> CountMatrix {
        tracing::debug!(stats = ?self.stats, "aggregation finished");
        self.matrix
    }
}

/// Author names followed by editor names, each in "Last, First" form
///
/// `None` when the record has neither field.
pub fn attributed_names(entry: &BibTeXEntry) -> Option<Vec<String>> {
    if entry.author().is_none() && entry.editor().is_none() {
        return None;
    }
    Some(
        [entry.author(), entry.editor()]
            .into_iter()
            .flatten()
            .flat_map(split_names)
            .collect(),
    )
}

fn split_names(field: &str) -> impl Iterator<Item = String> + '_ {
    field
        .split(" and ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(last_first)
}

/// Rewrite "First Last" as "Last, First"; comma forms only get tidied
pub fn last_first(name: &str) -> String {
    let words = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ");

    if let Some((last, first)) = name.split_once(',') {
        let (last, first) = (words(last), words(first));
        return if first.is_empty() {
            last
        } else {
            format!("{last}, {first}")
        };
    }

    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.split_last() {
        Some((last, [])) => last.to_string(),
        Some((last, first)) => format!("{}, {}", last, first.join(" ")),
        None => String::new(),
    }
}

/// True if a name equals the target or carries the target's surname
pub fn lists_author(names: &[String], target: &str) -> bool {
    let surname = target.split(',').next().unwrap_or(target).trim();
    names
        .iter()
        .any(|name| name == target || (!surname.is_empty() && name.contains(surname)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubtab_bibtex::BibTeXEntryType;
    use rstest::rstest;

    fn by_target(key: &str, ty: BibTeXEntryType, year: &str) -> BibTeXEntry {
        BibTeXEntry::new(key, ty)
            .with_field("author", "Uwe D. Hanebeck and A. Person")
            .with_field("title", "T")
            .with_field("year", year)
    }

    fn conferences() -> Bucket {
        Bucket::Category(Category::Conferences)
    }

    #[rstest]
    #[case("Uwe D. Hanebeck", "Hanebeck, Uwe D.")]
    #[case("Hanebeck, Uwe D.", "Hanebeck, Uwe D.")]
    #[case("  Hanebeck ,  Uwe  D. ", "Hanebeck, Uwe D.")]
    #[case("Plato", "Plato")]
    #[case("Plato,", "Plato")]
    fn test_last_first(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(last_first(name), expected);
    }

    #[test]
    fn test_attributed_names_concatenates_editors() {
        let entry = BibTeXEntry::new("E", BibTeXEntryType::InCollection)
            .with_field("author", "A. Uthor")
            .with_field("editor", "Uwe D. Hanebeck and E. Ditor");
        assert_eq!(
            attributed_names(&entry).unwrap(),
            vec!["Uthor, A.", "Hanebeck, Uwe D.", "Ditor, E."]
        );
        assert!(attributed_names(&BibTeXEntry::new("N", BibTeXEntryType::Misc)).is_none());
    }

    #[test]
    fn test_lists_author() {
        let target = "Hanebeck, Uwe D.";
        assert!(lists_author(&["Hanebeck, Uwe D.".into()], target));
        assert!(lists_author(&["Other, A.".into(), "Hanebeck, U.".into()], target));
        assert!(!lists_author(&["Other, A.".into()], target));
    }

    #[test]
    fn test_duplicate_keys_across_sources_counted_once() {
        let config = CountConfig::default();
        let mut aggregator = CountAggregator::new(&config);
        let file_a = vec![by_target("K1", BibTeXEntryType::InProceedings, "2020")];
        let file_b = vec![
            by_target("K1", BibTeXEntryType::InProceedings, "2020"),
            by_target("K2", BibTeXEntryType::InProceedings, "2020"),
        ];
        aggregator.add_entries(&file_a);
        aggregator.add_entries(&file_b);
        let matrix = aggregator.finish();

        assert_eq!(matrix.count(&conferences(), "2020"), 2);
        assert_eq!(matrix.total(&conferences()), 2);
    }

    #[test]
    fn test_skips_and_drops() {
        let config = CountConfig::default();
        let mut aggregator = CountAggregator::new(&config);

        let mut no_year = by_target("NoYear", BibTeXEntryType::Article, "2020");
        no_year.fields.retain(|f| f.key != "year");
        let old = by_target("Old", BibTeXEntryType::Article, "1988");
        let stranger = BibTeXEntry::new("Stranger", BibTeXEntryType::Article)
            .with_field("author", "Jane Doe")
            .with_field("year", "2020");
        let anonymous = BibTeXEntry::new("Anon", BibTeXEntryType::Article).with_field("year", "2020");
        let good = by_target("Good", BibTeXEntryType::Article, "1989");

        aggregator.add_entries([&no_year, &old, &stranger, &anonymous, &good]);

        assert_eq!(
            aggregator.stats(),
            AggregateStats {
                counted: 1,
                missing_year: 1,
                before_min_year: 1,
                missing_attribution: 1,
                other_author: 1,
            }
        );
        let matrix = aggregator.finish();
        assert_eq!(matrix.years(), vec!["1989"]);
        assert_eq!(matrix.count(&Bucket::Category(Category::Journals), "1989"), 1);
    }

    #[test]
    fn test_arxiv_key_counts_as_preprint() {
        let config = CountConfig::default();
        let mut aggregator = CountAggregator::new(&config);
        aggregator.add_entry(&by_target("arXiv21_Filter", BibTeXEntryType::Article, "2021"));
        let matrix = aggregator.finish();
        assert_eq!(matrix.count(&Bucket::Category(Category::Preprints), "2021"), 1);
        assert_eq!(matrix.count(&Bucket::Category(Category::Journals), "2021"), 0);
    }

    #[test]
    fn test_special_sub_buckets() {
        let config = CountConfig {
            special_venues_enabled: true,
            ..CountConfig::default()
        };
        let mut aggregator = CountAggregator::new(&config);

        let fusion = by_target("F1", BibTeXEntryType::InProceedings, "2022").with_field(
            "booktitle",
            "Proceedings of the International Conference on Information Fusion (Fusion 2022)",
        );
        let no_venue = by_target("C1", BibTeXEntryType::InProceedings, "2022");
        let journal = by_target("J1", BibTeXEntryType::Article, "2022")
            .with_field("booktitle", "International Conference on Information Fusion");
        aggregator.add_entries([&fusion, &no_venue, &journal]);
        let matrix = aggregator.finish();

        let special = Bucket::Special("Fusion".into());
        assert_eq!(matrix.count(&special, "2022"), 1);
        assert_eq!(matrix.count(&conferences(), "2022"), 2);
        assert_eq!(matrix.count(&Bucket::Category(Category::Journals), "2022"), 1);
    }

    #[test]
    fn test_conference_tag_counts_as_other() {
        let config = CountConfig {
            special_venues_enabled: true,
            ..CountConfig::default()
        };
        let mut aggregator = CountAggregator::new(&config);
        aggregator.add_entry(
            &by_target("C1", BibTeXEntryType::from_tag("conference"), "2020")
                .with_field("booktitle", "International Conference on Information Fusion"),
        );
        let matrix = aggregator.finish();
        assert_eq!(matrix.count(&Bucket::Category(Category::Other), "2020"), 1);
        assert_eq!(matrix.count(&conferences(), "2020"), 0);
        assert_eq!(matrix.count(&Bucket::Special("Fusion".into()), "2020"), 0);
    }

    #[test]
    fn test_special_buckets_off_by_default() {
        let config = CountConfig::default();
        let mut aggregator = CountAggregator::new(&config);
        aggregator.add_entry(
            &by_target("F1", BibTeXEntryType::InProceedings, "2022")
                .with_field("booktitle", "International Conference on Information Fusion"),
        );
        let matrix = aggregator.finish();
        assert_eq!(matrix.count(&Bucket::Special("Fusion".into()), "2022"), 0);
    }

    #[test]
    fn test_matrix_years_descend_as_strings() {
        let mut matrix = CountMatrix::new();
        assert!(matrix.is_empty());
        matrix.insert(conferences(), "2009", "a");
        matrix.insert(Bucket::Category(Category::Other), "2010", "b");
        assert!(!matrix.insert(conferences(), "2009", "a"));
        assert_eq!(matrix.years(), vec!["2010", "2009"]);
        assert_eq!(matrix.row(&conferences(), &["2010", "2009"]), vec![0, 1]);
    }
}
