//! Count table output
//!
//! Full mode writes comma-separated lines mixing HTML label cells and
//! numbers, meant to be embedded in a page's table. Simple mode writes a
//! plain header line and one line of per-category totals.

use std::fmt;
use std::str::FromStr;

use crate::category::Category;
use crate::config::SpecialVenue;
use crate::counts::{Bucket, CountMatrix};
use crate::error::ReportError;
use crate::locale::{Locale, LocaleTable};

/// Output flavor of the count table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputType {
    #[default]
    Full,
    Simple,
}

impl FromStr for OutputType {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(OutputType::Full),
            "simple" => Ok(OutputType::Simple),
            other => Err(ReportError::Config(format!("unknown output type '{other}'"))),
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputType::Full => "full",
            OutputType::Simple => "simple",
        })
    }
}

/// One labelled row of the full table
enum Row<'v> {
    Category(Category),
    Special(&'v SpecialVenue),
}

impl Row<'_> {
    fn bucket(&self) -> Bucket {
        match self {
            Row::Category(category) => Bucket::Category(*category),
            Row::Special(venue) => Bucket::Special(venue.name.clone()),
        }
    }

    fn label(&self, table: &LocaleTable) -> String {
        match self {
            Row::Category(category) => table.category_header(*category),
            Row::Special(venue) => table.special_header(venue),
        }
    }
}

/// Renders a [`CountMatrix`]
pub struct CountRenderer<'v> {
    locales: Vec<Locale>,
    special_venues: &'v [SpecialVenue],
}

impl<'v> CountRenderer<'v> {
    /// One label column per locale; an empty list falls back to English
    pub fn new(locales: Vec<Locale>, special_venues: &'v [SpecialVenue]) -> Self {
        let locales = if locales.is_empty() {
            vec![Locale::En]
        } else {
            locales
        };
        Self {
            locales,
            special_venues,
        }
    }

    pub fn render(&self, matrix: &CountMatrix, output_type: OutputType) -> String {
        match output_type {
            OutputType::Full => self.render_full(matrix),
            OutputType::Simple => self.render_simple(matrix),
        }
    }

    /// Special venue rows go right after Conferences
    fn rows(&self) -> Vec<Row<'v>> {
        let mut rows = vec![Row::Category(Category::Conferences)];
        rows.extend(self.special_venues.iter().map(Row::Special));
        rows.extend(Category::ALL[1..].iter().copied().map(Row::Category));
        rows
    }

    fn labels(&self, label: impl Fn(&LocaleTable) -> String) -> String {
        self.locales
            .iter()
            .map(|locale| label(locale.table()))
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn render_full(&self, matrix: &CountMatrix) -> String {
        let years = matrix.years();
        let mut out = String::new();

        let year_links = years
            .iter()
            .map(|year| format!("<a href=\"#{year}\">{year}</a>"))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&format!(
            "{},<b>Total</b>,{}\n",
            self.labels(|t| t.type_year.to_string()),
            year_links
        ));

        for row in self.rows() {
            let bucket = row.bucket();
            let counts = matrix.row(&bucket, &years);
            out.push_str(&format!(
                "{},<b>{}</b>,{}\n",
                self.labels(|t| row.label(t)),
                counts.iter().sum::<usize>(),
                join_counts(&counts)
            ));
        }

        let year_totals = primary_year_totals(matrix, &years);
        out.push_str(&format!(
            "{},<b>{}</b>,{}\n",
            self.labels(|t| t.total.to_string()),
            year_totals.iter().sum::<usize>(),
            join_counts(&year_totals)
        ));

        out
    }

    pub fn render_simple(&self, matrix: &CountMatrix) -> String {
        let totals: Vec<usize> = Category::ALL
            .iter()
            .map(|category| matrix.total(&Bucket::Category(*category)))
            .collect();
        let names: Vec<&str> = Category::ALL.iter().map(Category::name).collect();

        format!(
            "{},Total\n{},{}\n",
            names.join(","),
            join_counts(&totals),
            totals.iter().sum::<usize>()
        )
    }
}

/// Per-year sums over the seven primary categories
fn primary_year_totals(matrix: &CountMatrix, years: &[&str]) -> Vec<usize> {
    years
        .iter()
        .map(|year| {
            Category::ALL
                .iter()
                .map(|category| matrix.count(&Bucket::Category(*category), year))
                .sum()
        })
        .collect()
}

fn join_counts(counts: &[usize]) -> String {
    counts
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
