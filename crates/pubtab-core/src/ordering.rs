//! Sort and grouping helpers
//!
//! Years are compared as strings, never as integers. Months follow a fixed
//! order: records without a month first, then December down to January.

use std::collections::BTreeSet;

/// Label for records without a month field
pub const NO_MONTH: &str = "none";

/// Intra-year row order
pub const MONTH_ORDER: [&str; 13] = [
    NO_MONTH,
    "December",
    "November",
    "October",
    "September",
    "August",
    "July",
    "June",
    "May",
    "April",
    "March",
    "February",
    "January",
];

/// Map a month value to its full English name
///
/// Accepts full names, three-letter abbreviations and `Sept` in any case
/// (with an optional trailing dot) as well as the numbers 1 to 12.
pub fn canonical_month(raw: &str) -> Option<&'static str> {
    let mut value = raw.trim().trim_end_matches('.').to_lowercase();
    if value == "sept" {
        value.truncate(3);
    }

    if let Ok(number) = value.parse::<usize>() {
        return (1..=12)
            .contains(&number)
            .then(|| MONTH_ORDER[13 - number]);
    }

    MONTH_ORDER[1..].iter().copied().find(|name| {
        let name_lower = name.to_lowercase();
        name_lower == value || (value.len() == 3 && name_lower.starts_with(&value))
    })
}

/// Position of a month (or `None` for "no month") in [`MONTH_ORDER`]
pub fn month_rank(month: Option<&str>) -> usize {
    let label = month.unwrap_or(NO_MONTH);
    MONTH_ORDER
        .iter()
        .position(|m| *m == label)
        .unwrap_or(MONTH_ORDER.len())
}

/// Distinct years, descending by string comparison
pub fn years_descending<'a>(years: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let distinct: BTreeSet<&str> = years.into_iter().collect();
    distinct.into_iter().rev().collect()
}

/// Items of one year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup<'a, T> {
    pub year: &'a str,
    pub items: Vec<&'a T>,
}

/// Group items by year (descending), ordering each year by month rank
///
/// Items that share a year and month keep their input order.
pub fn group_by_year_month<'a, T>(
    items: &'a [T],
    year_of: impl Fn(&'a T) -> &'a str,
    month_of: impl Fn(&'a T) -> Option<&'a str>,
) -> Vec<YearGroup<'a, T>> {
    years_descending(items.iter().map(&year_of))
        .into_iter()
        .map(|year| {
            let mut in_year: Vec<&T> = items.iter().filter(|item| year_of(*item) == year).collect();
            // sort_by_key is stable
            in_year.sort_by_key(|item| month_rank(month_of(*item)));
            YearGroup {
                year,
                items: in_year,
            }
        })
        .collect()
}
