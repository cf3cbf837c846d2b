//! Count aggregation and rendering integration tests

mod common;

use common::fixtures::load_bibtex_fixture;
use pubtab_core::{
    Bucket, Category, CountAggregator, CountConfig, CountMatrix, CountRenderer, Locale, OutputType,
};

fn aggregate(config: &CountConfig, files: &[&str]) -> CountMatrix {
    let mut aggregator = CountAggregator::new(config);
    for file in files {
        aggregator.add_entries(&load_bibtex_fixture(file));
    }
    aggregator.finish()
}

#[test]
fn test_single_file_counts() {
    let config = CountConfig::default();
    let matrix = aggregate(&config, &["publications.bib"]);

    assert_eq!(matrix.years(), vec!["2022", "2021", "2020"]);
    assert_eq!(matrix.count(&Bucket::Category(Category::Conferences), "2022"), 1);
    assert_eq!(matrix.count(&Bucket::Category(Category::Conferences), "2020"), 1);
    assert_eq!(matrix.count(&Bucket::Category(Category::Journals), "2021"), 1);
    assert_eq!(matrix.count(&Bucket::Category(Category::Preprints), "2021"), 1);
    assert_eq!(matrix.count(&Bucket::Category(Category::Editorship), "2020"), 1);

    let out = CountRenderer::new(vec![Locale::En], &[]).render(&matrix, OutputType::Simple);
    assert_eq!(
        out,
        "Conferences,Journals,In Books,Editorship,Books and Theses,Preprints,Other,Total\n\
         2,1,0,1,0,1,0,5\n"
    );
}

#[test]
fn test_multiple_files_are_unioned_without_double_counting() {
    let config = CountConfig::default();
    let mut aggregator = CountAggregator::new(&config);
    aggregator.add_entries(&load_bibtex_fixture("publications.bib"));
    aggregator.add_entries(&load_bibtex_fixture("additional.bib"));

    let stats = aggregator.stats();
    assert_eq!(stats.before_min_year, 1);
    assert_eq!(stats.other_author, 1);

    let matrix = aggregator.finish();
    assert_eq!(matrix.years(), vec!["2023", "2022", "2021", "2020"]);
    assert_eq!(matrix.count(&Bucket::Category(Category::Conferences), "2022"), 1);
    assert_eq!(matrix.count(&Bucket::Category(Category::InBooks), "2023"), 1);

    let out = CountRenderer::new(vec![Locale::En], &[]).render(&matrix, OutputType::Simple);
    assert!(out.ends_with("\n2,1,1,1,0,1,0,6\n"));
}

#[test]
fn test_full_table_with_special_venues() {
    let config = CountConfig {
        special_venues_enabled: true,
        ..CountConfig::default()
    };
    let matrix = aggregate(&config, &["publications.bib"]);
    let out = CountRenderer::new(vec![Locale::En, Locale::De], config.active_special_venues())
        .render(&matrix, OutputType::Full);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 11);
    assert!(lines[0].ends_with(
        "<b>Total</b>,<a href=\"#2022\">2022</a>,<a href=\"#2021\">2021</a>,<a href=\"#2020\">2020</a>"
    ));
    assert!(lines[1].ends_with(" Konferenzen </div>,<b>2</b>,1,0,1"));
    assert!(lines[2].contains(">Fusion</span>"));
    assert!(lines[2].ends_with(",<b>1</b>,1,0,0"));
    assert!(lines[3].contains(">MFI</span>"));
    assert!(lines[3].ends_with(",<b>1</b>,0,0,1"));
    assert_eq!(lines[10], "<div align=\"left\">Total</div>,Gesamt,<b>5</b>,1,2,2");
}
