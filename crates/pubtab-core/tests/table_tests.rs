//! Publication listing integration tests

mod common;

use common::fixtures::load_bibtex_fixture;
use pubtab_core::{ReportConfig, ReportError, TableRenderer};

fn render_fixture(name: &str) -> Result<String, ReportError> {
    let config = ReportConfig::default();
    TableRenderer::new(&config).render(&load_bibtex_fixture(name))
}

#[test]
fn test_listing_orders_years_and_months() {
    let html = render_fixture("publications.bib").unwrap();
    let pos = |needle: &str| {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle}"))
    };

    assert!(html.starts_with("<table id=\"qs_table\" border=\"1\"><tbody>\n"));
    assert!(html.ends_with("</tbody></table>"));

    assert!(pos("<a name=\"2022\">") < pos("<a name=\"2021\">"));
    assert!(pos("<a name=\"2021\">") < pos("<a name=\"2020\">"));
    assert!(pos("<a name=\"2020\">") < pos("<a name=\"1988\">"));

    // No month sorts before December
    assert!(pos("<tr id=\"arXiv21_Kurz\"") < pos("<tr id=\"JAIF21_Mueller\""));
    // Same month keeps input order
    assert!(pos("<tr id=\"Book20_Hanebeck\"") < pos("<tr id=\"MFI20_Doe\""));
}

#[test]
fn test_listing_entry_details() {
    let html = render_fixture("publications.bib").unwrap();

    assert!(html.contains(
        "<td> <i>Jane Smith, Uwe D. Hanebeck</i>,</br> <b>Nonlinear Filtering on the Circle</b>,</br>\
         Proceedings of the 25th International Conference on Information Fusion (Fusion 2022), \
         pp. 1\u{2013}8, Link\u{f6}ping, Sweden, July, 2022.\n"
    ));
    assert!(html.contains(
        "<td> <i>Hans M\u{fc}ller, Uwe D. Hanebeck</i>,</br> \
         <b>Progressive Gaussian Filtering\u{2014}A Survey</b>,</br>\
         Journal of Advances in Information Fusion, 16(2):85\u{2013}101, December, 2021.\n"
    ));
    assert!(html.contains(
        "<td> <i>Uwe D. Hanebeck, Jane Smith (Eds.)</i>,</br> \
         <b>Multisensor Fusion and Integration</b>,</br>\
         Springer, Lecture Notes in Electrical Engineering, 2020.\n"
    ));
    assert!(html.contains("<b>Tracking Extended Objects</b>"));
}

#[test]
fn test_listing_styles_and_links() {
    let html = render_fixture("publications.bib").unwrap();

    assert!(html.contains("<tr id=\"Fusion22_Smith\" class=\"entry\">\n<td><div class=\"balken-inproceedings\">"));
    assert!(html.contains("<tr id=\"arXiv21_Kurz\" class=\"entry\">\n<td><div class=\"balken-preprint\">"));
    assert!(html.contains("<tr id=\"Book20_Hanebeck\" class=\"entry\">\n<td><div class=\"balken-book\">"));

    assert!(html.contains("href=\"https://isas.iar.kit.edu/pdf/Fusion22_Smith.pdf\""));
    // A PDF suppresses the URL link for conference papers
    assert!(!html.contains("https://example.org/fusion22\" target"));

    assert!(html.contains("<tr id=\"bib_Fusion22_Smith\" class=\"bibtex noshow\">"));
    assert!(html.contains("<pre>\n@inproceedings{Fusion22_Smith,\n"));
}

#[test]
fn test_inconsistent_name_aborts_listing() {
    let err = render_fixture("inconsistent_name.bib").unwrap_err();
    match err {
        ReportError::InconsistentName {
            cite_key, title, ..
        } => {
            assert_eq!(cite_key, "Bad19_Hanebeck");
            assert_eq!(title, "Misspelled Byline");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_name_rule_can_be_disabled() {
    let config = ReportConfig::from_toml("[names]\nenabled = false\n").unwrap();
    let html = TableRenderer::new(&config)
        .render(&load_bibtex_fixture("inconsistent_name.bib"))
        .unwrap();
    assert!(html.contains("<i>U. Hanebeck, A. Person</i>"));
}
