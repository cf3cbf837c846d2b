//! Test fixture loading utilities

use std::path::PathBuf;

use pubtab_bibtex::BibTeXEntry;

/// Get the path to a BibTeX fixture file
pub fn bibtex_fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join("bibtex")
        .join(name)
}

/// Load and parse a BibTeX fixture
pub fn load_bibtex_fixture(name: &str) -> Vec<BibTeXEntry> {
    pubtab_core::load_entries(&bibtex_fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}
