//! BibTeX formatting module
//!
//! Converts entries back to BibTeX text. Fields are written in alphabetical
//! order, one per line, so the output does not depend on source ordering.

use super::entry::BibTeXEntry;

const INDENT: &str = " ";

/// Format a single BibTeX entry to string
pub fn format_entry(entry: &BibTeXEntry) -> String {
    let mut result = String::new();

    result.push('@');
    result.push_str(entry.entry_type.as_str());
    result.push('{');
    result.push_str(&entry.cite_key);

    for (key, value) in entry.fields_map() {
        result.push_str(",\n");
        result.push_str(INDENT);
        result.push_str(key);
        result.push_str(" = ");
        result.push_str(&format_field_value(value));
    }

    result.push_str("\n}\n");
    result
}

/// Every value is written in braces, numbers included
fn format_field_value(value: &str) -> String {
    format!("{{{value}}}")
}
