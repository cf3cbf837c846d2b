//! BibTeX record source
//!
//! Turns raw BibTeX text into a sequence of string-keyed records with
//! Unicode field values, and renders records back to BibTeX text for
//! display.
//!
//! Features:
//! - Nom-based parser with `@string`, `@preamble` and `@comment` support
//! - Built-in month macros (`jan` .. `dec`)
//! - LaTeX special character decoding
//! - Deterministic re-formatting of single entries

mod entry;
mod formatter;
mod latex_decoder;
mod parser;

pub use entry::{BibTeXEntry, BibTeXEntryType, BibTeXField};
pub use formatter::format_entry;
pub use latex_decoder::decode_latex;
pub use parser::{parse, parse_unicode, BibTeXParseError, BibTeXParseResult};
