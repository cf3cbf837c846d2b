//! BibTeX parser implementation using nom
//!
//! This parser handles standard BibTeX format including:
//! - @string definitions (plus the built-in month macros)
//! - @preamble declarations and @comment sections (skipped)
//! - All standard entry types, unknown tags are kept verbatim
//! - Braced and quoted field values
//! - String concatenation with #
//! - Nested braces in field values
//!
//! Field names and entry type tags are lowercased; macro names are matched
//! case-insensitively.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::map,
    IResult,
};
use std::collections::HashMap;

use super::entry::{BibTeXEntry, BibTeXEntryType};
use super::latex_decoder::decode_latex;

/// Month macros every BibTeX style predefines
const MONTH_MACROS: [(&str, &str); 12] = [
    ("jan", "January"),
    ("feb", "February"),
    ("mar", "March"),
    ("apr", "April"),
    ("may", "May"),
    ("jun", "June"),
    ("jul", "July"),
    ("aug", "August"),
    ("sep", "September"),
    ("oct", "October"),
    ("nov", "November"),
    ("dec", "December"),
];

/// A block the parser could not read
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct BibTeXParseError {
    /// Line of the block's `@`, 1-based
    pub line: u32,
    pub message: String,
}

/// Result of parsing a BibTeX file
///
/// Unreadable blocks do not stop parsing; they are listed in `errors` and
/// callers decide whether that is fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BibTeXParseResult {
    pub entries: Vec<BibTeXEntry>,
    pub errors: Vec<BibTeXParseError>,
}

impl BibTeXParseResult {
    /// Decode LaTeX in every entry's field values to Unicode
    pub fn into_unicode(mut self) -> Self {
        for entry in &mut self.entries {
            for field in &mut entry.fields {
                field.value = decode_latex(&field.value);
            }
        }
        self
    }

    /// Entries, or the first unreadable block
    pub fn into_entries(self) -> Result<Vec<BibTeXEntry>, BibTeXParseError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.entries),
        }
    }
}

/// Parse a BibTeX string, keeping field values as written
pub fn parse(input: String) -> BibTeXParseResult {
    parse_bibtex(&input)
}

/// Parse a BibTeX string and decode all field values to Unicode
pub fn parse_unicode(input: String) -> BibTeXParseResult {
    parse_bibtex(&input).into_unicode()
}

fn parse_bibtex(input: &str) -> BibTeXParseResult {
    let mut result = BibTeXParseResult::default();

    // Macro table used for lookups: built-ins first so user definitions win.
    let mut macros: HashMap<String, String> = MONTH_MACROS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let mut remaining = input;
    let mut current_line = 1u32;

    while !remaining.is_empty() {
        // Skip whitespace and count newlines
        let (rest, skipped) = skip_whitespace_and_comments(remaining);
        current_line += count_lines(skipped);
        remaining = rest;

        if remaining.is_empty() {
            break;
        }

        if remaining.starts_with('@') {
            match parse_at_entry(remaining, &macros) {
                Ok((rest, entry_result)) => {
                    let consumed = &remaining[..remaining.len() - rest.len()];
                    match entry_result {
                        AtEntry::Entry(entry) => result.entries.push(entry),
                        AtEntry::String(key, value) => {
                            macros.insert(key.to_lowercase(), value);
                        }
                        AtEntry::Skipped => {}
                    }
                    current_line += count_lines(consumed);
                    remaining = rest;
                }
                Err(_) => {
                    result.errors.push(BibTeXParseError {
                        line: current_line,
                        message: "Failed to parse entry".to_string(),
                    });
                    // Resynchronise at the next @ or give up
                    match remaining[1..].find('@') {
                        Some(pos) => {
                            current_line += count_lines(&remaining[..pos + 1]);
                            remaining = &remaining[pos + 1..];
                        }
                        None => break,
                    }
                }
            }
        } else {
            // Free text between entries is an implicit comment
            match remaining.find('@') {
                Some(pos) => {
                    current_line += count_lines(&remaining[..pos]);
                    remaining = &remaining[pos..];
                }
                None => break,
            }
        }
    }

    result
}

fn count_lines(text: &str) -> u32 {
    text.matches('\n').count() as u32
}

/// Result of parsing an @ entry
enum AtEntry {
    Entry(BibTeXEntry),
    String(String, String),
    /// @preamble or @comment
    Skipped,
}

/// Skip whitespace and comments, return remaining input and skipped text
fn skip_whitespace_and_comments(input: &str) -> (&str, &str) {
    let mut pos = 0;
    let bytes = input.as_bytes();

    while pos < bytes.len() {
        if bytes[pos].is_ascii_whitespace() {
            pos += 1;
        } else if bytes[pos] == b'%' {
            // Line comment
            while pos < bytes.len() && bytes[pos] != b'\n' {
                pos += 1;
            }
        } else {
            break;
        }
    }

    (&input[pos..], &input[..pos])
}

/// Parse an @ entry (entry, string, preamble, or comment)
fn parse_at_entry<'a>(
    input: &'a str,
    macros: &HashMap<String, String>,
) -> IResult<&'a str, AtEntry> {
    let (rest, _) = char('@')(input)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, entry_type) = take_while1(|c: char| c.is_ascii_alphanumeric())(rest)?;

    match entry_type.to_lowercase().as_str() {
        "string" => {
            let (rest, (key, value)) = parse_string_definition(rest, macros)?;
            Ok((rest, AtEntry::String(key, value)))
        }
        "preamble" => {
            let (rest, _) = parse_preamble(rest, macros)?;
            Ok((rest, AtEntry::Skipped))
        }
        "comment" => {
            let (rest, _) = parse_comment_body(rest)?;
            Ok((rest, AtEntry::Skipped))
        }
        _ => {
            let (rest, entry) = parse_entry_body(rest, entry_type, macros)?;
            Ok((rest, AtEntry::Entry(entry)))
        }
    }
}

/// Parse a @string definition
fn parse_string_definition<'a>(
    input: &'a str,
    macros: &HashMap<String, String>,
) -> IResult<&'a str, (String, String)> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, (key, value)) = parse_single_field(rest, macros)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('}')(rest)?;

    Ok((rest, (key, value)))
}

/// Parse a @preamble, discarding its text
fn parse_preamble<'a>(
    input: &'a str,
    macros: &HashMap<String, String>,
) -> IResult<&'a str, ()> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = parse_field_value(rest, macros)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('}')(rest)?;

    Ok((rest, ()))
}

/// Parse a @comment body (skip everything in braces or to end of line)
fn parse_comment_body(input: &str) -> IResult<&str, ()> {
    let (rest, _) = multispace0(input)?;
    if rest.starts_with('{') {
        let (rest, _) = parse_braced_content(rest)?;
        Ok((rest, ()))
    } else {
        let pos = rest.find('\n').unwrap_or(rest.len());
        Ok((&rest[pos..], ()))
    }
}

/// Parse an entry body
fn parse_entry_body<'a>(
    input: &'a str,
    entry_type: &str,
    macros: &HashMap<String, String>,
) -> IResult<&'a str, BibTeXEntry> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, _) = multispace0(rest)?;

    let (rest, cite_key) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || "_-:./+".contains(c))(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char(',')(rest)?;

    let (rest, fields) = parse_fields(rest, macros)?;

    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('}')(rest)?;

    let mut entry = BibTeXEntry::new(cite_key, BibTeXEntryType::from_tag(entry_type));
    for (key, value) in fields {
        entry.add_field(key, value);
    }

    Ok((rest, entry))
}

/// Parse fields within an entry
fn parse_fields<'a>(
    input: &'a str,
    macros: &HashMap<String, String>,
) -> IResult<&'a str, Vec<(String, String)>> {
    let mut fields = Vec::new();
    let mut remaining = input;

    loop {
        let (rest, _) = multispace0(remaining)?;

        if rest.starts_with('}') {
            return Ok((rest, fields));
        }

        match parse_single_field(rest, macros) {
            Ok((rest, (key, value))) => {
                fields.push((key, value));
                remaining = rest;

                // Skip optional comma
                let (rest, _) = multispace0(remaining)?;
                remaining = rest.strip_prefix(',').unwrap_or(rest);
            }
            Err(_) => {
                return Ok((remaining, fields));
            }
        }
    }
}

/// Parse a single field (key = value); the key is lowercased
fn parse_single_field<'a>(
    input: &'a str,
    macros: &HashMap<String, String>,
) -> IResult<&'a str, (String, String)> {
    let (rest, _) = multispace0(input)?;
    let (rest, key) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('=')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, value) = parse_field_value(rest, macros)?;

    Ok((rest, (key.to_lowercase(), value)))
}

/// Parse a field value (braced, quoted, number, or macro reference)
fn parse_field_value<'a>(
    input: &'a str,
    macros: &HashMap<String, String>,
) -> IResult<&'a str, String> {
    let mut result = String::new();
    let mut remaining = input;

    loop {
        let (rest, _) = multispace0(remaining)?;

        let (rest, part) = alt((
            parse_braced_value,
            parse_quoted_value,
            map(take_while1(|c: char| c.is_ascii_digit()), |s: &str| {
                s.to_string()
            }),
            map(
                take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
                |s: &str| {
                    macros
                        .get(&s.to_lowercase())
                        .cloned()
                        .unwrap_or_else(|| s.to_string())
                },
            ),
        ))(rest)?;

        result.push_str(&part);
        remaining = rest;

        let (rest, _) = multispace0(remaining)?;
        if let Some(stripped) = rest.strip_prefix('#') {
            remaining = stripped;
        } else {
            return Ok((rest, result));
        }
    }
}

/// Parse a braced value {content}
fn parse_braced_value(input: &str) -> IResult<&str, String> {
    let (rest, content) = parse_braced_content(input)?;
    let inner = &content[1..content.len() - 1];
    Ok((rest, inner.to_string()))
}

/// Parse braced content including nested braces
fn parse_braced_content(input: &str) -> IResult<&str, &str> {
    if !input.starts_with('{') {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        )));
    }

    let mut depth = 0;
    let mut pos = 0;
    let bytes = input.as_bytes();

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[pos + 1..], &input[..pos + 1]));
                }
            }
            b'\\' => {
                // Skip escaped character
                pos += 1;
            }
            _ => {}
        }
        pos += 1;
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// Parse a quoted value "content"
fn parse_quoted_value(input: &str) -> IResult<&str, String> {
    if !input.starts_with('"') {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        )));
    }

    let mut brace_depth = 0usize;
    let mut escaped = false;

    for (pos, c) in input.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '"' if brace_depth == 0 => {
                return Ok((&input[pos + 1..], input[1..pos].to_string()));
            }
            '{' => brace_depth += 1,
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '\\' => escaped = true,
            _ => {}
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}
