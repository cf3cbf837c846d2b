//! Publication listing
//!
//! Renders one HTML table row per publication, grouped by year (descending)
//! and month, each followed by a hidden row holding the record's BibTeX.
//! Any invalid record aborts the whole rendering; nothing is returned for a
//! partially valid input.

use pubtab_bibtex::{format_entry, BibTeXEntry};

use crate::category::style_key;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::normalize::{normalize_entry, select_venue, DisplayFields};
use crate::ordering::group_by_year_month;

const TABLE_OPEN: &str = "<table id=\"qs_table\" border=\"1\"><tbody>\n";
const TABLE_CLOSE: &str = "</tbody></table>";

/// Renders the publication listing
pub struct TableRenderer<'c> {
    config: &'c ReportConfig,
}

impl<'c> TableRenderer<'c> {
    pub fn new(config: &'c ReportConfig) -> Self {
        Self { config }
    }

    /// Render all entries into one HTML table fragment
    pub fn render(&self, entries: &[BibTeXEntry]) -> Result<String> {
        let rows = entries
            .iter()
            .map(|entry| {
                normalize_entry(entry, &self.config.names, &self.config.table)
                    .map(|fields| (entry, fields))
            })
            .collect::<Result<Vec<_>>>()?;

        let groups = group_by_year_month(
            &rows,
            |(_, fields)| fields.year.as_str(),
            |(_, fields)| fields.month,
        );

        let mut out = String::from(TABLE_OPEN);
        for group in &groups {
            out.push_str(&format!(
                "<tr class=\"year\"><td></td><td><a name=\"{0}\"></a>{0}</td></tr>\n",
                group.year
            ));
            for (entry, fields) in &group.items {
                self.render_entry(&mut out, entry, fields);
            }
        }
        out.push_str(TABLE_CLOSE);

        tracing::info!(
            entries = rows.len(),
            years = groups.len(),
            "rendered publication table"
        );
        Ok(out)
    }

    fn render_entry(&self, out: &mut String, entry: &BibTeXEntry, fields: &DisplayFields) {
        let table = &self.config.table;
        let id = &entry.cite_key;
        let style = style_key(&entry.entry_type, select_venue(entry));

        out.push_str(&format!(
            "<tr id=\"{id}\" class=\"entry\">\n<td><div class=\"balken-{style}\"></div>\n</td>\n"
        ));
        out.push_str(&format!(
            "<td> <i>{}</i>,</br> <b>{}</b>,</br>",
            fields.authors, fields.title
        ));

        let details = [
            fields.venue.as_deref(),
            fields.page_text.as_deref(),
            entry.get_field("publisher"),
            entry.get_field("address"),
            entry.get_field("series"),
            fields.month,
        ];
        for detail in details.into_iter().flatten() {
            out.push_str(detail);
            out.push_str(", ");
        }
        out.push_str(&format!("{}.\n", fields.year));

        out.push_str(&format!(
            "<p class=\"infolinks\"> <a href=\"javascript:toggleInfo('{id}','bibtex')\">\
             <img src=\"{}\" alt=\"BibTeX\" /></a>",
            table.bibtex_icon_url
        ));

        let pdf = entry.get_field("pdf");
        if let Some(pdf) = pdf {
            out.push_str(&format!(
                " <a href=\"{}{pdf}\" target=\"_blank\"><img src=\"{}\" alt=\"PDF\" /></a>",
                table.pdf_base_url, table.pdf_icon_url
            ));
        }
        if let Some(url) = entry.get_field("url") {
            if pdf.is_none() || style == "article" {
                out.push_str(&format!(" <a href=\"{url}\" target=\"_blank\">URL</a>"));
            }
        }
        if let Some(annote) = entry.get_field("annote") {
            out.push_str(&format!(" <font color=\"red\">{annote}</font>"));
        }
        out.push_str("</p>\n</td>\n</tr>\n");

        out.push_str(&format!(
            "<tr id=\"bib_{id}\" class=\"bibtex noshow\"><td></td>\n<td><b>BibTeX</b>:\n<pre>\n"
        ));
        out.push_str(&format_entry(entry));
        out.push_str("\n</pre>\n</td>\n</tr>\n\n");
    }
}
