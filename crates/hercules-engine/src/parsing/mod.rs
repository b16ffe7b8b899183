//! # Text Codec
//!
//! Maps the pages document text to an ordered list of classified entries and
//! back again.
//!
//! - **`rope`**: line iteration with UTF-16 spans over an `xi_rope::Rope`
//! - **`classify`**: `QueryClassifier` decides the [`Page`] for one line
//!
//! Parsing never fails. Each `\n`-separated line (including a trailing empty
//! one) becomes exactly one entry, classified independently of the others.

pub mod classify;
pub mod rope;

use xi_rope::Rope;

use crate::models::{Page, PageList, ParsedEntry};
use classify::QueryClassifier;
use rope::lines_with_spans;

pub use classify::classify;

/// Parses document text into a [`PageList`].
pub fn parse(text: &str) -> PageList {
    parse_pages(&Rope::from(text))
}

/// Parses a rope buffer into a [`PageList`], one entry per line.
pub fn parse_pages(rope: &Rope) -> PageList {
    let classifier = QueryClassifier;

    let entries = lines_with_spans(rope)
        .into_iter()
        .map(|line| {
            let page = classifier.classify(&line.text);
            log::trace!("classified {:?} as {}", line.text, page.kind_name());
            ParsedEntry {
                page,
                source: line.text,
                span: line.span,
            }
        })
        .collect();

    PageList::from_entries(entries)
}

/// Joins the canonical text of each page with `\n`.
pub fn serialize<'a, I>(pages: I) -> String
where
    I: IntoIterator<Item = &'a Page>,
{
    let mut out = String::new();
    for (i, page) in pages.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(page.canonical_text());
    }
    out
}
