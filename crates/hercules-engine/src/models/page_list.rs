use crate::models::{Page, SearchProvider};
use crate::parsing::{self, rope::Span};
use crate::presentation::presented;

/// A classified page together with the exact line it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub page: Page,
    /// The source line, internal and surrounding whitespace included.
    pub source: String,
    /// Position of `source` in the document text, in UTF-16 code units.
    pub span: Span,
}

/// The ordered pages of one document.
///
/// There is always at least one entry: parsing empty text yields a single
/// `Blank` page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageList {
    entries: Vec<ParsedEntry>,
}

impl PageList {
    pub(crate) fn from_entries(entries: Vec<ParsedEntry>) -> Self {
        Self { entries }
    }

    /// Parses document text. See [`parsing::parse`].
    pub fn parse(text: &str) -> Self {
        parsing::parse(text)
    }

    /// Builds a list from pages by serializing and re-parsing them, which
    /// normalizes every entry's source to its canonical text.
    pub fn from_pages<'a, I>(pages: I) -> Self
    where
        I: IntoIterator<Item = &'a Page>,
    {
        Self::parse(&parsing::serialize(pages))
    }

    pub fn entries(&self) -> &[ParsedEntry] {
        &self.entries
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.entries.iter().map(|e| &e.page)
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.entries.get(index).map(|e| &e.page)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The document text: canonical page texts joined with `\n`.
    pub fn text(&self) -> String {
        parsing::serialize(self.pages())
    }

    /// Pages with the trailing run of blanks removed. See [`presented`].
    pub fn presented_pages(&self) -> Vec<Page> {
        let pages: Vec<Page> = self.pages().cloned().collect();
        presented(&pages).to_vec()
    }

    /// Replaces every `PendingQuery` with a `Destination` searching for its
    /// text, then re-parses the result.
    ///
    /// Idempotent: no pending query survives the first pass.
    pub fn promote_searches(&self, provider: &SearchProvider) -> PageList {
        let pages: Vec<Page> = self
            .pages()
            .map(|page| match page {
                Page::PendingQuery { text } => Page::Destination {
                    address: provider.address_for(text),
                },
                other => other.clone(),
            })
            .collect();
        Self::from_pages(&pages)
    }

    /// Index of the entry whose source contains the caret at `utf16_offset`.
    ///
    /// Offsets count UTF-16 code units across the whole text, newlines
    /// included. A caret at the end of a line belongs to that line; the
    /// offset just after its newline belongs to the next one.
    pub fn page_index_for_offset(&self, utf16_offset: usize) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| utf16_offset <= entry.span.end)
    }
}

impl Default for PageList {
    fn default() -> Self {
        Self::parse("")
    }
}

/// Promotes pending queries using the default search provider.
pub fn promote_searches_to_destinations(list: &PageList) -> PageList {
    list.promote_searches(&SearchProvider::default())
}
