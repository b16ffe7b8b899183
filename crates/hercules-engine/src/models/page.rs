use std::fmt;

use url::Url;

/// The classified intent of one line of the pages document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    /// Empty or whitespace-only line.
    Blank,
    /// An absolute address with a scheme.
    Destination { address: Url },
    /// Free text waiting to be turned into a search destination.
    PendingQuery { text: String },
    /// A line starting with `{`, kept verbatim.
    StructuredQuery { text: String },
    /// A line starting with `#`, kept verbatim.
    Document { content: String },
}

impl Page {
    /// The text this page serializes to: empty for `Blank`, the address for
    /// `Destination`, the stored line for every other variant.
    pub fn canonical_text(&self) -> &str {
        match self {
            Page::Blank => "",
            Page::Destination { address } => address.as_str(),
            Page::PendingQuery { text } | Page::StructuredQuery { text } => text,
            Page::Document { content } => content,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Page::Blank)
    }

    /// Returns the address for `Destination` pages.
    pub fn address(&self) -> Option<&Url> {
        match self {
            Page::Destination { address } => Some(address),
            _ => None,
        }
    }

    /// Short human-readable name of the variant, used in logs and the CLI.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Page::Blank => "blank",
            Page::Destination { .. } => "destination",
            Page::PendingQuery { .. } => "pending query",
            Page::StructuredQuery { .. } => "structured query",
            Page::Document { .. } => "document",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_text())
    }
}
