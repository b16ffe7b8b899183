//! Styled spans for displaying the pages document in an editor.

use crate::models::{Page, PageList, ParsedEntry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageStyle {
    /// The editor's default text style.
    #[default]
    Plain,
    Blue,
    Magenta,
    Green,
}

impl PageStyle {
    pub fn for_page(page: &Page) -> Self {
        match page {
            Page::Destination { .. } => PageStyle::Blue,
            Page::StructuredQuery { .. } => PageStyle::Magenta,
            Page::Document { .. } => PageStyle::Green,
            Page::Blank | Page::PendingQuery { .. } => PageStyle::Plain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: PageStyle,
}

/// Styles one entry. The span text is the entry's source line, not its
/// canonical form, so offsets in the styled text match the edited buffer.
pub fn highlight(entry: &ParsedEntry) -> StyledSpan {
    StyledSpan {
        text: entry.source.clone(),
        style: PageStyle::for_page(&entry.page),
    }
}

/// Styles a whole list, with a plain `"\n"` span between entries.
pub fn highlight_list(list: &PageList) -> Vec<StyledSpan> {
    let mut spans = Vec::with_capacity(list.len() * 2);
    for (i, entry) in list.entries().iter().enumerate() {
        if i > 0 {
            spans.push(StyledSpan {
                text: "\n".to_string(),
                style: PageStyle::Plain,
            });
        }
        spans.push(highlight(entry));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.com", PageStyle::Blue)]
    #[case("{ viewer }", PageStyle::Magenta)]
    #[case("# Notes", PageStyle::Green)]
    #[case("cats", PageStyle::Plain)]
    #[case("", PageStyle::Plain)]
    fn style_follows_page_kind(#[case] line: &str, #[case] style: PageStyle) {
        let list = PageList::parse(line);
        assert_eq!(highlight(&list.entries()[0]).style, style);
    }

    #[test]
    fn span_text_is_original_source() {
        let list = PageList::parse("  https://example.com  ");
        let span = highlight(&list.entries()[0]);
        assert_eq!(span.text, "  https://example.com  ");
        assert_eq!(span.style, PageStyle::Blue);
    }

    #[test]
    fn list_spans_rebuild_the_buffer() {
        let text = " https://example.com\n\n# Doc\ncats ";
        let spans = highlight_list(&PageList::parse(text));
        let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, text);
        assert_eq!(spans.len(), 7);
        assert_ne!(spans.last().map(|s| s.text.as_str()), Some("\n"));
    }
}
