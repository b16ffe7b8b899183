use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its UTF-16 span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// Span of the line content, excluding the `\n` terminator.
    pub span: Span,
    /// The line text without its `\n` terminator.
    pub text: String,
}

/// Returns every `\n`-separated line of the rope with its UTF-16 span.
///
/// Unlike `Rope::lines_raw`, a trailing empty segment is kept: `""` yields one
/// empty line and `"a\n"` yields `"a"` followed by `""`. This matches an
/// editor buffer, which always has a line after the last newline.
pub fn lines_with_spans(rope: &Rope) -> Vec<LineRef> {
    let mut lines = Vec::new();
    let mut offset = 0usize;
    let mut ends_open = true;

    for raw in rope.lines_raw(..) {
        let (text, terminated) = match raw.strip_suffix('\n') {
            Some(text) => (text.to_string(), true),
            None => (raw.into_owned(), false),
        };
        let start = offset;
        let end = start + text.encode_utf16().count();
        offset = if terminated { end + 1 } else { end };
        lines.push(LineRef {
            span: Span { start, end },
            text,
        });
        ends_open = terminated;
    }

    if ends_open {
        lines.push(LineRef {
            span: Span {
                start: offset,
                end: offset,
            },
            text: String::new(),
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(s: &str) -> Vec<String> {
        lines_with_spans(&Rope::from(s))
            .into_iter()
            .map(|l| l.text)
            .collect()
    }

    #[test]
    fn empty_rope_has_one_empty_line() {
        assert_eq!(texts(""), vec![String::new()]);
    }

    #[test]
    fn trailing_newline_keeps_empty_last_line() {
        assert_eq!(texts("a\n"), vec!["a".to_string(), String::new()]);
    }

    #[test]
    fn blank_lines_are_preserved() {
        assert_eq!(
            texts("a\n\n\nb"),
            vec!["a".to_string(), String::new(), String::new(), "b".to_string()]
        );
    }

    #[test]
    fn spans_exclude_newline() {
        let lines = lines_with_spans(&Rope::from("ab\ncde"));
        assert_eq!(lines[0].span, Span { start: 0, end: 2 });
        assert_eq!(lines[1].span, Span { start: 3, end: 6 });
    }

    #[test]
    fn spans_count_utf16_units() {
        let lines = lines_with_spans(&Rope::from("é😀
x
"));
        assert_eq!(lines[0].span, Span { start: 0, end: 3 });
        assert_eq!(lines[1].span, Span { start: 4, end: 5 });
        assert_eq!(lines[2].span, Span { start: 6, end: 6 });
    }

    #[test]
    fn carriage_return_stays_in_line_text() {
        assert_eq!(texts("a\r\nb"), vec!["a\r".to_string(), "b".to_string()]);
    }
}
