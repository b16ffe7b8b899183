use url::Url;

use crate::models::Page;

/// Classifies single lines of the pages document.
///
/// Classification is total and looks at nothing but the line itself, so the
/// result for one line never depends on its neighbours.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryClassifier;

impl QueryClassifier {
    /// Classifies a raw line (without its newline) into a [`Page`].
    ///
    /// Rules, first match wins:
    /// 1. whitespace only → `Blank`
    /// 2. trimmed text parses as an absolute address → `Destination`
    /// 3. line starts with `{` → `StructuredQuery`
    /// 4. line starts with `#` → `Document`
    /// 5. anything else → `PendingQuery`, keeping the untrimmed line
    pub fn classify(&self, raw_line: &str) -> Page {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            return Page::Blank;
        }

        if let Some(address) = parse_address(trimmed) {
            return Page::Destination { address };
        }

        match raw_line.chars().next() {
            Some('{') => Page::StructuredQuery {
                text: raw_line.to_string(),
            },
            Some('#') => Page::Document {
                content: raw_line.to_string(),
            },
            _ => Page::PendingQuery {
                text: raw_line.to_string(),
            },
        }
    }
}

/// Classifies one line with the default classifier.
pub fn classify(raw_line: &str) -> Page {
    QueryClassifier.classify(raw_line)
}

/// Parses trimmed text as an absolute address.
///
/// Text with inner whitespace is never an address: `note: buy milk` would
/// otherwise parse as a `note:` URL.
fn parse_address(trimmed: &str) -> Option<Url> {
    if trimmed.contains(char::is_whitespace) {
        return None;
    }
    Url::parse(trimmed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t \r")]
    fn whitespace_only_is_blank(#[case] line: &str) {
        assert_eq!(classify(line), Page::Blank);
    }

    #[rstest]
    #[case("https://example.com")]
    #[case("http://localhost:8080/path?x=1")]
    #[case("mailto:someone@example.com")]
    #[case("about:blank")]
    fn absolute_addresses_are_destinations(#[case] line: &str) {
        assert_eq!(
            classify(line),
            Page::Destination {
                address: url(line)
            }
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_address_parsing() {
        assert_eq!(
            classify("   https://example.com/  "),
            Page::Destination {
                address: url("https://example.com/")
            }
        );
    }

    #[rstest]
    #[case("hello world")]
    #[case("  leading spaces kept")]
    #[case("cats")]
    #[case("note: buy milk")]
    #[case("12:30 lunch")]
    #[case(" {indented brace}")]
    #[case(" # indented hash")]
    fn unrecognized_text_is_pending_query(#[case] line: &str) {
        assert_eq!(
            classify(line),
            Page::PendingQuery {
                text: line.to_string()
            }
        );
    }

    #[test]
    fn leading_brace_is_structured_query() {
        let line = "{ repository(name: \"hercules\") { id } }";
        assert_eq!(
            classify(line),
            Page::StructuredQuery {
                text: line.to_string()
            }
        );
    }

    #[test]
    fn leading_hash_is_document() {
        let line = "# Shopping list  ";
        assert_eq!(
            classify(line),
            Page::Document {
                content: line.to_string()
            }
        );
    }

    #[test]
    fn address_rule_wins_over_prefix_rules() {
        // `#` or `{` cannot start a scheme, so prefixed lines never reach the address rule.
        assert!(matches!(classify("#https://x.com"), Page::Document { .. }));
        assert!(matches!(classify("{https://x.com}"), Page::StructuredQuery { .. }));
    }
}
