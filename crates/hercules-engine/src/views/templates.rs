//! HTML documents rendered inline into views for pages that are not
//! destinations.

use pulldown_cmark::{Event, Parser, html};

/// Values substituted into the page skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageVariables {
    pub text_color: String,
}

impl Default for PageVariables {
    fn default() -> Self {
        Self {
            text_color: "black".to_string(),
        }
    }
}

/// An inline document for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlTemplate<'a> {
    /// Free text waiting to become a search.
    Query { query: &'a str },
    /// A structured (GraphQL-style) query.
    StructuredQuery { query: &'a str },
    /// Markdown content.
    Markdown { content: &'a str },
}

impl HtmlTemplate<'_> {
    fn text_color(&self) -> &'static str {
        match self {
            HtmlTemplate::Query { .. } => "black",
            HtmlTemplate::StructuredQuery { .. } => "#E10098",
            HtmlTemplate::Markdown { .. } => "#111",
        }
    }

    fn variables(&self) -> PageVariables {
        PageVariables {
            text_color: self.text_color().to_string(),
        }
    }

    pub fn make_html(&self) -> String {
        let body = match self {
            HtmlTemplate::Query { query } | HtmlTemplate::StructuredQuery { query } => {
                format!("<h1>{}</h1>", html_escape::encode_text(query))
            }
            HtmlTemplate::Markdown { content } => markdown_to_html(content),
        };
        generate_html_page(&body, &self.variables())
    }
}

/// Renders markdown to HTML. Raw HTML in the source is shown as text.
fn markdown_to_html(content: &str) -> String {
    let events = Parser::new(content).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

/// Wraps an HTML body in the shared page skeleton.
pub fn generate_html_page(body: &str, variables: &PageVariables) -> String {
    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<style>
html {{
font-size: 18px;
}}
* {{
padding: 0;
margin: 0;
}}
main {{
height: 100vh; display: flex; align-items: center;
color: {color};
}}
main > * {{
flex-grow: 1;
text-align: center;
padding: 0.5rem;
font-family: -apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif;
}}
h1 {{
font-size: 2rem;
}}
</style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        color = html_escape::encode_text(&variables.text_color),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_text_is_escaped() {
        let html = HtmlTemplate::Query {
            query: "<b>cats</b> & dogs",
        }
        .make_html();
        assert!(html.contains("<h1>&lt;b&gt;cats&lt;/b&gt; &amp; dogs</h1>"));
        assert!(html.contains("color: black;"));
    }

    #[test]
    fn structured_query_uses_its_own_color() {
        let html = HtmlTemplate::StructuredQuery { query: "{ a }" }.make_html();
        assert!(html.contains("<h1>{ a }</h1>"));
        assert!(html.contains("color: #E10098;"));
    }

    #[test]
    fn markdown_is_rendered() {
        let html = HtmlTemplate::Markdown {
            content: "# Shopping *list*",
        }
        .make_html();
        assert!(html.contains("<h1>Shopping <em>list</em></h1>"));
        assert!(html.contains("color: #111;"));
    }

    #[test]
    fn raw_html_inside_markdown_is_escaped() {
        let html = HtmlTemplate::Markdown {
            content: "# Title <script>alert(1)</script>",
        }
        .make_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn skeleton_wraps_body() {
        let html = generate_html_page("<p>x</p>", &PageVariables::default());
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<main>\n<p>x</p>\n</main>"));
    }
}
