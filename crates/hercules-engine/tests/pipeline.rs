use hercules_engine::views::{RecordingSink, SinkCommand, ViewArena};
use hercules_engine::{
    Page, PageDocument, PageList, Session, classify, parse, presented,
    promote_searches_to_destinations, reconcile, serialize,
};
use pretty_assertions::assert_eq;
use url::Url;

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

/// Lines covering every page kind, with awkward whitespace.
const SAMPLE_LINES: &[&str] = &[
    "",
    "   ",
    "https://example.com",
    "  http://localhost:8080/a?b=c  ",
    "ftp://files.example/pub",
    "hello world",
    "  leading space",
    "cats & dogs <3",
    "{ viewer { login } }",
    "# Heading",
    "#hashtag",
    "note: buy milk",
];

fn describe(command: &SinkCommand) -> String {
    match command {
        SinkCommand::Create(id) => format!("create {}", id.0),
        SinkCommand::Navigate(id, address) => format!("navigate {} {address}", id.0),
        SinkCommand::RenderDocument(id, html) if html.is_empty() => format!("clear {}", id.0),
        SinkCommand::RenderDocument(id, html) => {
            let body = html
                .split_once("<main>\n")
                .and_then(|(_, rest)| rest.split_once("\n</main>"))
                .map(|(body, _)| body.trim())
                .unwrap_or("?");
            format!("render {} {body}", id.0)
        }
        SinkCommand::Remove(id) => format!("remove {}", id.0),
    }
}

#[test]
fn text_with_address_blank_and_query_creates_three_views() {
    let list = parse("https://example.com\n\nhello world");
    assert_eq!(
        list.pages().cloned().collect::<Vec<_>>(),
        vec![
            Page::Destination {
                address: url("https://example.com")
            },
            Page::Blank,
            Page::PendingQuery {
                text: "hello world".into()
            },
        ]
    );

    let presented_pages = list.presented_pages();
    assert_eq!(presented_pages.len(), 3);

    let mut sink = RecordingSink::new();
    let mut views = ViewArena::new();
    let result = reconcile(&presented_pages, &mut views, &mut sink);

    assert_eq!(result.added, vec![0, 1, 2]);
    let summary: Vec<String> = sink.commands().iter().map(describe).collect();
    insta::assert_debug_snapshot!(summary, @r#"
    [
        "create 0",
        "navigate 0 https://example.com/",
        "create 1",
        "clear 1",
        "create 2",
        "render 2 <h1>hello world</h1>",
    ]
    "#);
}

#[test]
fn shrinking_text_removes_surplus_views_highest_first() {
    let mut session = Session::with_document(
        PageDocument::from_text("https://example.com\n\nhello world"),
        RecordingSink::new(),
    );
    session.reconcile();
    session.sink_mut().take_commands();

    let result = session.edit_text("https://example.com");

    assert_eq!(result.removed, vec![2, 1]);
    assert_eq!(result.unchanged, vec![0]);
    assert_eq!(session.views().len(), 1);
    let summary: Vec<String> = session.sink().commands().iter().map(describe).collect();
    insta::assert_debug_snapshot!(summary, @r#"
    [
        "remove 2",
        "remove 1",
    ]
    "#);
}

#[test]
fn every_kind_of_page_renders_its_own_document() {
    let mut session = Session::with_document(
        PageDocument::from_text("{ viewer }\n# Notes *today*\nlocalhost:3000"),
        RecordingSink::new(),
    );
    session.reconcile();

    let summary: Vec<String> = session.sink().commands().iter().map(describe).collect();
    insta::assert_debug_snapshot!(summary, @r#"
    [
        "create 0",
        "render 0 <h1>{ viewer }</h1>",
        "create 1",
        "render 1 <h1>Notes <em>today</em></h1>",
        "create 2",
    ]
    "#);
}

#[test]
fn reconcile_converges_and_is_idempotent() {
    let texts = [
        "",
        "\n\n",
        "https://example.com\n\n\n",
        "cats\nhttps://example.com\n{ q }\n# d\n",
        "a",
        "",
    ];
    let mut session = Session::new(RecordingSink::new());

    for text in texts {
        session.edit_text(text);
        let pages: Vec<Page> = session.document().pages().pages().cloned().collect();
        let expected = presented(&pages).len();
        assert_eq!(session.views().len(), expected, "after {text:?}");
        assert_eq!(session.sink().live_view_count(), expected);

        let again = session.reconcile();
        assert!(again.is_settled(), "second pass after {text:?}: {again:?}");
        assert_eq!(again.unchanged.len(), expected);
    }
}

#[test]
fn classification_is_independent_of_neighbours() {
    let text = SAMPLE_LINES.join("\n");
    let list = parse(&text);
    assert_eq!(list.len(), SAMPLE_LINES.len());
    for (entry, line) in list.entries().iter().zip(SAMPLE_LINES) {
        assert_eq!(entry.page, classify(line));
        assert_eq!(entry.source, *line);
    }
}

#[test]
fn serialized_pages_reparse_to_same_variants() {
    let pages: Vec<Page> = SAMPLE_LINES.iter().map(|line| classify(line)).collect();
    for start in 0..pages.len() {
        let rotated: Vec<Page> = pages[start..]
            .iter()
            .chain(&pages[..start])
            .cloned()
            .collect();
        let reparsed = PageList::parse(&serialize(&rotated));
        assert_eq!(reparsed.pages().cloned().collect::<Vec<_>>(), rotated);
    }
}

#[test]
fn promotion_is_idempotent_over_samples() {
    let list = parse(&SAMPLE_LINES.join("\n"));
    let once = promote_searches_to_destinations(&list);
    assert_eq!(promote_searches_to_destinations(&once), once);
    assert!(
        once.pages()
            .all(|page| !matches!(page, Page::PendingQuery { .. }))
    );
}

#[test]
fn committed_search_for_cats() {
    let promoted = promote_searches_to_destinations(&parse("cats"));
    assert_eq!(promoted.text(), "https://duckduckgo.com/?q=cats");
}

#[test]
fn caret_offsets_locate_pages() {
    let list = parse("https://example.com\n\nhello world");
    assert_eq!(list.page_index_for_offset(5), Some(0));
    assert_eq!(list.page_index_for_offset(20), Some(1));
    assert_eq!(list.page_index_for_offset(21), Some(2));
    assert_eq!(list.page_index_for_offset(100), None);
}
