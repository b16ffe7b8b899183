use super::arena::ViewArena;
use super::reconcile::{Reconciliation, reconcile};
use super::sink::{ViewEvent, ViewSink};
use crate::editing::PageDocument;
use crate::models::{Page, SearchProvider};

/// Owns a document, its views and the sink that hosts them.
///
/// Every entry point mutates the document first and then reconciles, so
/// view state only ever follows page state. Events are handled one at a
/// time; a host receiving them from other threads must queue them onto the
/// thread that owns the session.
#[derive(Debug)]
pub struct Session<S: ViewSink> {
    document: PageDocument,
    views: ViewArena<S::Handle>,
    sink: S,
    search_provider: SearchProvider,
}

impl<S: ViewSink> Session<S> {
    pub fn new(sink: S) -> Self {
        Self::with_document(PageDocument::default(), sink)
    }

    pub fn with_document(document: PageDocument, sink: S) -> Self {
        Self {
            document,
            views: ViewArena::new(),
            sink,
            search_provider: SearchProvider::default(),
        }
    }

    pub fn with_search_provider(mut self, provider: SearchProvider) -> Self {
        self.search_provider = provider;
        self
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut PageDocument {
        &mut self.document
    }

    pub fn views(&self) -> &ViewArena<S::Handle> {
        &self.views
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Brings the views in line with the current pages.
    pub fn reconcile(&mut self) -> Reconciliation {
        let presented = self.document.pages().presented_pages();
        reconcile(&presented, &mut self.views, &mut self.sink)
    }

    /// Swaps in a freshly loaded document. Unlike [`edit_text`](Self::edit_text)
    /// the result starts clean at version 0.
    pub fn load_text(&mut self, text: &str) -> Reconciliation {
        self.document = PageDocument::from_text(text);
        self.reconcile()
    }

    /// Replaces the document text, as after an edit in the text buffer.
    pub fn edit_text(&mut self, text: &str) -> Reconciliation {
        self.document.replace_text(text);
        self.reconcile()
    }

    pub fn commit_searches(&mut self) -> Reconciliation {
        self.document.commit_searches(&self.search_provider);
        self.reconcile()
    }

    /// Adds a page showing the search provider's home address.
    pub fn add_page(&mut self) -> Reconciliation {
        let home = Page::Destination {
            address: self.search_provider.home().clone(),
        };
        self.document.append_page(home);
        self.reconcile()
    }

    /// Folds a view event back into the document. Events from views the
    /// session no longer has are dropped.
    pub fn handle_event(&mut self, event: ViewEvent<S::Handle>) -> Reconciliation {
        match event {
            ViewEvent::AddressChanged { handle, address } => {
                let Some(index) = self.views.position_of(&handle) else {
                    log::debug!("dropping address change from unknown view {handle:?}");
                    return Reconciliation::default();
                };
                self.document.apply_address_change(index, &address);
            }
        }
        self.reconcile()
    }
}
