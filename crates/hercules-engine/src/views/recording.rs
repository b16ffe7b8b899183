use std::collections::BTreeMap;

use url::Url;

use super::sink::{ViewEvent, ViewSink};

/// Handle of a view in a [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(pub u64);

/// A command received by a [`RecordingSink`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCommand {
    Create(ViewId),
    Navigate(ViewId, Url),
    RenderDocument(ViewId, String),
    Remove(ViewId),
}

/// What one recorded view currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedView {
    /// Reported address. `None` while showing an inline document or before
    /// a deferred navigation completes.
    pub address: Option<Url>,
    /// Inline document last rendered, if the view is not showing an address.
    pub document: Option<String>,
    pending: Option<Url>,
}

/// An in-memory [`ViewSink`] that keeps every command it receives.
///
/// By default navigations complete immediately. A sink created with
/// [`RecordingSink::with_deferred_navigation`] holds them until
/// [`RecordingSink::complete_navigations`] is called, like a real view
/// that loads asynchronously.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    next_id: u64,
    deferred_navigation: bool,
    views: BTreeMap<ViewId, RecordedView>,
    commands: Vec<SinkCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deferred_navigation() -> Self {
        Self {
            deferred_navigation: true,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[SinkCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<SinkCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn view(&self, id: ViewId) -> Option<&RecordedView> {
        self.views.get(&id)
    }

    pub fn live_view_count(&self) -> usize {
        self.views.len()
    }

    /// Finishes deferred navigations and returns the events the views would
    /// send for them.
    pub fn complete_navigations(&mut self) -> Vec<ViewEvent<ViewId>> {
        let mut events = Vec::new();
        for (id, view) in &mut self.views {
            if let Some(address) = view.pending.take() {
                view.address = Some(address.clone());
                events.push(ViewEvent::AddressChanged {
                    handle: *id,
                    address,
                });
            }
        }
        events
    }

    /// Simulates the user following a link inside a view.
    pub fn follow_link(&mut self, id: ViewId, address: Url) -> Option<ViewEvent<ViewId>> {
        let view = self.views.get_mut(&id)?;
        view.address = Some(address.clone());
        view.document = None;
        view.pending = None;
        Some(ViewEvent::AddressChanged {
            handle: id,
            address,
        })
    }
}

impl ViewSink for RecordingSink {
    type Handle = ViewId;

    fn create(&mut self) -> ViewId {
        let id = ViewId(self.next_id);
        self.next_id += 1;
        self.views.insert(id, RecordedView::default());
        self.commands.push(SinkCommand::Create(id));
        id
    }

    fn navigate(&mut self, handle: &ViewId, address: &Url) {
        self.commands
            .push(SinkCommand::Navigate(*handle, address.clone()));
        if let Some(view) = self.views.get_mut(handle) {
            view.document = None;
            if self.deferred_navigation {
                view.pending = Some(address.clone());
            } else {
                view.address = Some(address.clone());
            }
        }
    }

    fn render_document(&mut self, handle: &ViewId, html: &str) {
        self.commands
            .push(SinkCommand::RenderDocument(*handle, html.to_string()));
        if let Some(view) = self.views.get_mut(handle) {
            view.address = None;
            view.pending = None;
            view.document = Some(html.to_string());
        }
    }

    fn current_address(&self, handle: &ViewId) -> Option<Url> {
        self.views.get(handle).and_then(|view| view.address.clone())
    }

    fn remove(&mut self, handle: ViewId) {
        self.commands.push(SinkCommand::Remove(handle));
        self.views.remove(&handle);
    }
}
