use std::fmt;

use url::Url;

/// The host's embedded views.
///
/// Commands are fire-and-forget: `navigate` and `render_document` return
/// immediately and the view later reports where it ended up through
/// [`ViewEvent::AddressChanged`].
pub trait ViewSink {
    /// Opaque per-view handle.
    type Handle: Clone + PartialEq + fmt::Debug;

    fn create(&mut self) -> Self::Handle;
    fn navigate(&mut self, handle: &Self::Handle, address: &Url);
    fn render_document(&mut self, handle: &Self::Handle, html: &str);
    /// The address the view currently shows, if it has reported one.
    /// `render_document` resets this to `None`.
    fn current_address(&self, handle: &Self::Handle) -> Option<Url>;
    fn remove(&mut self, handle: Self::Handle);
}

/// Notifications a view sends back to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent<H> {
    /// Sent when a navigation starts, commits or finishes. Repeats are harmless.
    AddressChanged { handle: H, address: Url },
}
