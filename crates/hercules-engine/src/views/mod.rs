//! # Views
//!
//! Keeps an ordered set of host views in step with the presented pages.
//!
//! - **`sink`**: the `ViewSink` trait the host implements, plus `ViewEvent`
//! - **`arena`**: `ViewArena`, view handles addressed by position
//! - **`reconcile`**: the add/update/remove pass over the arena
//! - **`templates`**: inline HTML documents for non-destination pages
//! - **`session`**: `Session`, which routes edits and view events through
//!   the document and back into `reconcile`
//! - **`recording`**: `RecordingSink`, an in-memory sink
//!
//! Data only flows one way: event → document mutation → reconcile → sink.

pub mod arena;
pub mod reconcile;
pub mod recording;
pub mod session;
pub mod sink;
pub mod templates;

pub use arena::{ViewArena, ViewCommand, ViewSlot};
pub use reconcile::{NAVIGABLE_SCHEMES, Reconciliation, is_navigable, reconcile};
pub use recording::{RecordedView, RecordingSink, SinkCommand, ViewId};
pub use session::Session;
pub use sink::{ViewEvent, ViewSink};
pub use templates::HtmlTemplate;
