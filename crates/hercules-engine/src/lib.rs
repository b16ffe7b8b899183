pub mod editing;
pub mod highlight;
pub mod io;
pub mod models;
pub mod parsing;
pub mod presentation;
pub mod views;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{PageDocument, Patch};
pub use highlight::{PageStyle, StyledSpan, highlight, highlight_list};
pub use io::*;
pub use models::*;
pub use parsing::{classify, parse, serialize};
pub use presentation::presented;
pub use views::{Reconciliation, Session, ViewEvent, ViewSink, reconcile};
