//! # Editing
//!
//! `PageDocument` owns the document's `PageList` and is the only place it is
//! mutated. The three kinds of edit are:
//!
//! - **text replacement**: the buffer changed, re-parse everything
//! - **search commit**: pending queries become search destinations, only
//!   when explicitly asked for
//! - **address write-back**: a view reported a new address for its page
//!
//! Each returns a `Patch` listing which page indices changed.

pub mod document;
pub mod patch;

pub use document::PageDocument;
pub use patch::Patch;
