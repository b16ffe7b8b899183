/// A range `[start, end)` of the document text in UTF-16 code units.
///
/// Editor carets count UTF-16 units, so entries carry their line position in
/// that unit rather than in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}
