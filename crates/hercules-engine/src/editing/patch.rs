/// Result of an edit to a [`PageDocument`](super::PageDocument).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    /// Indices of pages whose value changed, appeared or disappeared.
    pub changed: Vec<usize>,
    /// Document version after the edit.
    pub version: u64,
}

impl Patch {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }
}
