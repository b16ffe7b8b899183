use url::Url;

/// The last command the reconciler sent to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    Navigate(Url),
    RenderDocument(String),
}

#[derive(Debug, Clone)]
pub struct ViewSlot<H> {
    pub handle: H,
    pub last_command: Option<ViewCommand>,
}

/// Live view handles addressed by position.
///
/// Slot `i` always shows presented page `i`. The arena only grows at the end
/// and shrinks from the end; views are never matched by identity.
#[derive(Debug, Clone)]
pub struct ViewArena<H> {
    slots: Vec<ViewSlot<H>>,
}

impl<H> Default for ViewArena<H> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<H: PartialEq> ViewArena<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn handle(&self, index: usize) -> Option<&H> {
        self.slots.get(index).map(|slot| &slot.handle)
    }

    pub fn last_command(&self, index: usize) -> Option<&ViewCommand> {
        self.slots
            .get(index)
            .and_then(|slot| slot.last_command.as_ref())
    }

    /// Position of `handle`, used to route view events back to a page.
    pub fn position_of(&self, handle: &H) -> Option<usize> {
        self.slots.iter().position(|slot| &slot.handle == handle)
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut ViewSlot<H>> {
        self.slots.get_mut(index)
    }

    pub(crate) fn push(&mut self, handle: H) {
        self.slots.push(ViewSlot {
            handle,
            last_command: None,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<ViewSlot<H>> {
        self.slots.pop()
    }
}
