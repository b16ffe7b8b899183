use url::Url;

use super::Patch;
use crate::models::{Page, PageList, SearchProvider};

/// The pages document being edited.
///
/// All mutation goes through methods that return a [`Patch`]; the version
/// counter and dirty flag only move when at least one page actually changed.
#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    pages: PageList,
    version: u64,
    dirty: bool,
}

impl PageDocument {
    pub fn from_text(text: &str) -> Self {
        Self {
            pages: PageList::parse(text),
            version: 0,
            dirty: false,
        }
    }

    pub fn pages(&self) -> &PageList {
        &self.pages
    }

    /// Serialized document text, exactly what gets saved.
    pub fn text(&self) -> String {
        self.pages.text()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// True if pages changed since load or the last [`mark_saved`](Self::mark_saved).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Replaces the whole text and re-parses it.
    pub fn replace_text(&mut self, text: &str) -> Patch {
        self.replace_pages(PageList::parse(text))
    }

    /// Turns every pending query into a search destination.
    pub fn commit_searches(&mut self, provider: &SearchProvider) -> Patch {
        let promoted = self.pages.promote_searches(provider);
        self.replace_pages(promoted)
    }

    /// Writes an address reported by the view at `index` into its page.
    ///
    /// Only `Destination` pages take the new address; any other variant,
    /// an index past the end, or the address the page already has leaves the
    /// document untouched.
    pub fn apply_address_change(&mut self, index: usize, address: &Url) -> Patch {
        match self.pages.get(index) {
            Some(Page::Destination { address: current }) if current != address => {}
            _ => return self.unchanged(),
        }

        let pages: Vec<Page> = self
            .pages
            .pages()
            .enumerate()
            .map(|(i, page)| {
                if i == index {
                    Page::Destination {
                        address: address.clone(),
                    }
                } else {
                    page.clone()
                }
            })
            .collect();
        self.replace_pages(PageList::from_pages(&pages))
    }

    /// Appends `page` after the last non-blank page, dropping the trailing
    /// blank run it replaces.
    pub fn append_page(&mut self, page: Page) -> Patch {
        let mut pages: Vec<Page> = self.pages.pages().cloned().collect();
        let keep = pages
            .iter()
            .rposition(|p| !p.is_blank())
            .map_or(0, |last| last + 1);
        pages.truncate(keep);
        pages.push(page);
        self.replace_pages(PageList::from_pages(&pages))
    }

    fn replace_pages(&mut self, new_pages: PageList) -> Patch {
        let changed = changed_indices(&self.pages, &new_pages);
        let source_changed = new_pages != self.pages;
        self.pages = new_pages;

        if !changed.is_empty() {
            self.version += 1;
            self.dirty = true;
            log::debug!(
                "document v{}: pages {:?} changed",
                self.version,
                changed
            );
        } else if source_changed {
            log::trace!("document v{}: source whitespace changed", self.version);
        }

        Patch {
            changed,
            version: self.version,
        }
    }

    fn unchanged(&self) -> Patch {
        Patch {
            changed: Vec::new(),
            version: self.version,
        }
    }
}

fn changed_indices(old: &PageList, new: &PageList) -> Vec<usize> {
    let len = old.len().max(new.len());
    (0..len).filter(|&i| old.get(i) != new.get(i)).collect()
}
