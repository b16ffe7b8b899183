use url::Url;

use super::arena::{ViewArena, ViewCommand, ViewSlot};
use super::sink::ViewSink;
use super::templates::HtmlTemplate;
use crate::models::Page;

/// Schemes a view may be navigated to directly.
pub const NAVIGABLE_SCHEMES: [&str; 2] = ["http", "https"];

/// Positions touched by one [`reconcile`] call.
///
/// A newly created view is only listed in `added`, even though it was also
/// sent a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub added: Vec<usize>,
    pub changed: Vec<usize>,
    pub unchanged: Vec<usize>,
    /// Removed positions, highest first.
    pub removed: Vec<usize>,
}

impl Reconciliation {
    /// True when nothing was added, changed or removed.
    pub fn is_settled(&self) -> bool {
        self.added.is_empty() && self.changed.is_empty() && self.removed.is_empty()
    }
}

/// What a page asks of its view.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Planned {
    Navigate(Url),
    Render(String),
    Skip,
}

pub fn is_navigable(address: &Url) -> bool {
    NAVIGABLE_SCHEMES.contains(&address.scheme())
}

fn plan(page: &Page) -> Planned {
    match page {
        Page::Destination { address } if is_navigable(address) => {
            Planned::Navigate(address.clone())
        }
        Page::Destination { address } => {
            log::warn!(
                "not navigating to {address}: scheme {:?} is not one of {:?}",
                address.scheme(),
                NAVIGABLE_SCHEMES
            );
            Planned::Skip
        }
        Page::PendingQuery { text } => {
            Planned::Render(HtmlTemplate::Query { query: text }.make_html())
        }
        Page::StructuredQuery { text } => {
            Planned::Render(HtmlTemplate::StructuredQuery { query: text }.make_html())
        }
        Page::Document { content } => {
            Planned::Render(HtmlTemplate::Markdown { content }.make_html())
        }
        Page::Blank => Planned::Render(String::new()),
    }
}

/// Sends the planned command to one view unless it already shows it.
/// Returns whether a command was sent.
fn dispatch<S: ViewSink>(
    page: &Page,
    slot: &mut ViewSlot<S::Handle>,
    sink: &mut S,
) -> bool {
    match plan(page) {
        Planned::Navigate(address) => {
            let loaded = sink
                .current_address(&slot.handle)
                .or_else(|| match &slot.last_command {
                    Some(ViewCommand::Navigate(requested)) => Some(requested.clone()),
                    _ => None,
                });
            if loaded.as_ref() == Some(&address) {
                return false;
            }
            sink.navigate(&slot.handle, &address);
            slot.last_command = Some(ViewCommand::Navigate(address));
            true
        }
        Planned::Render(html) => {
            let shown = match &slot.last_command {
                Some(ViewCommand::RenderDocument(shown)) => *shown == html,
                _ => false,
            };
            // A reported address means the view left its inline document.
            if shown && sink.current_address(&slot.handle).is_none() {
                return false;
            }
            render(slot, sink, html)
        }
        Planned::Skip => match &slot.last_command {
            Some(ViewCommand::RenderDocument(shown)) if !shown.is_empty() => {
                render(slot, sink, String::new())
            }
            _ => false,
        },
    }
}

fn render<S: ViewSink>(slot: &mut ViewSlot<S::Handle>, sink: &mut S, html: String) -> bool {
    sink.render_document(&slot.handle, &html);
    slot.last_command = Some(ViewCommand::RenderDocument(html));
    true
}

/// Aligns the live views with the presented pages.
///
/// Views are reused by position, missing ones are created at the end and
/// surplus ones are removed from the end, so afterwards
/// `views.len() == presented.len()`. Calling it again without a page change
/// reports every position as unchanged.
pub fn reconcile<S: ViewSink>(
    presented: &[Page],
    views: &mut ViewArena<S::Handle>,
    sink: &mut S,
) -> Reconciliation {
    let mut result = Reconciliation::default();

    for (index, page) in presented.iter().enumerate() {
        let created = index >= views.len();
        if created {
            views.push(sink.create());
            result.added.push(index);
        }

        let Some(slot) = views.slot_mut(index) else {
            continue;
        };
        let sent = dispatch(page, slot, sink);

        if created {
            log::debug!("view {index}: created for {} page", page.kind_name());
        } else if sent {
            log::debug!("view {index}: updated for {} page", page.kind_name());
            result.changed.push(index);
        } else {
            result.unchanged.push(index);
        }
    }

    while views.len() > presented.len() {
        let Some(slot) = views.pop() else {
            break;
        };
        let index = views.len();
        log::debug!("view {index}: removed");
        sink.remove(slot.handle);
        result.removed.push(index);
    }

    result
}
