use crate::models::Page;

/// The pages that get a view: everything up to and including the last
/// non-blank page.
///
/// When every page is blank the input is returned unchanged, so a fresh
/// document still presents its (blank) first page instead of nothing.
pub fn presented(pages: &[Page]) -> &[Page] {
    match pages.iter().rposition(|page| !page.is_blank()) {
        Some(last) => &pages[..=last],
        None => pages,
    }
}
