use crate::dom::Dom;

/// Selector for an in-page anchor: `#section`. A bare `#` is not a target.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Scroll position that brings the target just below the fixed header.
/// `None` leaves the click to the browser.
pub fn scroll_top<D: Dom + ?Sized>(dom: &D, href: &str, header_offset: f64) -> Option<f64> {
    let selector = anchor_selector(href)?;
    dom.offset_top(selector).map(|top| top - header_offset)
}
