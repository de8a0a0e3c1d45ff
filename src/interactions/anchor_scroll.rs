use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, EventListener};
use crate::error::SetupError;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const HEADER_ID: &str = "header";

/// The element id an in-page link points at. The bare `#` placeholder is
/// left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Document offset to scroll to so the target sits just below a fixed header.
pub fn scroll_destination(rect_top: f64, page_offset: f64, header_height: f64) -> f64 {
    rect_top + page_offset - header_height
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorAction {
    /// Not an in-page anchor; the browser handles the click.
    Ignore,
    /// In-page anchor whose target is missing: suppress the jump, stay put.
    PreventOnly,
    /// Smooth-scroll the window to this document offset.
    ScrollTo(f64),
}

/// Decides what a click on a link with `href` does. `target_top` is the
/// target's viewport-relative top, `None` when no element has that id.
pub fn plan_anchor_scroll(
    href: &str,
    target_top: Option<f64>,
    page_offset: f64,
    header_height: f64,
) -> AnchorAction {
    if anchor_target(href).is_none() {
        return AnchorAction::Ignore;
    }
    match target_top {
        Some(top) => AnchorAction::ScrollTo(scroll_destination(top, page_offset, header_height)),
        None => AnchorAction::PreventOnly,
    }
}

pub struct AnchorScroller {
    _listeners: Vec<EventListener>,
}

impl AnchorScroller {
    pub fn attach(document: &Document) -> Result<Self, SetupError> {
        let window = dom::window()?;
        let links = dom::require_all(document, ANCHOR_SELECTOR)?;

        let mut listeners = Vec::with_capacity(links.len());
        for link in links {
            let document = document.clone();
            let window = window.clone();
            let target = link.clone();
            listeners.push(EventListener::new(&target, "click", move |event| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let target_top = anchor_target(&href)
                    .and_then(|id| document.get_element_by_id(id))
                    .map(|destination| destination.get_bounding_client_rect().top());
                let header_height = document
                    .get_element_by_id(HEADER_ID)
                    .and_then(|header| header.dyn_into::<HtmlElement>().ok())
                    .map(|header| f64::from(header.offset_height()))
                    .unwrap_or(0.0);

                let top = match plan_anchor_scroll(
                    &href,
                    target_top,
                    dom::page_y_offset(&window),
                    header_height,
                ) {
                    AnchorAction::Ignore => return,
                    AnchorAction::PreventOnly => {
                        event.prevent_default();
                        debug!("Anchor {} has no target", href);
                        return;
                    }
                    AnchorAction::ScrollTo(top) => top,
                };
                event.prevent_default();

                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            })?);
        }

        Ok(Self {
            _listeners: listeners,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_links_resolve_to_ids() {
        assert_eq!(anchor_target("#section1"), Some("section1"));
        assert_eq!(anchor_target("#faq"), Some("faq"));
    }

    #[test]
    fn placeholder_and_external_links_are_skipped() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#faq"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn missing_target_suppresses_the_jump_without_scrolling() {
        assert_eq!(
            plan_anchor_scroll("#section1", None, 500.0, 80.0),
            AnchorAction::PreventOnly
        );
    }

    #[test]
    fn placeholder_link_is_left_to_the_browser() {
        assert_eq!(plan_anchor_scroll("#", Some(100.0), 0.0, 80.0), AnchorAction::Ignore);
        assert_eq!(plan_anchor_scroll("/tickets", None, 0.0, 80.0), AnchorAction::Ignore);
    }

    #[test]
    fn found_target_scrolls_below_the_header() {
        assert_eq!(
            plan_anchor_scroll("#faq", Some(300.0), 1000.0, 80.0),
            AnchorAction::ScrollTo(1220.0)
        );
    }

    #[test]
    fn destination_clears_the_header() {
        // Target 300px below the viewport top, page scrolled 1000px, 80px header.
        assert_eq!(scroll_destination(300.0, 1000.0, 80.0), 1220.0);
        // Targets above the viewport give a smaller offset.
        assert_eq!(scroll_destination(-200.0, 1000.0, 80.0), 720.0);
        assert_eq!(scroll_destination(0.0, 0.0, 0.0), 0.0);
    }
}
