use log::debug;
use yew::prelude::*;

use crate::dom::{self, EventListener};

/// The header switches to its compact style once the page has scrolled past
/// `threshold`. An offset exactly at the threshold still counts as the top.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Tracks the window scroll offset and reports whether the header is scrolled.
#[hook]
pub fn use_header_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let listener = dom::window().and_then(|window| {
                    scrolled.set(is_scrolled(dom::page_y_offset(&window), threshold));

                    let target = window.clone();
                    EventListener::new(&target, "scroll", move |_| {
                        scrolled.set(is_scrolled(dom::page_y_offset(&window), threshold));
                    })
                });
                if let Err(err) = &listener {
                    debug!("Header scroll watcher skipped: {}", err);
                }
                move || drop(listener)
            },
            threshold,
        );
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_and_at_threshold_is_top() {
        for offset in [0.0, 10.0, 49.9, 50.0] {
            assert!(!is_scrolled(offset, 50.0), "offset {offset}");
        }
    }

    #[test]
    fn past_threshold_is_scrolled() {
        for offset in [50.1, 51.0, 600.0, 10_000.0] {
            assert!(is_scrolled(offset, 50.0), "offset {offset}");
        }
    }
}
