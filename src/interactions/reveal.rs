use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::RevealConfig;
use crate::dom;
use crate::error::SetupError;

pub const VISIBLE_CLASS: &str = "visible";

/// Something that can watch keys for viewport visibility.
pub trait VisibilityObserver<K> {
    fn observe(&mut self, key: &K);
    fn unobserve(&mut self, key: &K);
}

/// Delay before revealing the `index`-th watched element. Elements inside a
/// grid or timeline cascade; everything else shows at once.
pub fn stagger_delay(index: usize, staggered: bool, step_ms: u32) -> u32 {
    if staggered {
        (index as u32).saturating_mul(step_ms)
    } else {
        0
    }
}

struct Watched<K> {
    key: K,
    delay_ms: u32,
    revealed: bool,
}

/// One-way reveal bookkeeping: each key is revealed at most once.
pub struct RevealTracker<K> {
    watched: Vec<Watched<K>>,
}

impl<K: PartialEq> RevealTracker<K> {
    pub fn new() -> Self {
        Self { watched: Vec::new() }
    }

    pub fn watch<O: VisibilityObserver<K>>(&mut self, key: K, delay_ms: u32, observer: &mut O) {
        observer.observe(&key);
        self.watched.push(Watched {
            key,
            delay_ms,
            revealed: false,
        });
    }

    /// Returns the delay to reveal after, the first time `key` intersects.
    pub fn notify<O: VisibilityObserver<K>>(
        &mut self,
        key: &K,
        intersecting: bool,
        observer: &mut O,
    ) -> Option<u32> {
        if !intersecting {
            return None;
        }
        let item = self
            .watched
            .iter_mut()
            .find(|item| !item.revealed && item.key == *key)?;
        item.revealed = true;
        observer.unobserve(&item.key);
        Some(item.delay_ms)
    }

    #[cfg(test)]
    pub fn is_revealed(&self, key: &K) -> bool {
        self.watched
            .iter()
            .any(|item| item.revealed && item.key == *key)
    }
}

impl<K: PartialEq> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

struct DomObserver(IntersectionObserver);

impl VisibilityObserver<Element> for DomObserver {
    fn observe(&mut self, key: &Element) {
        self.0.observe(key);
    }

    fn unobserve(&mut self, key: &Element) {
        self.0.unobserve(key);
    }
}

/// Reveals fade-in elements as they scroll into view.
pub struct RevealOnScroll {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealOnScroll {
    pub fn attach(document: &Document, config: &RevealConfig) -> Result<Self, SetupError> {
        let selector = config.selectors.join(", ");
        let elements = dom::require_all(document, &selector)?;

        let tracker: Rc<RefCell<RevealTracker<Element>>> = Rc::new(RefCell::new(RevealTracker::new()));

        let callback = {
            let tracker = tracker.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    let mut observer = DomObserver(observer);
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let target = entry.target();
                        let delay = tracker
                            .borrow_mut()
                            .notify(&target, entry.is_intersecting(), &mut observer);
                        if let Some(delay) = delay {
                            Timeout::new(delay, move || {
                                let _ = target.class_list().add_1(VISIBLE_CLASS);
                            })
                            .forget();
                        }
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&config.root_margin);
        options.set_threshold(&config.threshold.into());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let mut dom_observer = DomObserver(observer.clone());
        for (index, element) in elements.into_iter().enumerate() {
            let staggered = config
                .stagger_containers
                .iter()
                .any(|container| matches!(element.closest(container), Ok(Some(_))));
            let delay = stagger_delay(index, staggered, config.stagger_step_ms);
            tracker.borrow_mut().watch(element, delay, &mut dom_observer);
        }

        debug!("Watching {} reveal elements", tracker.borrow().watched.len());
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealOnScroll {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingObserver {
        observed: Vec<&'static str>,
        unobserved: Vec<&'static str>,
    }

    impl VisibilityObserver<&'static str> for RecordingObserver {
        fn observe(&mut self, key: &&'static str) {
            self.observed.push(*key);
        }

        fn unobserve(&mut self, key: &&'static str) {
            self.unobserved.push(*key);
        }
    }

    #[test]
    fn grid_items_cascade_and_standalone_items_do_not() {
        let delays: Vec<u32> = (0..4).map(|i| stagger_delay(i, true, 100)).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert_eq!(stagger_delay(5, false, 100), 0);
    }

    #[test]
    fn watching_starts_observation() {
        let mut observer = RecordingObserver::default();
        let mut tracker = RevealTracker::new();
        tracker.watch("intro", 0, &mut observer);
        tracker.watch("benefit", 100, &mut observer);
        assert_eq!(observer.observed, vec!["intro", "benefit"]);
        assert!(!tracker.is_revealed(&"intro"));
    }

    #[test]
    fn first_intersection_reveals_with_its_delay() {
        let mut observer = RecordingObserver::default();
        let mut tracker = RevealTracker::new();
        tracker.watch("benefit", 200, &mut observer);

        assert_eq!(tracker.notify(&"benefit", false, &mut observer), None);
        assert!(!tracker.is_revealed(&"benefit"));

        assert_eq!(tracker.notify(&"benefit", true, &mut observer), Some(200));
        assert!(tracker.is_revealed(&"benefit"));
        assert_eq!(observer.unobserved, vec!["benefit"]);
    }

    #[test]
    fn reveal_is_one_way() {
        let mut observer = RecordingObserver::default();
        let mut tracker = RevealTracker::new();
        tracker.watch("intro", 0, &mut observer);
        tracker.notify(&"intro", true, &mut observer);

        assert_eq!(tracker.notify(&"intro", false, &mut observer), None);
        assert_eq!(tracker.notify(&"intro", true, &mut observer), None);
        assert!(tracker.is_revealed(&"intro"));
        assert_eq!(observer.unobserved.len(), 1);
    }

    #[test]
    fn elements_reveal_independently() {
        let mut observer = RecordingObserver::default();
        let mut tracker = RevealTracker::new();
        tracker.watch("a", 0, &mut observer);
        tracker.watch("b", 100, &mut observer);

        tracker.notify(&"b", true, &mut observer);
        assert!(tracker.is_revealed(&"b"));
        assert!(!tracker.is_revealed(&"a"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut observer = RecordingObserver::default();
        let mut tracker: RevealTracker<&'static str> = RevealTracker::new();
        assert_eq!(tracker.notify(&"ghost", true, &mut observer), None);
        assert!(observer.unobserved.is_empty());
    }
}
