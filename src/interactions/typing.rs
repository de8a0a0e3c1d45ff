use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::Document;

use crate::config::TypingConfig;
use crate::dom;
use crate::error::SetupError;

/// Reveals `text` one character per tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// The text typed so far after one more character, or `None` once complete.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

/// Retypes the hero name once the page has settled.
pub struct TypingEffect {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl TypingEffect {
    pub fn attach(document: &Document, config: &TypingConfig) -> Result<Self, SetupError> {
        let element = dom::require_html(document, &config.selector)?;
        let text = element.text_content().unwrap_or_default();

        element.set_text_content(Some(""));
        let _ = element.style().set_property("opacity", "1");

        let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let stop = handle.clone();
        let mut writer = Typewriter::new(&text);
        let interval = Interval::new(config.interval_ms, move || match writer.advance() {
            Some(typed) => element.set_text_content(Some(&typed)),
            None => {
                // The interval cannot be dropped from inside its own tick.
                let stop = stop.clone();
                Timeout::new(0, move || drop(stop.borrow_mut().take())).forget();
            }
        });
        *handle.borrow_mut() = Some(interval);

        Ok(Self { interval: handle })
    }
}

impl Drop for TypingEffect {
    fn drop(&mut self) {
        self.interval.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_character_per_tick() {
        let mut writer = Typewriter::new("Aoi");
        assert_eq!(writer.advance().as_deref(), Some("A"));
        assert_eq!(writer.advance().as_deref(), Some("Ao"));
        assert_eq!(writer.advance().as_deref(), Some("Aoi"));
        assert!(writer.is_done());
        assert_eq!(writer.advance(), None);
    }

    #[test]
    fn handles_multibyte_names() {
        let mut writer = Typewriter::new("葵");
        assert_eq!(writer.advance().as_deref(), Some("葵"));
        assert_eq!(writer.advance(), None);
    }

    #[test]
    fn empty_text_is_already_done() {
        let mut writer = Typewriter::new("");
        assert!(writer.is_done());
        assert_eq!(writer.advance(), None);
    }
}
