use std::rc::Rc;

use log::debug;
use yew::Reducible;

/// Open flags for a group of FAQ items, in render order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Vec<bool>,
}

impl AccordionState {
    pub fn with_panels(count: usize) -> Self {
        Self {
            open: vec![false; count],
        }
    }

    /// Closes every other panel, then toggles `index`. Out of range is a no-op.
    pub fn activate(&self, index: usize) -> Self {
        let Some(was_open) = self.open.get(index).copied() else {
            return self.clone();
        };
        let mut open = vec![false; self.open.len()];
        open[index] = !was_open;
        Self { open }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|open| **open).count()
    }
}

impl Reducible for AccordionState {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        let next = self.activate(index);
        debug!("FAQ item {} activated, {} open", index, next.open_count());
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_b_closes_a() {
        let state = AccordionState::with_panels(3).activate(0);
        assert!(state.is_open(0));

        let state = state.activate(1);
        assert!(!state.is_open(0));
        assert!(state.is_open(1));
        assert_eq!(state.open_count(), 1);
    }

    #[test]
    fn clicking_open_panel_closes_everything() {
        let state = AccordionState::with_panels(3).activate(1).activate(1);
        assert_eq!(state.open_count(), 0);
    }

    #[test]
    fn unknown_panel_is_ignored() {
        let state = AccordionState::with_panels(2).activate(0);
        assert_eq!(state.activate(7), state);
    }

    #[test]
    fn reducer_applies_activation() {
        let state = Rc::new(AccordionState::with_panels(2));
        let state = state.reduce(1);
        assert!(state.is_open(1));
        assert_eq!(state.reduce(1).open_count(), 0);
    }

    #[test]
    fn never_more_than_one_open() {
        let mut state = AccordionState::with_panels(4);
        for index in [0, 2, 2, 3, 1, 1, 0, 3] {
            state = state.activate(index);
            assert!(state.open_count() <= 1);
        }
    }
}
