use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::Document;

use crate::config::ParallaxConfig;
use crate::dom::{self, EventListener};
use crate::error::SetupError;

pub const HERO_SELECTOR: &str = ".hero";
pub const HERO_BACKGROUND_SELECTOR: &str = ".hero-bg";
pub const PARTICLES_SELECTOR: &str = ".particles";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxFrame {
    pub background_y: f64,
    pub particles_y: f64,
}

impl ParallaxFrame {
    pub fn background_transform(&self) -> String {
        format!("translateY({}px)", self.background_y)
    }

    pub fn particles_transform(&self) -> String {
        format!("translateY({}px)", self.particles_y)
    }
}

/// Frame-coalesced parallax offsets for the hero section.
#[derive(Debug)]
pub struct ParallaxController {
    background_rate: f64,
    particle_rate: f64,
    frame_pending: bool,
    current: ParallaxFrame,
}

impl ParallaxController {
    pub fn new(config: &ParallaxConfig) -> Self {
        Self {
            background_rate: config.background_rate,
            particle_rate: config.particle_rate,
            frame_pending: false,
            current: ParallaxFrame::default(),
        }
    }

    /// True when the caller should schedule a frame. Scroll events arriving
    /// while one is pending are dropped.
    pub fn request_frame(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Scheduling failed; let the next scroll event try again.
    pub fn abandon_frame(&mut self) {
        self.frame_pending = false;
    }

    /// Recomputes [`current`](Self::current) for `offset`. Past the hero the
    /// effect freezes and `false` is returned.
    pub fn on_frame(&mut self, offset: f64, hero_height: f64) -> bool {
        self.frame_pending = false;
        if offset > hero_height {
            return false;
        }
        let background_y = offset * self.background_rate;
        self.current = ParallaxFrame {
            background_y,
            particles_y: background_y * self.particle_rate,
        };
        true
    }

    pub fn current(&self) -> ParallaxFrame {
        self.current
    }
}

pub struct Parallax {
    _listener: EventListener,
}

impl Parallax {
    pub fn attach(document: &Document, config: &ParallaxConfig) -> Result<Self, SetupError> {
        let window = dom::window()?;
        let hero = dom::require_html(document, HERO_SELECTOR)?;
        let background = dom::require_html(document, HERO_BACKGROUND_SELECTOR)?;
        let particles = dom::query_html(document, PARTICLES_SELECTOR)?;
        if particles.is_none() {
            debug!("Parallax running without {}", PARTICLES_SELECTOR);
        }

        let controller = Rc::new(RefCell::new(ParallaxController::new(config)));

        let target = window.clone();
        let listener = EventListener::new(&target, "scroll", move |_| {
            if !controller.borrow_mut().request_frame() {
                return;
            }

            let frame = {
                let controller = controller.clone();
                let window = window.clone();
                let hero = hero.clone();
                let background = background.clone();
                let particles = particles.clone();
                move || {
                    let offset = dom::page_y_offset(&window);
                    let height = f64::from(hero.offset_height());
                    let mut controller = controller.borrow_mut();
                    if !controller.on_frame(offset, height) {
                        return;
                    }
                    let frame = controller.current();
                    dom::set_transform(&background, Some(&frame.background_transform()));
                    if let Some(particles) = &particles {
                        dom::set_transform(particles, Some(&frame.particles_transform()));
                    }
                }
            };

            if dom::request_animation_frame(&window, frame).is_err() {
                controller.borrow_mut().abandon_frame();
            }
        })?;

        Ok(Self {
            _listener: listener,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ParallaxController {
        ParallaxController::new(&ParallaxConfig::default())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn one_frame_in_flight() {
        let mut parallax = controller();
        assert!(parallax.request_frame());
        assert!(!parallax.request_frame());
        assert!(!parallax.request_frame());

        parallax.on_frame(10.0, 800.0);
        assert!(parallax.request_frame());
    }

    #[test]
    fn abandoned_frame_can_be_requested_again() {
        let mut parallax = controller();
        assert!(parallax.request_frame());
        parallax.abandon_frame();
        assert!(parallax.request_frame());
    }

    #[test]
    fn background_follows_scroll_until_hero_ends() {
        let hero = 1000.0;
        let mut parallax = controller();
        let expected = [0.0, 0.2 * hero, 0.4 * hero, 0.4 * hero];
        for (offset, expected) in [0.0, hero / 2.0, hero, hero * 2.0].into_iter().zip(expected) {
            parallax.on_frame(offset, hero);
            assert_close(parallax.current().background_y, expected);
        }
    }

    #[test]
    fn particles_move_at_a_fifth_of_background() {
        let mut parallax = controller();
        assert!(parallax.on_frame(500.0, 1000.0));
        let frame = parallax.current();
        assert_close(frame.background_y, 200.0);
        assert_close(frame.particles_y, 40.0);
        assert_eq!(frame.background_transform(), "translateY(200px)");
    }

    #[test]
    fn past_hero_reports_no_change() {
        let mut parallax = controller();
        parallax.on_frame(300.0, 1000.0);
        assert!(!parallax.on_frame(1500.0, 1000.0));
        assert_close(parallax.current().background_y, 120.0);
    }
}
