use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Document;

use crate::config::LandingConfig;
use crate::dom;
use crate::error::SetupError;
use crate::interactions::{
    anchor_scroll::AnchorScroller,
    magnetic::MagneticButtons,
    parallax::Parallax,
    reveal::RevealOnScroll,
    smooth_scroll::{LenisOptions, SmoothScroll, SmoothScrollLibrary},
    typing::TypingEffect,
};

/// Document-level behaviour attached to the rendered landing page. Dropping
/// it detaches every listener, observer and timer it owns.
pub struct Enhancements {
    _reveal: Option<RevealOnScroll>,
    _anchors: Option<AnchorScroller>,
    _parallax: Option<Parallax>,
    _smooth_scroll: Option<SmoothScroll>,
    _magnetic: Rc<RefCell<Option<MagneticButtons>>>,
    _magnetic_timer: Timeout,
    _typing: Rc<RefCell<Option<TypingEffect>>>,
    _typing_timer: Option<Timeout>,
}

/// Keeps an enhancer that set up fine; logs and drops one that could not.
fn optional<T>(name: &str, result: Result<T, SetupError>) -> Option<T> {
    match result {
        Ok(enhancer) => Some(enhancer),
        Err(err) => {
            debug!("Skipping {}: {}", name, err);
            None
        }
    }
}

fn attach_to<T>(
    name: &str,
    document: &Result<Document, SetupError>,
    setup: impl FnOnce(&Document) -> Result<T, SetupError>,
) -> Option<T> {
    match document {
        Ok(document) => optional(name, setup(document)),
        Err(err) => {
            debug!("Skipping {}: {}", name, err);
            None
        }
    }
}

pub fn install(config: &LandingConfig, library: &SmoothScrollLibrary) -> Enhancements {
    let document = dom::document();

    let reveal = attach_to("reveal on scroll", &document, |document| {
        RevealOnScroll::attach(document, &config.reveal)
    });
    let anchors = attach_to("anchor scrolling", &document, AnchorScroller::attach);
    let parallax = attach_to("parallax", &document, |document| {
        Parallax::attach(document, &config.parallax)
    });
    let smooth_scroll = if config.smooth_scroll.enabled {
        optional(
            "smooth scroll",
            SmoothScroll::start(library, &LenisOptions::from(&config.smooth_scroll)),
        )
    } else {
        None
    };

    let magnetic = Rc::new(RefCell::new(None));
    let magnetic_timer = {
        let magnetic = magnetic.clone();
        let settings = config.magnetic.clone();
        Timeout::new(config.magnetic.init_delay_ms, move || {
            *magnetic.borrow_mut() = optional(
                "magnetic buttons",
                dom::document().and_then(|document| MagneticButtons::attach(&document, &settings)),
            );
        })
    };

    let typing = Rc::new(RefCell::new(None));
    let typing_timer = config.typing.enabled.then(|| {
        let typing = typing.clone();
        let settings = config.typing.clone();
        Timeout::new(config.typing.start_delay_ms, move || {
            *typing.borrow_mut() = optional(
                "typing effect",
                dom::document().and_then(|document| TypingEffect::attach(&document, &settings)),
            );
        })
    });

    Enhancements {
        _reveal: reveal,
        _anchors: anchors,
        _parallax: parallax,
        _smooth_scroll: smooth_scroll,
        _magnetic: magnetic,
        _magnetic_timer: magnetic_timer,
        _typing: typing,
        _typing_timer: typing_timer,
    }
}
