use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

mod config;
mod dom;
mod enhancements;
mod error;
mod components {
    pub mod faq;
    pub mod header;
}
mod pages {
    pub mod landing;
}
mod interactions {
    pub mod accordion;
    pub mod anchor_scroll;
    pub mod header_scroll;
    pub mod magnetic;
    pub mod mobile_menu;
    pub mod parallax;
    pub mod reveal;
    pub mod smooth_scroll;
    pub mod typing;
}

use config::LandingConfig;
use interactions::smooth_scroll::SmoothScrollLibrary;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<LandingConfig>,
    pub library: SmoothScrollLibrary,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing config={props.config.clone()} library={props.library.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let window = web_sys::window();
    let document = window.as_ref().and_then(|window| window.document());
    let loaded = LandingConfig::load(document.as_ref());
    let config = loaded.as_ref().cloned().unwrap_or_default();

    if let Err(err) = console_log::init_with_level(config.level()) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }
    if let Err(err) = loaded {
        warn!("Ignoring malformed #{}: {}", crate::config::CONFIG_ELEMENT_ID, err);
    }

    let library = SmoothScrollLibrary::detect(window.as_ref());
    info!(
        "Starting landing page (smooth scroll library {})",
        if library.is_available() { "found" } else { "absent" }
    );

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
        library,
    })
    .render();
}
