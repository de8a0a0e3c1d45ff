use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::interactions::header_scroll::use_header_scrolled;
use crate::interactions::mobile_menu::{body_overflow, MenuAction, MenuState};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#benefits", "Benefits"),
    ("#schedule", "Schedule"),
    ("#faq", "FAQ"),
    ("#access", "Access"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub scroll_threshold: f64,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_scrolled = use_header_scrolled(props.scroll_threshold);
    let menu = use_reducer(MenuState::default);

    // Lock page scrolling while the menu covers it
    {
        use_effect_with_deps(
            move |open| {
                if let Some(body) = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.body())
                {
                    let style = body.style();
                    let _ = match body_overflow(*open) {
                        Some(value) => style.set_property("overflow", value),
                        None => style.remove_property("overflow").map(|_| ()),
                    };
                } else {
                    debug!("No <body> to lock");
                }
                || ()
            },
            menu.open,
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::NavLinkActivated))
    };

    html! {
        <header id="header" class={classes!("header", is_scrolled.then(|| "scrolled"))}>
            <div class="header-inner">
                <a href="#top" class="logo">{"PHOTO BOOK"}</a>
                <button
                    id="menuBtn"
                    class={classes!("menu-btn", menu.open.then(|| "active"))}
                    aria-label="Menu"
                    aria-expanded={menu.open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class="nav">
                    <ul id="navList" class={classes!("nav-list", menu.open.then(|| "active"))}>
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li>
                                <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                            </li>
                        }) }
                    </ul>
                </nav>
            </div>
        </header>
    }
}
