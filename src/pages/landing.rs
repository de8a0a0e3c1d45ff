use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::faq::{Faq, FaqEntry};
use crate::components::header::Header;
use crate::config::LandingConfig;
use crate::enhancements;
use crate::interactions::smooth_scroll::SmoothScrollLibrary;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Rc<LandingConfig>,
    pub library: SmoothScrollLibrary,
}

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Do I need a ticket to attend the signing event?",
            answer: "Yes. A numbered ticket comes with every copy purchased at the venue shop or reserved online before the event day.",
        },
        FaqEntry {
            question: "Can I buy more than one copy?",
            answer: "You can. Each copy includes its own ticket, and each ticket is good for one handshake and one signature.",
        },
        FaqEntry {
            question: "Is photography allowed?",
            answer: "Photos are allowed during the talk session only. Please keep cameras away during the signing.",
        },
        FaqEntry {
            question: "What happens if the event is cancelled?",
            answer: "Reserved copies will be shipped to your address and the ticket price refunded. Updates are posted on this page.",
        },
    ]
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Attach document-level behaviour once the markup is in place
    {
        let config = props.config.clone();
        let library = props.library.clone();
        use_effect_with_deps(
            move |_| {
                info!("Attaching page enhancements");
                let enhancements = enhancements::install(&config, &library);
                move || drop(enhancements)
            },
            (),
        );
    }

    html! {
        <>
            <style>{LANDING_CSS}</style>
            <Header scroll_threshold={props.config.header_scroll_threshold} />
            <main class="landing-page">
                <section id="top" class="hero">
                    <div class="hero-bg"></div>
                    <div class="particles"></div>
                    <div class="hero-content">
                        <p class="hero-label fade-in">{"1st PHOTO BOOK"}</p>
                        <h1 class="hero-title">
                            <span class="name">{"Aoi Minase"}</span>
                            <span class="title">{"Release Event"}</span>
                        </h1>
                        <p class="hero-date fade-in">{"2026.12.05 SAT / Tokyo"}</p>
                        <a href="#schedule" class="btn btn-primary">{"See the schedule"}</a>
                    </div>
                </section>

                <section id="about" class="section about">
                    <div class="about-image fade-in-left">
                        <img src="/assets/cover.jpg" alt="Photo book cover" />
                    </div>
                    <div class="about-text fade-in-right">
                        <h2 class="section-title">{"About the book"}</h2>
                        <p>
                            {"Shot over four seasons on the coast of Okinawa, the first photo book collects 160 pages of never-before-seen portraits. "}
                            {"Celebrate the release with a talk session and a signing event."}
                        </p>
                    </div>
                </section>

                <section id="benefits" class="section benefits">
                    <h2 class="section-title fade-in">{"Event benefits"}</h2>
                    <div class="benefits-grid">
                        <div class="benefit-card fade-in">
                            <h3>{"Signing"}</h3>
                            <p>{"Get your copy signed in person."}</p>
                        </div>
                        <div class="benefit-card fade-in">
                            <h3>{"Handshake"}</h3>
                            <p>{"A short handshake with every ticket."}</p>
                        </div>
                        <div class="benefit-card fade-in">
                            <h3>{"Postcard"}</h3>
                            <p>{"One of six venue-only postcards, at random."}</p>
                        </div>
                        <div class="benefit-card fade-in">
                            <h3>{"Talk session"}</h3>
                            <p>{"Stories from the shoot, with the photographer."}</p>
                        </div>
                    </div>
                </section>

                <section id="schedule" class="section schedule">
                    <h2 class="section-title fade-in">{"Schedule"}</h2>
                    <ol class="timeline">
                        <li class="timeline-item fade-in">
                            <span class="time">{"12:00"}</span>
                            <span class="label">{"Doors open, books on sale"}</span>
                        </li>
                        <li class="timeline-item fade-in">
                            <span class="time">{"13:00"}</span>
                            <span class="label">{"Talk session"}</span>
                        </li>
                        <li class="timeline-item fade-in">
                            <span class="time">{"14:00"}</span>
                            <span class="label">{"Signing and handshake"}</span>
                        </li>
                        <li class="timeline-item fade-in">
                            <span class="time">{"17:00"}</span>
                            <span class="label">{"Close"}</span>
                        </li>
                    </ol>
                </section>

                <section id="faq" class="section faq">
                    <h2 class="section-title fade-in">{"FAQ"}</h2>
                    <div class="fade-in">
                        <Faq entries={faq_entries()} />
                    </div>
                </section>

                <section id="access" class="section access fade-in">
                    <h2 class="section-title">{"Access"}</h2>
                    <p>{"Shibuya Event Hall B1F, 5 minutes from Shibuya Station."}</p>
                    <a href="#top" class="btn btn-secondary">{"Back to top"}</a>
                </section>
            </main>
            <footer class="footer">
                <a href="#" class="footer-social">{"Follow"}</a>
                <p>{"© 2026 Photo Book Release Committee"}</p>
            </footer>
        </>
    }
}

const LANDING_CSS: &str = r#"
    :root {
        --accent: #d98ba4;
        --ink: #2b2b2b;
        --paper: #fbf7f4;
    }
    body {
        margin: 0;
        color: var(--ink);
        background: var(--paper);
        font-family: "Noto Sans JP", sans-serif;
    }
    .header {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 100;
        padding: 1.5rem 0;
        transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
    }
    .header.scrolled {
        padding: 0.75rem 0;
        background: rgba(251, 247, 244, 0.95);
        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
    }
    .header-inner {
        display: flex;
        align-items: center;
        justify-content: space-between;
        max-width: 1100px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .menu-btn {
        display: none;
        background: none;
        border: none;
        cursor: pointer;
    }
    .menu-btn span {
        display: block;
        width: 24px;
        height: 2px;
        margin: 5px 0;
        background: var(--ink);
        transition: transform 0.3s ease, opacity 0.3s ease;
    }
    .menu-btn.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
    .menu-btn.active span:nth-child(2) { opacity: 0; }
    .menu-btn.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
    .nav-list {
        display: flex;
        gap: 2rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-link {
        color: inherit;
        text-decoration: none;
    }
    .hero {
        position: relative;
        height: 100vh;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .hero-bg {
        position: absolute;
        inset: -10% 0 0 0;
        background: url("/assets/hero.jpg") center / cover no-repeat;
        will-change: transform;
    }
    .particles {
        position: absolute;
        inset: 0;
        background-image: radial-gradient(rgba(255, 255, 255, 0.6) 1px, transparent 1px);
        background-size: 40px 40px;
        will-change: transform;
    }
    .hero-content {
        position: relative;
        text-align: center;
    }
    .hero-title .name {
        display: block;
        font-size: 3.5rem;
    }
    .btn {
        display: inline-block;
        padding: 1rem 2.5rem;
        border-radius: 999px;
        text-decoration: none;
        transition: transform 0.2s ease-out, box-shadow 0.3s ease;
    }
    .btn-primary {
        background: var(--accent);
        color: #fff;
    }
    .btn-secondary {
        border: 1px solid var(--accent);
        color: var(--accent);
    }
    .section {
        max-width: 1100px;
        margin: 0 auto;
        padding: 6rem 1.5rem;
    }
    .benefits-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1.5rem;
    }
    .timeline {
        list-style: none;
        border-left: 2px solid var(--accent);
        padding-left: 2rem;
    }
    .fade-in,
    .fade-in-left,
    .fade-in-right {
        opacity: 0;
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .fade-in { transform: translateY(30px); }
    .fade-in-left { transform: translateX(-40px); }
    .fade-in-right { transform: translateX(40px); }
    .fade-in.visible,
    .fade-in-left.visible,
    .fade-in-right.visible {
        opacity: 1;
        transform: none;
    }
    .faq-question {
        display: flex;
        width: 100%;
        gap: 1rem;
        padding: 1.25rem 0;
        background: none;
        border: none;
        border-bottom: 1px solid rgba(0, 0, 0, 0.1);
        text-align: left;
        cursor: pointer;
    }
    .faq-answer {
        max-height: 0;
        overflow: hidden;
        transition: max-height 0.4s ease;
    }
    .faq-item.active .faq-answer {
        max-height: 400px;
    }
    .footer {
        padding: 3rem 1.5rem;
        text-align: center;
    }
    @media (max-width: 768px) {
        .menu-btn { display: block; }
        .nav-list {
            position: fixed;
            inset: 0;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            background: var(--paper);
            opacity: 0;
            visibility: hidden;
            transition: opacity 0.3s ease, visibility 0.3s ease;
        }
        .nav-list.active {
            opacity: 1;
            visibility: visible;
        }
        .hero-title .name { font-size: 2.25rem; }
    }
"#;
