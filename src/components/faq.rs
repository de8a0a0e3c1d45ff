use web_sys::MouseEvent;
use yew::prelude::*;

use crate::interactions::accordion::AccordionState;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

/// Question list where opening one answer closes the rest.
#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let panels = props.entries.len();
    let accordion = use_reducer(move || AccordionState::with_panels(panels));

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let open = accordion.is_open(index);
                let onclick = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        accordion.dispatch(index);
                    })
                };
                html! {
                    <div class={classes!("faq-item", open.then(|| "active"))}>
                        <button class="faq-question" {onclick} aria-expanded={open.to_string()}>
                            <span class="faq-q">{"Q"}</span>
                            <span class="question-text">{entry.question}</span>
                            <span class="faq-icon">{if open { "−" } else { "+" }}</span>
                        </button>
                        <div class="faq-answer">
                            <p>{entry.answer}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
