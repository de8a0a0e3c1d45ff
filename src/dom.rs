use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::SetupError;

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub fn document() -> Result<Document, SetupError> {
    window()?.document().ok_or(SetupError::NoDocument)
}

/// Current vertical scroll offset, 0 when the window cannot report it.
pub fn page_y_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, SetupError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

pub fn require_html(document: &Document, selector: &str) -> Result<HtmlElement, SetupError> {
    query_html(document, selector)?.ok_or_else(|| SetupError::MissingElement(selector.to_string()))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SetupError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Like [`query_all`] but an empty match is an error.
pub fn require_all(document: &Document, selector: &str) -> Result<Vec<Element>, SetupError> {
    let elements = query_all(document, selector)?;
    if elements.is_empty() {
        return Err(SetupError::NoMatches(selector.to_string()));
    }
    Ok(elements)
}

pub fn set_transform(element: &HtmlElement, value: Option<&str>) {
    let style = element.style();
    let _ = match value {
        Some(value) => style.set_property("transform", value),
        None => style.remove_property("transform").map(|_| ()),
    };
}

/// An event listener that is removed again when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, SetupError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Runs `callback` on the next animation frame, once.
pub fn request_animation_frame<F>(window: &Window, callback: F) -> Result<i32, SetupError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(callback);
    Ok(window.request_animation_frame(callback.unchecked_ref())?)
}

/// Calls `tick` with the frame timestamp on every animation frame until dropped.
pub struct FrameLoop {
    window: Window,
    frame_id: Rc<Cell<i32>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    pub fn start<F>(window: &Window, mut tick: F) -> Result<Self, SetupError>
    where
        F: FnMut(f64) + 'static,
    {
        let frame_id = Rc::new(Cell::new(0));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let next = callback.clone();
        let next_id = frame_id.clone();
        let next_window = window.clone();
        *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            tick(time);
            if let Some(again) = next.borrow().as_ref() {
                if let Ok(id) = next_window.request_animation_frame(again.as_ref().unchecked_ref()) {
                    next_id.set(id);
                }
            }
        }));

        if let Some(first) = callback.borrow().as_ref() {
            frame_id.set(window.request_animation_frame(first.as_ref().unchecked_ref())?);
        }

        Ok(Self {
            window: window.clone(),
            frame_id,
            callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        let _ = self.window.cancel_animation_frame(self.frame_id.get());
        // Breaks the closure's reference to itself.
        self.callback.borrow_mut().take();
    }
}
