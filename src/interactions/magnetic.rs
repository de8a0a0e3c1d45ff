use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::MagneticConfig;
use crate::dom::{self, EventListener};
use crate::error::SetupError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Offset pulling a button toward the pointer, as a fraction (`strength`) of
/// the pointer's distance from the button centre.
pub fn magnetic_offset(pointer_x: f64, pointer_y: f64, bounds: Bounds, strength: f64) -> (f64, f64) {
    let x = pointer_x - bounds.left - bounds.width / 2.0;
    let y = pointer_y - bounds.top - bounds.height / 2.0;
    (x * strength, y * strength)
}

pub fn translate(offset: (f64, f64)) -> String {
    format!("translate({}px, {}px)", offset.0, offset.1)
}

pub struct MagneticButtons {
    _listeners: Vec<EventListener>,
}

impl MagneticButtons {
    pub fn attach(document: &Document, config: &MagneticConfig) -> Result<Self, SetupError> {
        let buttons: Vec<HtmlElement> = dom::require_all(document, &config.selector)?
            .into_iter()
            .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
            .collect();

        let strength = config.strength;
        let mut listeners = Vec::with_capacity(buttons.len() * 2);
        for button in buttons {
            let moving = button.clone();
            listeners.push(EventListener::new(&button, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = moving.get_bounding_client_rect();
                let bounds = Bounds {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                };
                let offset = magnetic_offset(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    bounds,
                    strength,
                );
                dom::set_transform(&moving, Some(&translate(offset)));
            })?);

            let leaving = button.clone();
            listeners.push(EventListener::new(&button, "mouseleave", move |_| {
                dom::set_transform(&leaving, None);
            })?);
        }

        Ok(Self {
            _listeners: listeners,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 60.0,
    };

    #[test]
    fn centre_is_neutral() {
        assert_eq!(magnetic_offset(200.0, 80.0, BUTTON, 0.1), (0.0, 0.0));
    }

    #[test]
    fn pulls_a_tenth_toward_the_pointer() {
        let (x, y) = magnetic_offset(300.0, 50.0, BUTTON, 0.1);
        assert!((x - 10.0).abs() < 1e-9);
        assert!((y + 3.0).abs() < 1e-9);
    }

    #[test]
    fn translate_formats_pixels() {
        assert_eq!(translate((4.0, -2.5)), "translate(4px, -2.5px)");
    }
}
