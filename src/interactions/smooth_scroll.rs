use log::info;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::Window;

use crate::config::SmoothScrollConfig;
use crate::dom::{self, FrameLoop};
use crate::error::SetupError;

/// Global name the Lenis script registers itself under.
pub const LENIS_GLOBAL: &str = "Lenis";

/// The smooth scrolling library available to the page, resolved once at
/// startup.
#[derive(Clone, Debug, PartialEq)]
pub enum SmoothScrollLibrary {
    Lenis(Function),
    Absent,
}

impl SmoothScrollLibrary {
    pub fn detect(window: Option<&Window>) -> Self {
        window
            .and_then(|window| Reflect::get(window, &JsValue::from_str(LENIS_GLOBAL)).ok())
            .and_then(|global| global.dyn_into::<Function>().ok())
            .map(SmoothScrollLibrary::Lenis)
            .unwrap_or(SmoothScrollLibrary::Absent)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SmoothScrollLibrary::Lenis(_))
    }
}

/// Exponential ease-out used for wheel scrolling.
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LenisOptions {
    pub duration: f64,
    pub direction: &'static str,
    pub gesture_direction: &'static str,
    pub smooth: bool,
    pub mouse_multiplier: f64,
    /// Touch devices keep native momentum unless this is set.
    pub smooth_touch: bool,
    pub touch_multiplier: f64,
}

impl From<&SmoothScrollConfig> for LenisOptions {
    fn from(config: &SmoothScrollConfig) -> Self {
        Self {
            duration: config.duration,
            direction: "vertical",
            gesture_direction: "vertical",
            smooth: true,
            mouse_multiplier: config.mouse_multiplier,
            smooth_touch: config.smooth_touch,
            touch_multiplier: config.touch_multiplier,
        }
    }
}

impl LenisOptions {
    fn to_js(&self) -> Result<JsValue, SetupError> {
        let options = serde_wasm_bindgen::to_value(self)?;
        let easing = Closure::<dyn Fn(f64) -> f64>::new(ease_out_expo).into_js_value();
        Reflect::set(&options, &JsValue::from_str("easing"), &easing)?;
        Ok(options)
    }
}

/// A running library instance, advanced every animation frame until dropped.
pub struct SmoothScroll {
    _frames: FrameLoop,
}

impl SmoothScroll {
    pub fn start(library: &SmoothScrollLibrary, options: &LenisOptions) -> Result<Self, SetupError> {
        let SmoothScrollLibrary::Lenis(constructor) = library else {
            return Err(SetupError::LibraryAbsent);
        };
        let window = dom::window()?;

        let instance = Reflect::construct(constructor, &Array::of1(&options.to_js()?))?;
        let raf: Function = Reflect::get(&instance, &JsValue::from_str("raf"))?.dyn_into()?;

        let frames = FrameLoop::start(&window, move |time| {
            let _ = raf.call1(&instance, &JsValue::from_f64(time));
        })?;

        info!("Smooth scrolling enabled");
        Ok(Self { _frames: frames })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_starts_near_zero_and_caps_at_one() {
        assert!((ease_out_expo(0.0) - 0.001).abs() < 1e-12);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert_eq!(ease_out_expo(3.0), 1.0);
    }

    #[test]
    fn easing_never_goes_backwards() {
        let samples: Vec<f64> = (0..=20).map(|i| ease_out_expo(i as f64 / 20.0)).collect();
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn options_follow_config() {
        let options = LenisOptions::from(&SmoothScrollConfig::default());
        assert_eq!(options.duration, 1.2);
        assert_eq!(options.direction, "vertical");
        assert_eq!(options.gesture_direction, "vertical");
        assert!(options.smooth);
        assert!(!options.smooth_touch);
        assert_eq!(options.touch_multiplier, 2.0);
        assert_eq!(options.mouse_multiplier, 1.0);
    }

    #[test]
    fn options_serialize_with_library_keys() {
        let options = LenisOptions::from(&SmoothScrollConfig::default());
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["gestureDirection"], "vertical");
        assert_eq!(json["smoothTouch"], false);
        assert_eq!(json["touchMultiplier"], 2.0);
    }

    #[test]
    fn absent_library_is_not_available() {
        assert!(!SmoothScrollLibrary::Absent.is_available());
        assert_eq!(SmoothScrollLibrary::detect(None), SmoothScrollLibrary::Absent);
    }
}
