use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons an enhancer skips its setup. None of these are fatal: the page
/// keeps working without that one effect.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("element `{0}` not found")]
    MissingElement(String),
    #[error("no elements match `{0}`")]
    NoMatches(String),
    #[error("smooth scroll library is not loaded")]
    LibraryAbsent,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_wasm_bindgen::Error> for SetupError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        SetupError::Js(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_selector() {
        let err = SetupError::MissingElement(".hero-bg".to_string());
        assert_eq!(err.to_string(), "element `.hero-bg` not found");

        let err = SetupError::NoMatches(".btn".to_string());
        assert_eq!(err.to_string(), "no elements match `.btn`");
    }
}
