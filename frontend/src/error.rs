use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from browser plumbing. None of these ever reach the visitor;
/// components log them and skip the effect.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("chat transcript is malformed: {0}")]
    Transcript(#[from] serde_json::Error),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
