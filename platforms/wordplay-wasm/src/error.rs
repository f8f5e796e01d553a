use thiserror::Error;
use wasm_bindgen::JsValue;
use wordplay_checker::LexiconError;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element not found: {0}")]
    MissingElement(String),
    #[error("DOM call failed: {0}")]
    Js(String),
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error("invalid game config: {0}")]
    Config(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<DomError> for JsValue {
    fn from(e: DomError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
