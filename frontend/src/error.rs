use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("intersection observer error: {0}")]
    Observer(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

/// Best-effort text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
