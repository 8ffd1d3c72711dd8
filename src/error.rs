use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("localStorage is unavailable")]
    NoStorage,
    #[error("storage call failed: {0}")]
    Storage(String),
    #[error("bad config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
    #[error("web audio failed: {0}")]
    Audio(String),
}

/// Renders a thrown JS value for logging.
pub fn js_message(v: &JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{:?}", v))
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
