//! Frontend Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FormsError {
    #[error("invalid forms config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for FormsError {
    fn from(value: JsValue) -> Self {
        FormsError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
