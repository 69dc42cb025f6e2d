use thiserror::Error;
use wasm_bindgen::JsValue;

/// Startup failures; any of these stops the client from being created
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("canvas 2d context unavailable: {0}")]
    CanvasContext(String),

    #[error("failed to load audio clip {clip}: {reason}")]
    AudioLoad { clip: &'static str, reason: String },
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Render a JS exception for logs and error messages
#[cfg(target_arch = "wasm32")]
pub fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
