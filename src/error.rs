use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures inside browser glue. None of these stop the page from rendering;
/// callers log them and carry on.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("site config is not valid JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("nights limits out of order (min {min}, default {default}, max {max})")]
    NightsLimits { min: u32, default: u32, max: u32 },
}

impl From<JsValue> for SiteError {
    fn from(v: JsValue) -> Self {
        SiteError::Js(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}
