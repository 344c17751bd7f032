use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure to attach the field to the page.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    /// No window/document, or no element with the requested id.
    #[error("no drawing surface: {0}")]
    MissingSurface(String),

    /// The element exists but is not a `<canvas>`.
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    /// The canvas refused a 2D context.
    #[error("canvas #{0} has no 2d context")]
    NoContext(String),

    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Js(String),

    /// The JSON configuration could not be parsed.
    #[error("invalid field config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        BindError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
