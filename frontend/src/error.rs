use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures reaching into the browser page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("no element with id `{0}`")]
    NoElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("site content needs at least one testimonial")]
    NoTestimonials,
}
