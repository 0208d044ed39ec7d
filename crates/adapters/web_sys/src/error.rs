//! Browser adapter error types.

use studsafe_domain::error::StudsafeError;
use wasm_bindgen::JsValue;

/// Errors raised while talking to the browser.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// `localStorage` is disabled for this origin.
    #[error("localStorage is unavailable")]
    StorageUnavailable,

    /// A storage call threw (security or quota errors).
    #[error("localStorage call failed: {0}")]
    Storage(String),

    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Dom(String),

    /// The element has no inline style (not an `HTMLElement`).
    #[error("element is not an HTMLElement")]
    NotHtmlElement,
}

impl WebError {
    pub(crate) fn storage(value: &JsValue) -> Self {
        Self::Storage(describe(value))
    }

    pub(crate) fn dom(value: &JsValue) -> Self {
        Self::Dom(describe(value))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl From<WebError> for StudsafeError {
    fn from(err: WebError) -> Self {
        match err {
            WebError::NoWindow | WebError::StorageUnavailable | WebError::Storage(_) => {
                StudsafeError::Storage(Box::new(err))
            }
            WebError::NoDocument | WebError::Dom(_) | WebError::NotHtmlElement => {
                StudsafeError::Document(Box::new(err))
            }
        }
    }
}
