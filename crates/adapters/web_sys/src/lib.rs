//! # studsafe-adapter-web-sys
//!
//! Browser implementations of the `studsafe-app` ports.
//!
//! | Port | Implementation | Backed by |
//! |------|----------------|-----------|
//! | `PreferenceStore` | [`LocalStorage`] | `window.localStorage` |
//! | `PageDocument` / `PageElement` | [`WebDocument`] / [`WebElement`] | `web_sys::Document` / `web_sys::Element` |
//! | `TaskScheduler` | [`TimeoutScheduler`] | `setTimeout` via `gloo-timers` |
//!
//! Only meaningful on `wasm32-unknown-unknown`; on other targets the crate
//! builds but every browser call fails at runtime.
//!
//! ## Dependency rule
//!
//! Depends on `studsafe-app` (port traits) and `studsafe-domain` only.

mod document;
mod error;
mod scheduler;
mod storage;

pub use document::{WebDocument, WebElement};
pub use error::WebError;
pub use scheduler::TimeoutScheduler;
pub use storage::LocalStorage;
