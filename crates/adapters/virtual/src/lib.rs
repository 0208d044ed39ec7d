//! # studsafe-adapter-virtual
//!
//! In-memory implementations of every `studsafe-app` port, for tests and
//! for running the page behaviours outside a browser.
//!
//! | Port | Implementation | Behaviour |
//! |------|----------------|-----------|
//! | `PreferenceStore` | [`VirtualStorage`] | `HashMap` backed; can be built "unavailable" to fail every call |
//! | `PageDocument` / `PageElement` | [`VirtualDocument`] / [`VirtualElement`] | Small element tree with simple selectors and a loading → ready lifecycle |
//! | `TaskScheduler` | [`VirtualClock`] | Tasks run only when the clock is advanced |
//!
//! ## Dependency rule
//!
//! Depends on `studsafe-app` (port traits) and `studsafe-domain` only.

mod clock;
mod document;
mod error;
mod selector;
mod storage;

pub use clock::VirtualClock;
pub use document::{VirtualDocument, VirtualElement};
pub use error::VirtualError;
pub use storage::VirtualStorage;
