//! # studsafe-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — origin-scoped persistent key/value storage
//!   - `PageDocument` / `PageElement` — the parts of the DOM the behaviours touch
//!   - `TaskScheduler` — fire-and-forget delayed tasks
//! - Define **driving/inbound** use-cases as service structs:
//!   - `ThemeController` — initialise, bind, and toggle the theme
//!   - `AlertDismisser` — fade and remove existing alert banners
//! - Wire both behaviours against the page lifecycle (`page::install`)
//!
//! ## Dependency rule
//! Depends on `studsafe-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod page;
pub mod ports;
pub mod services;

#[cfg(test)]
mod test_support;
