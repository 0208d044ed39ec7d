//! # studsafe-domain
//!
//! Pure domain model for the studsafe page behaviours.
//!
//! ## Responsibilities
//! - Foundational types: error conventions shared by every layer
//! - Define the **Theme** preference (`light` / `dark`) and how the toggle
//!   control presents it (glyph and tooltip)
//! - Define the **Alert timeline** (visible → fading → removed) and the
//!   scheduled-task records that drive it
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod alert;
pub mod theme;
