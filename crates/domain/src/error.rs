//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`StudsafeError`] via `From` when crossing a port boundary.

use std::error::Error;

/// Boxed source error carried across port boundaries.
pub type BoxedError = Box<dyn Error + Send + Sync>;

/// Base error for every port operation.
#[derive(Debug, thiserror::Error)]
pub enum StudsafeError {
    /// A value could not be interpreted as a theme.
    #[error("invalid theme")]
    InvalidTheme(#[from] ParseThemeError),

    /// The persistent preference store failed.
    #[error("storage error")]
    Storage(#[source] BoxedError),

    /// A document or element operation failed.
    #[error("document error")]
    Document(#[source] BoxedError),
}

/// A string that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {value:?}, expected \"light\" or \"dark\"")]
pub struct ParseThemeError {
    /// The rejected input.
    pub value: String,
}
