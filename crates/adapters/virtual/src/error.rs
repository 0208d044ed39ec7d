//! Virtual adapter error types.

use studsafe_domain::error::StudsafeError;

/// Errors raised by the virtual adapters.
#[derive(Debug, thiserror::Error)]
pub enum VirtualError {
    /// The store was built unavailable.
    #[error("storage is unavailable")]
    StorageUnavailable,

    /// Attribute or style names must be non-empty.
    #[error("empty {0} name")]
    EmptyName(&'static str),
}

impl From<VirtualError> for StudsafeError {
    fn from(err: VirtualError) -> Self {
        match err {
            VirtualError::StorageUnavailable => StudsafeError::Storage(Box::new(err)),
            VirtualError::EmptyName(_) => StudsafeError::Document(Box::new(err)),
        }
    }
}
