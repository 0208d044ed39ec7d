//! `window.localStorage` preference store.

use studsafe_app::ports::PreferenceStore;
use studsafe_domain::error::StudsafeError;

use crate::error::WebError;

/// Preference store backed by the origin's `localStorage`.
///
/// Looks the storage object up on every call, so a page that loses access
/// mid-session degrades to errors instead of stale handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        window
            .local_storage()
            .map_err(|err| WebError::storage(&err))?
            .ok_or(WebError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StudsafeError> {
        let storage = Self::storage()?;
        storage
            .get_item(key)
            .map_err(|err| WebError::storage(&err).into())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StudsafeError> {
        let storage = Self::storage()?;
        storage
            .set_item(key, value)
            .map_err(|err| WebError::storage(&err).into())
    }
}
