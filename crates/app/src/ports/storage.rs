//! Storage port — persistent, origin-scoped key/value preferences.

use studsafe_domain::error::StudsafeError;

/// Key/value store that survives page reloads.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StudsafeError::Storage`] when the store cannot be reached.
    fn load(&self, key: &str) -> Result<Option<String>, StudsafeError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StudsafeError::Storage`] when the store rejects the write.
    fn save(&self, key: &str, value: &str) -> Result<(), StudsafeError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<T> {
    fn load(&self, key: &str) -> Result<Option<String>, StudsafeError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StudsafeError> {
        (**self).save(key, value)
    }
}
