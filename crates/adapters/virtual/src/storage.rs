//! Map-backed preference store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use studsafe_app::ports::PreferenceStore;
use studsafe_domain::error::StudsafeError;

use crate::error::VirtualError;

/// In-memory stand-in for origin-scoped `localStorage`.
///
/// Clones share the same entries, like two scripts on one origin.
#[derive(Debug, Clone, Default)]
pub struct VirtualStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl VirtualStorage {
    /// A store that fails every read and write (storage disabled by the user
    /// or blocked by privacy settings).
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Seed an entry, bypassing availability.
    #[must_use]
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Peek at an entry, bypassing availability.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for VirtualStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StudsafeError> {
        if self.unavailable {
            return Err(VirtualError::StorageUnavailable.into());
        }
        Ok(self.entry(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StudsafeError> {
        if self.unavailable {
            return Err(VirtualError::StorageUnavailable.into());
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_none_when_key_missing() {
        let storage = VirtualStorage::default();
        assert_eq!(storage.load("theme").unwrap(), None);
    }

    #[test]
    fn should_return_saved_value() {
        let storage = VirtualStorage::default();
        storage.save("theme", "dark").unwrap();
        assert_eq!(storage.load("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn should_share_entries_between_clones() {
        let storage = VirtualStorage::default();
        let other = storage.clone();
        storage.save("theme", "dark").unwrap();
        assert_eq!(other.entry("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn should_fail_every_call_when_unavailable() {
        let storage = VirtualStorage::unavailable().with_entry("theme", "dark");
        assert!(matches!(storage.load("theme"), Err(StudsafeError::Storage(_))));
        assert!(matches!(
            storage.save("theme", "light"),
            Err(StudsafeError::Storage(_))
        ));
        assert_eq!(storage.entry("theme").as_deref(), Some("dark"));
    }
}
