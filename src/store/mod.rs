//! Persistent storage of the explicit theme choice.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: the capability the controller reads and writes
//! - [`FileStore`]: per-user file storage under the config directory
//! - [`MemoryStore`]: in-process storage for tests and diskless hosts
//! - [`StoreError`]: errors from an unreachable or failing store
//!
//! An absent preference is the normal state for a user who has never clicked
//! the toggle; it is what makes the controller follow the system preference
//! live. The store is written only by an explicit toggle and never cleared.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use crate::theme::Theme;

/// Durable storage for the user's explicit theme choice.
///
/// `load` returning `Ok(None)` means no choice was ever made. Implementations
/// must report an unreachable backing store as an error rather than panic;
/// the controller degrades to system-preference behavior on read failure and
/// keeps the applied theme on write failure.
pub trait PreferenceStore {
    /// Reads the stored choice, if any.
    fn load(&self) -> Result<Option<Theme>, StoreError>;

    /// Overwrites the stored choice.
    fn save(&self, theme: Theme) -> Result<(), StoreError>;
}

/// Shared handles pass through, so a host can keep one for inspection while
/// the controller owns the other.
impl<P: PreferenceStore + ?Sized> PreferenceStore for Arc<P> {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        (**self).load()
    }

    fn save(&self, theme: Theme) -> Result<(), StoreError> {
        (**self).save(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_store_shares_state() {
        let store = Arc::new(MemoryStore::new());
        let handle = Arc::clone(&store);

        handle.save(Theme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Dark));
    }
}
