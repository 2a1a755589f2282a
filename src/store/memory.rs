//! In-process preference storage.

use std::sync::Mutex;

use super::{PreferenceStore, StoreError};
use crate::theme::Theme;

/// Keeps the preference in process memory.
///
/// For hosts without durable storage and for tests; a choice stored here does
/// not survive a restart, so such hosts re-resolve from the system preference
/// every launch.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Theme>>,
}

impl MemoryStore {
    /// An empty store: no choice was ever made.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds an explicit choice.
    pub fn with_preference(theme: Theme) -> Self {
        Self {
            slot: Mutex::new(Some(theme)),
        }
    }

    /// The currently stored choice, if any.
    pub fn preference(&self) -> Option<Theme> {
        *self.slot.lock().unwrap()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        Ok(self.preference())
    }

    fn save(&self, theme: Theme) -> Result<(), StoreError> {
        *self.slot.lock().unwrap() = Some(theme);
        Ok(())
    }
}
