//! File-backed preference storage.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{PreferenceStore, StoreError};
use crate::theme::Theme;

/// Stores the preference as a literal `"light"`/`"dark"` string in one file.
///
/// A missing file means no choice was ever made. File content that is not one
/// of the two wire strings also counts as "never chosen" rather than an
/// error, so a corrupted file degrades to system-preference behavior instead
/// of breaking the host.
///
/// # Example
///
/// ```rust,no_run
/// use nightswitch::{FileStore, PreferenceStore, Theme};
///
/// let store = FileStore::for_app("my-app");
/// store.save(Theme::Dark)?;
/// assert_eq!(store.load()?, Some(Theme::Dark));
/// # Ok::<(), nightswitch::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Option<PathBuf>,
}

impl FileStore {
    /// A store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The conventional per-user location: `<config_dir>/<app>/theme`.
    ///
    /// On platforms without a config directory the returned store has no
    /// backing location and every operation reports
    /// [`StoreError::Unavailable`]; the controller then behaves as if no
    /// preference were ever saved.
    pub fn for_app(app: &str) -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join(app).join("theme")),
        }
    }

    /// The backing file, if this environment has one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn path_or_unavailable(&self) -> Result<&Path, StoreError> {
        self.path.as_deref().ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        let path = self.path_or_unavailable()?;
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err)),
        };
        Ok(raw.trim().parse().ok())
    }

    fn save(&self, theme: Theme) -> Result<(), StoreError> {
        let path = self.path_or_unavailable()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, theme.as_str())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> FileStore {
        FileStore::new(dir.join("prefs").join("theme"))
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Dark));

        store.save(Theme::Light).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Light));
    }

    #[test]
    fn test_missing_file_is_no_preference() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_unrecognized_content_is_no_preference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        fs::write(&path, "sepia\n").unwrap();

        let store = FileStore::new(path);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_trailing_whitespace_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        fs::write(&path, "dark\n").unwrap();

        let store = FileStore::new(path);
        assert_eq!(store.load().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn test_file_holds_the_literal_wire_string() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(Theme::Dark).unwrap();
        let raw = fs::read_to_string(store.path().unwrap()).unwrap();
        assert_eq!(raw, "dark");
    }

    #[test]
    fn test_store_without_location_reports_unavailable() {
        let store = FileStore { path: None };

        assert!(matches!(store.load(), Err(StoreError::Unavailable)));
        assert!(matches!(
            store.save(Theme::Dark),
            Err(StoreError::Unavailable)
        ));
    }

    #[test]
    fn test_for_app_places_file_under_app_dir() {
        let store = FileStore::for_app("nightswitch-test");
        if let Some(path) = store.path() {
            assert!(path.ends_with("nightswitch-test/theme"));
        }
    }
}
