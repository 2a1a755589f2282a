//! The theme controller.

use std::sync::{Arc, Mutex};

use log::{debug, warn};

use crate::control::{Indicator, ToggleControl};
use crate::signal::{DetectSignal, SystemThemeSignal};
use crate::store::{FileStore, PreferenceStore};
use crate::surface::ThemeSurface;
use crate::theme::Theme;

/// Owns all theme behavior for one host surface.
///
/// The controller resolves the initial theme from the stored explicit choice,
/// else the system preference, else light. An explicit [`toggle`] persists
/// the new choice; system preference changes are adopted only while no
/// explicit choice is stored. Construct exactly one controller per surface.
///
/// Storage failures never panic and never block the theme change itself: a
/// failed read falls through to the system preference, a failed write leaves
/// the applied theme in place, and both are logged as warnings.
///
/// # Example
///
/// ```rust
/// use nightswitch::{FixedSignal, MarkerSurface, MemoryStore, Theme, ThemeController};
///
/// let mut controller = ThemeController::new(
///     MemoryStore::new(),
///     FixedSignal::dark(),
///     MarkerSurface::new(),
/// );
/// controller.initialize();
/// assert_eq!(controller.current(), Some(Theme::Dark));
///
/// controller.toggle();
/// assert_eq!(controller.current(), Some(Theme::Light));
/// ```
///
/// [`toggle`]: ThemeController::toggle
pub struct ThemeController<P, S, F> {
    core: Arc<Mutex<Core<P, F>>>,
    signal: S,
}

struct Core<P, F> {
    store: P,
    surface: F,
    control: Option<ToggleControl>,
    theme: Option<Theme>,
}

impl<P, S, F> ThemeController<P, S, F>
where
    P: PreferenceStore + Send + 'static,
    S: SystemThemeSignal,
    F: ThemeSurface + Send + 'static,
{
    /// A controller over the given capabilities. Call
    /// [`initialize`](ThemeController::initialize) before anything else.
    pub fn new(store: P, signal: S, surface: F) -> Self {
        Self {
            core: Arc::new(Mutex::new(Core {
                store,
                surface,
                control: None,
                theme: None,
            })),
            signal,
        }
    }

    /// Creates the toggle control, resolves and applies the initial theme,
    /// and starts following system preference changes.
    ///
    /// Resolution order: stored preference, else system preference, else
    /// light. The fallback paths only set the visible theme; they never
    /// write the store.
    pub fn initialize(&mut self) {
        {
            let mut core = self.core.lock().unwrap();
            core.control = Some(ToggleControl::new());
            let initial = match core.store.load() {
                Ok(Some(stored)) => stored,
                Ok(None) => self.signal.query().unwrap_or(Theme::Light),
                Err(err) => {
                    warn!("failed to read stored theme preference: {}", err);
                    self.signal.query().unwrap_or(Theme::Light)
                }
            };
            core.apply(initial);
        }

        let core = Arc::clone(&self.core);
        self.signal.subscribe(Box::new(move |reported| {
            core.lock().unwrap().system_changed(reported);
        }));
    }

    /// Flips the theme and persists the new choice.
    ///
    /// Exactly one surface application and one store write per call.
    pub fn toggle(&mut self) {
        let mut core = self.core.lock().unwrap();
        let next = match core.theme {
            Some(Theme::Dark) => Theme::Light,
            _ => Theme::Dark,
        };
        core.apply(next);
        core.persist(next);
    }

    /// The theme currently applied, or `None` before initialization.
    pub fn current(&self) -> Option<Theme> {
        self.core.lock().unwrap().theme
    }

    /// The toggle control model, once created by initialization.
    pub fn control(&self) -> Option<ToggleControl> {
        self.core.lock().unwrap().control.clone()
    }

    /// The next-action indicator shown on the toggle control.
    pub fn indicator(&self) -> Option<Indicator> {
        self.control().map(|control| control.indicator())
    }
}

impl<P: PreferenceStore, F: ThemeSurface> Core<P, F> {
    fn apply(&mut self, theme: Theme) {
        self.surface.apply(theme);
        self.theme = Some(theme);
        if let Some(control) = self.control.as_mut() {
            control.refresh(theme);
        }
        debug!("theme applied: {}", theme);
    }

    fn persist(&mut self, theme: Theme) {
        if let Err(err) = self.store.save(theme) {
            warn!("failed to save theme preference '{}': {}", theme, err);
        }
    }

    /// Reaction to a system preference change: adopt the report only while
    /// the user has not made an explicit choice. Never writes the store.
    fn system_changed(&mut self, reported: Theme) {
        match self.store.load() {
            Ok(Some(_)) => {}
            Ok(None) => self.apply(reported),
            Err(err) => {
                warn!("failed to re-read stored theme preference: {}", err);
                self.apply(reported);
            }
        }
    }
}

/// Builds a controller with the default desktop adapters and initializes it.
///
/// This is the host entry point's one-line bootstrap: the preference lives in
/// `<config_dir>/<app>/theme` and the system preference comes from
/// [`DetectSignal`]. Call it once per surface and keep the returned
/// controller alive for the lifetime of the UI.
///
/// # Example
///
/// ```rust,no_run
/// use nightswitch::MarkerSurface;
///
/// let controller = nightswitch::bootstrap("my-app", MarkerSurface::new());
/// ```
pub fn bootstrap<F>(app: &str, surface: F) -> ThemeController<FileStore, DetectSignal, F>
where
    F: ThemeSurface + Send + 'static,
{
    let mut controller = ThemeController::new(FileStore::for_app(app), DetectSignal::new(), surface);
    controller.initialize();
    controller
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::FixedSignal;
    use crate::store::MemoryStore;
    use crate::surface::MarkerSurface;

    #[test]
    fn test_nothing_is_active_before_initialize() {
        let controller = ThemeController::new(
            MemoryStore::new(),
            FixedSignal::light(),
            MarkerSurface::new(),
        );

        assert_eq!(controller.current(), None);
        assert!(controller.control().is_none());
    }

    #[test]
    fn test_toggle_before_initialize_activates_dark() {
        let mut controller = ThemeController::new(
            MemoryStore::new(),
            FixedSignal::light(),
            MarkerSurface::new(),
        );

        controller.toggle();
        assert_eq!(controller.current(), Some(Theme::Dark));
    }

    #[test]
    fn test_initialize_creates_the_control() {
        let mut controller = ThemeController::new(
            MemoryStore::new(),
            FixedSignal::light(),
            MarkerSurface::new(),
        );
        controller.initialize();

        let control = controller.control().unwrap();
        assert!(!control.accessible_label().is_empty());
    }
}
