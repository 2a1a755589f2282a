//! In-memory model of the root container's marker set.

use std::collections::BTreeSet;

use super::ThemeSurface;
use crate::theme::Theme;

/// Marker present while the dark theme is active.
pub const DARK_MARKER: &str = "dark-mode";

/// Marker present while the light theme is active.
pub const LIGHT_MARKER: &str = "light-mode";

/// A class-list-like surface keeping the theme marker pair exclusive.
///
/// Starts with neither marker; the first `apply` establishes one. Markers the
/// host sets for its own purposes are left untouched. Hosts with a real root
/// container implement [`ThemeSurface`] directly and use this model in tests.
///
/// # Example
///
/// ```rust
/// use nightswitch::{MarkerSurface, Theme, ThemeSurface, DARK_MARKER};
///
/// let mut surface = MarkerSurface::new();
/// surface.apply(Theme::Dark);
///
/// assert!(surface.has_marker(DARK_MARKER));
/// assert_eq!(surface.active(), Some(Theme::Dark));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkerSurface {
    markers: BTreeSet<String>,
}

impl MarkerSurface {
    /// A surface with no markers yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The theme indicated by the marker currently present, if any.
    pub fn active(&self) -> Option<Theme> {
        if self.has_marker(DARK_MARKER) {
            Some(Theme::Dark)
        } else if self.has_marker(LIGHT_MARKER) {
            Some(Theme::Light)
        } else {
            None
        }
    }

    /// Whether the given marker is present.
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    /// Adds a host-owned marker unrelated to theming.
    pub fn insert_marker(&mut self, marker: impl Into<String>) {
        self.markers.insert(marker.into());
    }

    /// All markers currently present, in sorted order.
    pub fn markers(&self) -> impl Iterator<Item = &str> + '_ {
        self.markers.iter().map(String::as_str)
    }
}

impl ThemeSurface for MarkerSurface {
    fn apply(&mut self, theme: Theme) {
        let (active, inactive) = match theme {
            Theme::Dark => (DARK_MARKER, LIGHT_MARKER),
            Theme::Light => (LIGHT_MARKER, DARK_MARKER),
        };
        self.markers.remove(inactive);
        self.markers.insert(active.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme_marker_count(surface: &MarkerSurface) -> usize {
        [DARK_MARKER, LIGHT_MARKER]
            .iter()
            .filter(|m| surface.has_marker(m))
            .count()
    }

    #[test]
    fn test_apply_keeps_exactly_one_marker() {
        let mut surface = MarkerSurface::new();
        for theme in [Theme::Dark, Theme::Light, Theme::Dark] {
            surface.apply(theme);
            assert_eq!(theme_marker_count(&surface), 1);
            assert_eq!(surface.active(), Some(theme));
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut surface = MarkerSurface::new();
        surface.apply(Theme::Dark);
        surface.apply(Theme::Dark);

        assert_eq!(theme_marker_count(&surface), 1);
        assert_eq!(surface.markers().count(), 1);
    }

    #[test]
    fn test_fresh_surface_has_no_active_theme() {
        assert_eq!(MarkerSurface::new().active(), None);
    }

    #[test]
    fn test_host_markers_are_preserved() {
        let mut surface = MarkerSurface::new();
        surface.insert_marker("high-contrast");

        surface.apply(Theme::Light);
        surface.apply(Theme::Dark);

        assert!(surface.has_marker("high-contrast"));
        assert_eq!(theme_marker_count(&surface), 1);
    }

    #[test]
    fn test_apply_normalizes_conflicting_markers() {
        let mut surface = MarkerSurface::new();
        surface.insert_marker(DARK_MARKER);
        surface.insert_marker(LIGHT_MARKER);

        surface.apply(Theme::Light);
        assert_eq!(surface.active(), Some(Theme::Light));
        assert_eq!(theme_marker_count(&surface), 1);
    }
}
