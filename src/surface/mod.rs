//! The host surface that carries the theme marker.
//!
//! External styling consumes the marker; this crate only manages which of the
//! two markers is present, never what they look like.

mod marker;

pub use marker::{MarkerSurface, DARK_MARKER, LIGHT_MARKER};

use std::sync::{Arc, Mutex};

use crate::theme::Theme;

/// Applies the active theme marker to the host's root visual container.
///
/// Contract: after `apply` returns, exactly one of the two theme markers is
/// present (never zero, never both), and applying the already-active theme
/// again leaves the surface unchanged.
pub trait ThemeSurface {
    fn apply(&mut self, theme: Theme);
}

/// Shared handles pass through, so a host can keep one for rendering while
/// the controller owns the other.
impl<F: ThemeSurface + ?Sized> ThemeSurface for Arc<Mutex<F>> {
    fn apply(&mut self, theme: Theme) {
        self.lock().unwrap().apply(theme);
    }
}
