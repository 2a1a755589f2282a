//! The toggle control model.
//!
//! The controller creates exactly one [`ToggleControl`]; the host renders it
//! however its UI toolkit requires. The control's indicator always names the
//! action a click will perform next, not the state that is already active.

use console::style;

use crate::theme::Theme;

const SUN: char = '\u{2600}';
const MOON: char = '\u{263E}';

/// The action the toggle control will perform next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Dark is active; a click switches to light. Shown as a sun.
    SwitchToLight,
    /// Light is active; a click switches to dark. Shown as a moon.
    SwitchToDark,
}

impl Indicator {
    /// The indicator matching the given active theme.
    pub fn for_active(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Indicator::SwitchToLight,
            Theme::Light => Indicator::SwitchToDark,
        }
    }

    /// The glyph the control displays.
    pub fn glyph(self) -> char {
        match self {
            Indicator::SwitchToLight => SUN,
            Indicator::SwitchToDark => MOON,
        }
    }

    /// Human-readable description of the next action.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::SwitchToLight => "Switch to light theme",
            Indicator::SwitchToDark => "Switch to dark theme",
        }
    }
}

/// The one user-facing control that flips the theme.
///
/// # Example
///
/// ```rust
/// use nightswitch::{FixedSignal, Indicator, MarkerSurface, MemoryStore, Theme, ThemeController};
///
/// let mut controller = ThemeController::new(
///     MemoryStore::with_preference(Theme::Dark),
///     FixedSignal::light(),
///     MarkerSurface::new(),
/// );
/// controller.initialize();
///
/// // Dark is active, so the control offers the way back to light.
/// let control = controller.control().unwrap();
/// assert_eq!(control.indicator(), Indicator::SwitchToLight);
/// assert_eq!(control.indicator().glyph(), '\u{2600}');
/// ```
#[derive(Debug, Clone)]
pub struct ToggleControl {
    indicator: Indicator,
}

impl ToggleControl {
    /// A freshly attached control, before any theme is active.
    pub(crate) fn new() -> Self {
        // No theme active yet, so a click would activate dark.
        Self {
            indicator: Indicator::SwitchToDark,
        }
    }

    /// Recomputes the indicator for the newly active theme.
    pub(crate) fn refresh(&mut self, active: Theme) {
        self.indicator = Indicator::for_active(active);
    }

    /// The next-action indicator currently shown.
    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    /// Fixed label communicating the control's purpose to assistive
    /// technology, independent of its current indicator.
    pub fn accessible_label(&self) -> &'static str {
        "Toggle between light and dark theme"
    }

    /// The indicator glyph with terminal styling applied.
    pub fn styled(&self) -> String {
        let glyph = self.indicator.glyph();
        match self.indicator {
            Indicator::SwitchToLight => style(glyph).yellow().to_string(),
            Indicator::SwitchToDark => style(glyph).cyan().to_string(),
        }
    }
}
