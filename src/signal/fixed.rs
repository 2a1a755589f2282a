//! A pinned system signal for hosts without live detection.

use super::{SignalListener, SystemThemeSignal};
use crate::theme::Theme;

/// A signal that always reports the same preference and never notifies.
///
/// Useful for headless hosts, servers rendering on behalf of a client, and
/// tests that need a known system preference.
#[derive(Debug, Clone, Copy)]
pub struct FixedSignal {
    mode: Option<Theme>,
}

impl FixedSignal {
    /// A signal pinned to the given report.
    pub fn new(mode: Option<Theme>) -> Self {
        Self { mode }
    }

    /// Always reports a light preference.
    pub fn light() -> Self {
        Self::new(Some(Theme::Light))
    }

    /// Always reports a dark preference.
    pub fn dark() -> Self {
        Self::new(Some(Theme::Dark))
    }

    /// Models an environment with no preference capability at all.
    pub fn unavailable() -> Self {
        Self::new(None)
    }
}

impl SystemThemeSignal for FixedSignal {
    fn query(&self) -> Option<Theme> {
        self.mode
    }

    fn subscribe(&mut self, _listener: SignalListener) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_reports_pinned_mode() {
        assert_eq!(FixedSignal::dark().query(), Some(Theme::Dark));
        assert_eq!(FixedSignal::light().query(), Some(Theme::Light));
        assert_eq!(FixedSignal::unavailable().query(), None);
    }
}
