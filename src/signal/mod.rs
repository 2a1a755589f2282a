//! The operating system's dark-preference signal.
//!
//! This module provides:
//!
//! - [`SystemThemeSignal`]: the query + subscribe capability the controller
//!   follows while no explicit choice is stored
//! - [`DetectSignal`]: detection via the `dark-light` crate with a polling
//!   change watcher
//! - [`FixedSignal`]: a pinned answer for headless hosts and tests
//! - [`set_mode_detector`]: process-wide detector override for tests
//!
//! How change notifications are produced is each adapter's internal choice;
//! the controller is written once against the single [`subscribe`]
//! contract and behaves identically regardless of the mechanism behind it.
//!
//! [`subscribe`]: SystemThemeSignal::subscribe

mod detect;
mod fixed;

pub use detect::{set_mode_detector, DetectSignal};
pub use fixed::FixedSignal;

use crate::theme::Theme;

/// Listener invoked with the newly reported theme on each preference change.
pub type SignalListener = Box<dyn FnMut(Theme) + Send>;

/// The host's report of the system-level dark/light preference.
pub trait SystemThemeSignal {
    /// The currently reported preference, or `None` when the capability is
    /// absent in this environment. Callers treat `None` as "no system
    /// preference" and default to light; querying must never panic.
    fn query(&self) -> Option<Theme>;

    /// Registers the listener for subsequent preference changes, replacing
    /// any previously registered one. A controller subscribes exactly once,
    /// during initialization.
    fn subscribe(&mut self, listener: SignalListener);
}
