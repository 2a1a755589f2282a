//! Light/dark theme state management with OS preference detection.
//!
//! This crate provides:
//!
//! - [`ThemeController`]: resolves, applies, toggles, and persists the theme
//! - [`Theme`]: the light/dark enum and its `"light"`/`"dark"` wire format
//! - [`PreferenceStore`], [`SystemThemeSignal`], [`ThemeSurface`]: the three
//!   host capabilities the controller is written against
//! - Ready-made adapters: [`FileStore`], [`MemoryStore`], [`DetectSignal`],
//!   [`FixedSignal`], [`MarkerSurface`]
//!
//! The controller resolves the initial theme from the stored explicit choice,
//! else the system preference, else light. An explicit toggle persists the
//! user's choice so it survives restarts; while no choice is stored, system
//! preference changes are followed live. A stored choice is never cleared:
//! once the user picks a side, the system preference stops mattering.
//!
//! # Example
//!
//! ```rust
//! use nightswitch::{FixedSignal, MarkerSurface, MemoryStore, Theme, ThemeController};
//!
//! let mut controller = ThemeController::new(
//!     MemoryStore::new(),
//!     FixedSignal::light(),
//!     MarkerSurface::new(),
//! );
//! controller.initialize();
//! assert_eq!(controller.current(), Some(Theme::Light));
//!
//! controller.toggle();
//! assert_eq!(controller.current(), Some(Theme::Dark));
//! ```
//!
//! For a desktop host the one-line entry point is [`bootstrap`], which wires
//! up [`FileStore`] and [`DetectSignal`] and initializes the controller.

mod control;
mod controller;
mod signal;
mod store;
mod surface;
mod theme;

pub use control::{Indicator, ToggleControl};
pub use controller::{bootstrap, ThemeController};
pub use signal::{set_mode_detector, DetectSignal, FixedSignal, SignalListener, SystemThemeSignal};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
pub use surface::{MarkerSurface, ThemeSurface, DARK_MARKER, LIGHT_MARKER};
pub use theme::{ParseThemeError, Theme};
