//! OS preference detection via `dark-light`, with a polling change watcher.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use super::{SignalListener, SystemThemeSignal};
use crate::theme::Theme;

type ModeDetector = fn() -> Option<Theme>;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine the system color preference.
///
/// This is useful for testing or when you want to force a specific mode.
/// `None` models an environment where the capability is absent.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_system_theme() -> Option<Theme> {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> Option<Theme> {
    match detect_os_theme() {
        OsThemeMode::Dark => Some(Theme::Dark),
        OsThemeMode::Light => Some(Theme::Light),
    }
}

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// System preference signal backed by `dark-light` detection.
///
/// There is no portable push notification for OS theme changes, so
/// subscription runs a background watcher that re-probes the detector and
/// invokes the listener whenever the reported mode differs from the last
/// probe. The watcher stops when the signal is dropped or resubscribed.
///
/// Hosts whose platform does deliver native change events implement
/// [`SystemThemeSignal`] directly instead.
pub struct DetectSignal {
    poll_interval: Duration,
    stop: Option<Arc<AtomicBool>>,
}

impl DetectSignal {
    /// A signal probing at the default interval.
    pub fn new() -> Self {
        Self::with_poll_interval(DEFAULT_POLL_INTERVAL)
    }

    /// A signal probing at the given interval.
    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            stop: None,
        }
    }

    fn stop_watcher(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop.store(true, Ordering::Relaxed);
        }
    }
}

impl Default for DetectSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemThemeSignal for DetectSignal {
    fn query(&self) -> Option<Theme> {
        detect_system_theme()
    }

    fn subscribe(&mut self, mut listener: SignalListener) {
        self.stop_watcher();
        let stop = Arc::new(AtomicBool::new(false));
        self.stop = Some(Arc::clone(&stop));
        let interval = self.poll_interval;
        // Baseline is the state at subscription time; only changes after it
        // are reported.
        let mut last = detect_system_theme();

        thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                thread::sleep(interval);
                let probed = detect_system_theme();
                if probed != last {
                    last = probed;
                    if let Some(theme) = probed {
                        listener(theme);
                    }
                }
            }
        });
    }
}

impl Drop for DetectSignal {
    fn drop(&mut self) {
        self.stop_watcher();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::mpsc;

    #[test]
    #[serial]
    fn test_query_uses_the_overridable_detector() {
        set_mode_detector(|| Some(Theme::Dark));
        assert_eq!(DetectSignal::new().query(), Some(Theme::Dark));

        set_mode_detector(|| None);
        assert_eq!(DetectSignal::new().query(), None);

        set_mode_detector(os_mode_detector);
    }

    #[test]
    #[serial]
    fn test_watcher_reports_a_changed_detection() {
        set_mode_detector(|| Some(Theme::Light));

        let mut signal = DetectSignal::with_poll_interval(Duration::from_millis(10));
        let (tx, rx) = mpsc::channel();
        signal.subscribe(Box::new(move |theme| {
            let _ = tx.send(theme);
        }));

        // Let the watcher record its baseline before flipping the detector.
        thread::sleep(Duration::from_millis(100));
        set_mode_detector(|| Some(Theme::Dark));

        let reported = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(reported, Theme::Dark);

        set_mode_detector(os_mode_detector);
    }

    #[test]
    #[serial]
    fn test_dropping_the_signal_stops_the_watcher() {
        set_mode_detector(|| Some(Theme::Light));

        let mut signal = DetectSignal::with_poll_interval(Duration::from_millis(10));
        let (tx, rx) = mpsc::channel();
        signal.subscribe(Box::new(move |theme| {
            let _ = tx.send(theme);
        }));
        drop(signal);

        // Give the watcher time to observe the stop flag, then flip.
        thread::sleep(Duration::from_millis(100));
        set_mode_detector(|| Some(Theme::Dark));

        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());

        set_mode_detector(os_mode_detector);
    }
}
