//! OS brightness detection.
//!
//! Queries the OS light/dark preference through the `dark-light` crate.
//! The detector is a process-wide function pointer so tests (and embedders
//! with their own detection) can override it:
//!
//! ```rust
//! use mapshade::{set_brightness_detector, Brightness};
//!
//! // Force dark for a test
//! set_brightness_detector(|| Brightness::Dark);
//!
//! // Tests should restore their changes afterwards.
//! ```
//!
//! Tests that touch the detector must run serially — it is shared state.

use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::context::Brightness;

type BrightnessDetector = fn() -> Brightness;

static DETECTOR: Lazy<Mutex<BrightnessDetector>> = Lazy::new(|| Mutex::new(os_detector));

/// Overrides the detector used for the OS light/dark preference.
pub fn set_brightness_detector(detector: BrightnessDetector) {
    let mut guard = DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects the OS light/dark preference.
///
/// Returns whatever the current detector reports; by default that is the
/// OS setting, with an unspecified preference mapping to
/// [`Brightness::Light`].
pub fn detect_brightness() -> Brightness {
    let detector = DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_detector() -> Brightness {
    // Unspecified preference or a detection failure falls back to light,
    // the application default.
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Brightness::Dark,
        Ok(_) | Err(_) => Brightness::Light,
    }
}
