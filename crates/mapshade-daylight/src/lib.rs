//! Solar day/night classification.
//!
//! This crate answers one question: for a given instant and geographic
//! position, is the sun up? It is the computational core behind the
//! automatic ("auto") map theme, which switches between light and dark
//! styling as the day goes by.
//!
//! The computation is pure trigonometry over a timestamp and coordinates;
//! there is no I/O, no caching, and no timezone handling — everything works
//! in UTC and the longitude term accounts for local solar time.
//!
//! # Example
//!
//! ```rust
//! use mapshade_daylight::is_daytime;
//!
//! // Noon UTC on the June solstice, on the equator at the prime meridian.
//! let daytime = is_daytime(1_718_971_200, 0.0, 0.0).unwrap();
//! assert!(daytime);
//!
//! // Same place, twelve hours later.
//! let nighttime = is_daytime(1_718_971_200 + 12 * 3600, 0.0, 0.0).unwrap();
//! assert!(!nighttime);
//! ```
//!
//! # Polar regions
//!
//! Above the polar circles the sun can stay up (or down) for the whole day.
//! No special casing is needed: the hour-angle term simply never crosses
//! the day/night boundary, so [`is_daytime`] reports polar day and polar
//! night correctly.

mod solar;

pub use solar::{is_daytime, solar_elevation, SUNRISE_ELEVATION_DEG};

/// Error type for daylight computations.
///
/// Coordinates are the only validated input; timestamps are unrestricted
/// (the solar approximation degrades gracefully far from the present).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DaylightError {
    #[error("latitude out of range: {0} (expected -90 to 90)")]
    LatitudeOutOfRange(f64),

    #[error("longitude out of range: {0} (expected -180 to 180)")]
    LongitudeOutOfRange(f64),
}
