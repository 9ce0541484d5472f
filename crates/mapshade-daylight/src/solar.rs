//! Solar position math.
//!
//! Uses the NOAA low-accuracy solar equations: a Fourier series for the
//! declination and the equation of time, then the hour angle gives the
//! sun's zenith for a given place and instant. Accuracy is within a couple
//! of minutes of the published sunrise/sunset tables, which is far more
//! than theme switching needs.

use std::f64::consts::PI;

use crate::DaylightError;

/// Solar elevation treated as the day/night boundary, in degrees.
///
/// This is the conventional sunrise/sunset definition: the sun's center at
/// 0.833° below the horizon (0.567° of atmospheric refraction plus the
/// solar semi-diameter of 0.267°).
pub const SUNRISE_ELEVATION_DEG: f64 = -0.833;

const SECONDS_PER_DAY: i64 = 86_400;

/// Returns `true` when the sun is above the sunrise/sunset horizon at the
/// given position.
///
/// `unix_ts` is seconds since the Unix epoch (UTC). Latitude is in degrees
/// north, longitude in degrees east.
///
/// # Errors
///
/// Returns [`DaylightError`] when either coordinate is out of range
/// (including NaN).
pub fn is_daytime(unix_ts: i64, lat: f64, lon: f64) -> Result<bool, DaylightError> {
    Ok(solar_elevation(unix_ts, lat, lon)? > SUNRISE_ELEVATION_DEG)
}

/// Returns the sun's elevation above the horizon in degrees, in the range
/// -90 to 90.
///
/// # Errors
///
/// Returns [`DaylightError`] when either coordinate is out of range.
pub fn solar_elevation(unix_ts: i64, lat: f64, lon: f64) -> Result<f64, DaylightError> {
    validate_coordinates(lat, lon)?;

    let day_seconds = unix_ts.rem_euclid(SECONDS_PER_DAY) as f64;

    // NOAA "fractional year", in radians: position of the date within the
    // tropical year, with an intra-day correction.
    let gamma = 2.0 * PI / 365.0
        * (day_of_year(unix_ts) as f64 - 1.0 + (day_seconds / 3600.0 - 12.0) / 24.0);

    // Solar declination, radians.
    let decl = 0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin();

    // Equation of time, minutes.
    let eqtime = 229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin());

    // True solar time in minutes; each degree of longitude shifts solar
    // noon by four minutes.
    let true_solar_minutes = day_seconds / 60.0 + eqtime + 4.0 * lon;
    let hour_angle = (true_solar_minutes / 4.0 - 180.0).to_radians();

    let lat_rad = lat.to_radians();
    let cos_zenith =
        lat_rad.sin() * decl.sin() + lat_rad.cos() * decl.cos() * hour_angle.cos();

    // Clamp against rounding drift at the poles before acos.
    let zenith = cos_zenith.clamp(-1.0, 1.0).acos();
    Ok(90.0 - zenith.to_degrees())
}

fn validate_coordinates(lat: f64, lon: f64) -> Result<(), DaylightError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(DaylightError::LatitudeOutOfRange(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(DaylightError::LongitudeOutOfRange(lon));
    }
    Ok(())
}

/// Ordinal day of the year (1-366) for a Unix timestamp, in UTC.
fn day_of_year(unix_ts: i64) -> u32 {
    let days = unix_ts.div_euclid(SECONDS_PER_DAY);
    let (year, month, day) = civil_from_days(days);

    const CUMULATIVE: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
    let mut ordinal = CUMULATIVE[(month - 1) as usize] + day;
    if month > 2 && is_leap_year(year) {
        ordinal += 1;
    }
    ordinal
}

/// Converts days since the Unix epoch to a (year, month, day) civil date.
///
/// Howard Hinnant's `civil_from_days` algorithm, valid for the full i64
/// range we care about.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    if month <= 2 {
        (year + 1, month, day)
    } else {
        (year, month, day)
    }
}

fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
