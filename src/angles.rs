use chrono::Month;

use crate::types::{GeoPosition, PositionResult, Shadow, SolarPosition, TimeSpec};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
/// Day on which the Cooper declination crosses zero (spring equinox).
pub const EQUINOX_DAY_OFFSET: i32 = 81;
/// sin(altitude) at or below this is treated as "sun on the horizon".
pub const HORIZON_SINE_THRESHOLD: f64 = 0.001;
pub const REPRESENTATIVE_DAY_OF_MONTH: u32 = 21;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let dim = days_in_months(year);
    let sum: u32 = dim[..(month - 1) as usize].iter().sum();
    (sum + day) as i32
}

/// Day-of-year used to stand in for a whole month: the 21st, close to the
/// solstices and equinoxes.
pub fn representative_day_of_year(year: i32, month: Month) -> i32 {
    day_of_year(year, month.number_from_month(), REPRESENTATIVE_DAY_OF_MONTH)
}

/// Cooper (1969) single-harmonic declination, in degrees.
pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 / 365.0 * (n - EQUINOX_DAY_OFFSET) as f64).sin()
}

pub fn hour_angle(hour: f64) -> f64 {
    (hour - 12.0) * DEGREES_PER_HOUR
}

pub fn sin_solar_altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos()
}

pub fn shadow_length(height: f64, altitude_rad: f64) -> f64 {
    height / altitude_rad.tan()
}

/// Compass bearing of the sun (0° = North, clockwise).
///
/// The acos argument is clamped to [-1, 1] first: at solar noon it is
/// analytically ±1 and rounding can push it just outside the domain.
/// acos cannot tell morning from afternoon, so afternoon hour angles are
/// mirrored to the western half.
pub fn solar_azimuth(latitude: f64, declination: f64, altitude_rad: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let arg = (dec_rad.sin() - lat_rad.sin() * altitude_rad.sin())
        / (lat_rad.cos() * altitude_rad.cos());
    let gamma = rad_to_deg(arg.clamp(-1.0, 1.0).acos());
    if hour_angle > 0.0 {
        360.0 - gamma
    } else {
        gamma
    }
}

pub fn shadow_azimuth(solar_azimuth: f64) -> f64 {
    normalize_angle(solar_azimuth + 180.0)
}

/// Sun and shadow geometry for one instant, or `None` when the sun is at
/// or below the horizon.
pub fn compute(latitude: f64, height: f64, day_of_year: i32, hour: f64) -> Option<PositionResult> {
    let decl = solar_declination(day_of_year);
    let ha = hour_angle(hour);
    let sin_alt = sin_solar_altitude(latitude, decl, ha);
    if sin_alt <= HORIZON_SINE_THRESHOLD {
        return None;
    }

    // Sun at the zenith can round sin(altitude) past 1.
    let alt_rad = sin_alt.min(1.0).asin();
    let length = shadow_length(height, alt_rad);
    let azim = solar_azimuth(latitude, decl, alt_rad, ha);

    Some(PositionResult {
        solar: SolarPosition {
            azimuth: azim,
            altitude: rad_to_deg(alt_rad),
        },
        shadow: Shadow {
            length,
            azimuth: shadow_azimuth(azim),
        },
    })
}

pub fn compute_at(position: &GeoPosition, time: &TimeSpec) -> Option<PositionResult> {
    compute(position.latitude, position.height, time.day_of_year, time.hour)
}
