use crate::angles;
use crate::types::{DailySample, DaylightWindow, HourGrid, PositionResult, SampleEntry};

/// Shadows at least this many times the structure height are left out of
/// the day sample.
pub const ASTRONOMIC_SHADOW_FACTOR: f64 = 1000.0;

/// `HH:MM` label for a decimal hour. Minutes are truncated, not rounded.
pub fn format_hour_label(hour: f64) -> String {
    let h = hour.trunc() as i32;
    let m = (hour.rem_euclid(1.0) * 60.0).trunc() as i32;
    format!("{:02}:{:02}", h, m)
}

pub fn within_display_bound(result: &PositionResult, height: f64) -> bool {
    result.shadow.length < height * ASTRONOMIC_SHADOW_FACTOR
}

fn to_entry(hour: f64, result: &PositionResult) -> SampleEntry {
    SampleEntry {
        hour,
        label: format_hour_label(hour),
        shadow_length: result.shadow.length,
        shadow_azimuth: result.shadow.azimuth,
        solar_azimuth: result.solar.azimuth,
        solar_altitude: result.solar.altitude,
    }
}

/// Runs `calc` over every hour and keeps the displayable results, in the
/// order the hours were given.
pub fn sample_with<I, F>(height: f64, hours: I, calc: F) -> Vec<SampleEntry>
where
    I: IntoIterator<Item = f64>,
    F: Fn(f64) -> Option<PositionResult>,
{
    hours
        .into_iter()
        .filter_map(|hour| {
            let result = calc(hour)?;
            within_display_bound(&result, height).then(|| to_entry(hour, &result))
        })
        .collect()
}

pub fn sample_hours<I>(latitude: f64, height: f64, day_of_year: i32, hours: I) -> DailySample
where
    I: IntoIterator<Item = f64>,
{
    let entries = sample_with(height, hours, |hour| {
        angles::compute(latitude, height, day_of_year, hour)
    });
    DailySample {
        latitude,
        height,
        day_of_year,
        entries,
    }
}

pub fn sample_day(latitude: f64, height: f64, day_of_year: i32, grid: &HourGrid) -> DailySample {
    sample_hours(latitude, height, day_of_year, grid.hours())
}

/// Geometric sunrise/sunset in decimal solar hours, from the same
/// declination model the calculator uses.
pub fn daylight_window(latitude: f64, day_of_year: i32) -> DaylightWindow {
    let lat_rad = angles::deg_to_rad(latitude);
    let decl_rad = angles::deg_to_rad(angles::solar_declination(day_of_year));
    let cos_h = -lat_rad.tan() * decl_rad.tan();

    if cos_h >= 1.0 {
        DaylightWindow::PolarNight
    } else if cos_h <= -1.0 {
        DaylightWindow::PolarDay
    } else {
        let half_day = angles::rad_to_deg(cos_h.acos()) / angles::DEGREES_PER_HOUR;
        DaylightWindow::Daylight {
            sunrise: 12.0 - half_day,
            sunset: 12.0 + half_day,
        }
    }
}
