use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub height: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, height: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude { value: latitude });
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::InvalidHeight { value: height });
        }
        Ok(Self { latitude, height })
    }
}

/// Calendar day and decimal hour. The hour is deliberately left
/// unnormalized; values past 24 or below 0 are passed straight through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSpec {
    pub day_of_year: i32,
    pub hour: f64,
}

impl TimeSpec {
    pub fn new(day_of_year: i32, hour: f64) -> Result<Self> {
        if !(1..=366).contains(&day_of_year) {
            return Err(Error::InvalidDayOfYear { value: day_of_year });
        }
        Ok(Self { day_of_year, hour })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub length: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionResult {
    pub solar: SolarPosition,
    pub shadow: Shadow,
}

impl PositionResult {
    /// `(solar_azimuth, shadow_azimuth, shadow_length, solar_altitude)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (
            self.solar.azimuth,
            self.shadow.azimuth,
            self.shadow.length,
            self.solar.altitude,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleEntry {
    pub hour: f64,
    pub label: String,
    pub shadow_length: f64,
    pub shadow_azimuth: f64,
    pub solar_azimuth: f64,
    pub solar_altitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySample {
    pub latitude: f64,
    pub height: f64,
    pub day_of_year: i32,
    pub entries: Vec<SampleEntry>,
}

impl DailySample {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn shortest_shadow(&self) -> Option<&SampleEntry> {
        self.entries
            .iter()
            .min_by(|a, b| a.shadow_length.total_cmp(&b.shadow_length))
    }

    /// Sun path as `(solar_azimuth, solar_altitude)` pairs in hour order.
    pub fn trajectory(&self) -> Vec<(f64, f64)> {
        self.entries
            .iter()
            .map(|e| (e.solar_azimuth, e.solar_altitude))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourGrid {
    pub start_hour: f64,
    pub end_hour: f64,
    pub step_hours: f64,
}

impl HourGrid {
    pub fn new(start_hour: f64, end_hour: f64, step_hours: f64) -> Result<Self> {
        let finite = start_hour.is_finite() && end_hour.is_finite() && step_hours.is_finite();
        if !finite || step_hours <= 0.0 || end_hour < start_hour {
            return Err(Error::InvalidHourGrid {
                start: start_hour,
                end: end_hour,
                step: step_hours,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
            step_hours,
        })
    }

    /// Zero for a grid that `new` would reject.
    pub fn sample_count(&self) -> usize {
        let span = self.end_hour - self.start_hour;
        if !span.is_finite() || span < 0.0 || !self.step_hours.is_finite() || self.step_hours <= 0.0 {
            return 0;
        }
        // Tolerance keeps the endpoint when span / step lands a hair below an integer.
        ((span / self.step_hours + 1e-9).floor() as usize).saturating_add(1)
    }

    pub fn hours(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.sample_count()).map(move |i| self.start_hour + i as f64 * self.step_hours)
    }
}

impl Default for HourGrid {
    fn default() -> Self {
        Self {
            start_hour: 4.0,
            end_hour: 20.0,
            step_hours: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DaylightWindow {
    Daylight { sunrise: f64, sunset: f64 },
    PolarDay,
    PolarNight,
}

impl DaylightWindow {
    pub fn day_length(&self) -> f64 {
        match *self {
            DaylightWindow::Daylight { sunrise, sunset } => sunset - sunrise,
            DaylightWindow::PolarDay => 24.0,
            DaylightWindow::PolarNight => 0.0,
        }
    }
}
