//! Report and chart series assembled from calculator output.
//!
//! Nothing here draws anything: the polar series carry the numbers a
//! plotting frontend needs, with radius `90 - altitude` for the sun path
//! and metres for the shadow ray, angles as compass bearings.

use std::fmt;

use chrono::Utc;
use serde::Serialize;

use crate::angles;
use crate::config::SimulationConfig;
use crate::locations::Location;
use crate::sampler::{self, format_hour_label};
use crate::types::{DailySample, DaylightWindow, PositionResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarPoint {
    pub r: f64,
    pub theta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarChart {
    pub trajectory: Vec<PolarPoint>,
    pub shadow_ray: Option<[PolarPoint; 2]>,
    pub sun: Option<PolarPoint>,
}

impl PolarChart {
    pub fn build(current: Option<&PositionResult>, sample: &DailySample) -> Self {
        let trajectory = sample
            .entries
            .iter()
            .map(|e| PolarPoint {
                r: 90.0 - e.solar_altitude,
                theta: e.solar_azimuth,
            })
            .collect();
        let shadow_ray = current.map(|p| {
            [
                PolarPoint {
                    r: 0.0,
                    theta: p.shadow.azimuth,
                },
                PolarPoint {
                    r: p.shadow.length,
                    theta: p.shadow.azimuth,
                },
            ]
        });
        let sun = current.map(|p| PolarPoint {
            r: 90.0 - p.solar.altitude,
            theta: p.solar.azimuth,
        });
        Self {
            trajectory,
            shadow_ray,
            sun,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub location: Location,
    pub month: String,
    pub day_of_year: i32,
    pub height: f64,
    pub hour: f64,
    pub hour_label: String,
    pub current: Option<PositionResult>,
    pub daylight: DaylightWindow,
    pub sample: DailySample,
    pub chart: PolarChart,
}

impl Report {
    pub fn build(config: &SimulationConfig, location: Location) -> Self {
        let day_of_year = config.day_of_year();
        let current = angles::compute(config.latitude, config.height, day_of_year, config.hour);
        let sample = sampler::sample_day(config.latitude, config.height, day_of_year, &config.grid);
        let chart = PolarChart::build(current.as_ref(), &sample);

        Self {
            generated_at: Utc::now().to_rfc3339(),
            daylight: sampler::daylight_window(config.latitude, day_of_year),
            location,
            month: config.month.name().to_string(),
            day_of_year,
            height: config.height,
            hour: config.hour,
            hour_label: format_hour_label(config.hour),
            current,
            sample,
            chart,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Solar Monitor: {} ===", self.location.name)?;
        writeln!(
            f,
            "Latitude: {:.2}°  Structure height: {:.1} m",
            self.sample.latitude, self.height
        )?;
        writeln!(
            f,
            "Simulating day {} ({} 21) at {}",
            self.day_of_year, self.month, self.hour_label
        )?;
        match self.daylight {
            DaylightWindow::Daylight { sunrise, sunset } => writeln!(
                f,
                "Daylight: {} - {}",
                format_hour_label(sunrise),
                format_hour_label(sunset)
            )?,
            DaylightWindow::PolarDay => writeln!(f, "Daylight: polar day")?,
            DaylightWindow::PolarNight => writeln!(f, "Daylight: polar night")?,
        }
        writeln!(f)?;

        match &self.current {
            Some(p) => {
                writeln!(f, "Shadow length: {:.2} m", p.shadow.length)?;
                writeln!(f, "Shadow orientation: {:.1}°", p.shadow.azimuth)?;
                writeln!(
                    f,
                    "Sun: azimuth {:.1}°, altitude {:.1}°",
                    p.solar.azimuth, p.solar.altitude
                )?;
            }
            None => writeln!(f, "At {} the sun is below the horizon.", self.hour_label)?,
        }
        writeln!(f)?;

        writeln!(f, "--- Projections ({}) ---", self.month)?;
        if self.sample.is_empty() {
            return writeln!(f, "No solar data available for this period.");
        }
        writeln!(f, "{:<6} {:>12} {:>14}", "Time", "Shadow (m)", "Direction (°)")?;
        for e in &self.sample.entries {
            writeln!(
                f,
                "{:<6} {:>12.2} {:>14.1}",
                e.label, e.shadow_length, e.shadow_azimuth
            )?;
        }
        Ok(())
    }
}
