use chrono::Month;

use crate::angles;
use crate::error::{Error, Result};
use crate::types::{GeoPosition, HourGrid, TimeSpec};

pub const DEFAULT_HEIGHT: f64 = 30.0;
pub const DEFAULT_HOUR: f64 = 12.0;
pub const REFERENCE_YEAR: i32 = 2026;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub latitude: f64,
    pub height: f64,
    pub month: Month,
    pub year: i32,
    pub hour: f64,
    pub grid: HourGrid,
}

impl SimulationConfig {
    pub fn new(latitude: f64, height: f64, month: Month, hour: f64) -> Self {
        Self {
            latitude,
            height,
            month,
            hour,
            ..Self::default()
        }
    }

    pub fn day_of_year(&self) -> i32 {
        angles::representative_day_of_year(self.year, self.month)
    }

    pub fn validate(&self) -> Result<()> {
        self.position()?;
        self.time()?;
        HourGrid::new(self.grid.start_hour, self.grid.end_hour, self.grid.step_hours)?;
        if !self.hour.is_finite() {
            return Err(Error::InvalidHour { value: self.hour });
        }
        Ok(())
    }

    pub fn position(&self) -> Result<GeoPosition> {
        GeoPosition::new(self.latitude, self.height)
    }

    pub fn time(&self) -> Result<TimeSpec> {
        TimeSpec::new(self.day_of_year(), self.hour)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            latitude: crate::locations::FALLBACK_LATITUDE,
            height: DEFAULT_HEIGHT,
            month: Month::June,
            year: REFERENCE_YEAR,
            hour: DEFAULT_HOUR,
            grid: HourGrid::default(),
        }
    }
}
