pub mod angles;
pub mod config;
pub mod error;
pub mod locations;
pub mod report;
pub mod sampler;
pub mod types;

pub use angles::{
    compute, compute_at, day_of_year, deg_to_rad, hour_angle, normalize_angle, rad_to_deg,
    representative_day_of_year, shadow_azimuth, shadow_length, sin_solar_altitude,
    solar_azimuth, solar_declination, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
    HORIZON_SINE_THRESHOLD,
};

pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use locations::{City, Location, LocationDataset, Region};
pub use report::{PolarChart, PolarPoint, Report};

pub use sampler::{
    daylight_window, format_hour_label, sample_day, sample_hours, sample_with,
    within_display_bound, ASTRONOMIC_SHADOW_FACTOR,
};

pub use types::{
    DailySample, DaylightWindow, GeoPosition, HourGrid, PositionResult, SampleEntry, Shadow,
    SolarPosition, TimeSpec,
};
