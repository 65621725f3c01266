//! Error types for input validation and the location dataset.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid structure height {value} m (must be positive)")]
    InvalidHeight { value: f64 },

    #[error("invalid day of year {value} (must be between 1 and 366)")]
    InvalidDayOfYear { value: i32 },

    #[error("invalid hour {value} (must be a finite number)")]
    InvalidHour { value: f64 },

    #[error("invalid hour grid {start}..={end} step {step}")]
    InvalidHourGrid { start: f64, end: f64, step: f64 },

    #[error("failed to read location file {}", path.display())]
    LocationFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed location data")]
    LocationParse(#[from] serde_json::Error),

    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    #[error("unknown city '{city}' in region '{region}'")]
    UnknownCity { region: String, city: String },
}
