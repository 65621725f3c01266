use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Month;
use clap::{Parser, ValueEnum};

use shadow_sim::{HourGrid, Location, LocationDataset, Report, SimulationConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Sun position and structure shadow over a simulated day.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Location dataset (JSON, region -> cities)
    #[arg(long, default_value = "data/localidades.json", env = "SHADOW_SIM_LOCATIONS")]
    locations: PathBuf,
    /// Region key in the dataset; defaults to the first region
    #[arg(long)]
    region: Option<String>,
    /// City name; searched in every region when --region is omitted
    #[arg(long)]
    city: Option<String>,
    /// Latitude in decimal degrees, bypassing the dataset
    #[arg(long, allow_hyphen_values = true, value_parser = parse_latitude)]
    latitude: Option<f64>,

    /// Structure height in meters
    #[arg(long, default_value_t = shadow_sim::config::DEFAULT_HEIGHT, value_parser = parse_height)]
    height: f64,
    /// Month to analyse (name or number); the 21st is simulated
    #[arg(long, default_value = "June", value_parser = parse_month)]
    month: Month,
    /// Reference year used to turn the month into a day of year
    #[arg(long, default_value_t = shadow_sim::config::REFERENCE_YEAR)]
    year: i32,
    /// Simulated decimal hour (4.0 to 20.0)
    #[arg(long, default_value_t = shadow_sim::config::DEFAULT_HOUR, value_parser = parse_hour)]
    hour: f64,
    /// Sampling step for the day table, in hours
    #[arg(long, default_value_t = 0.25, value_parser = parse_step)]
    step: f64,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-90.0..=90.0).contains(&v) {
        return Err(format!("Latitude must be between -90 and 90, got {}", v));
    }
    Ok(v)
}

fn parse_height(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if v.is_nan() || v < 1.0 {
        return Err(format!("Height must be at least 1 meter, got {}", v));
    }
    Ok(v)
}

fn parse_hour(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(4.0..=20.0).contains(&v) {
        return Err(format!("Hour must be between 4 and 20, got {}", v));
    }
    Ok(v)
}

fn parse_step(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if v.is_nan() || v <= 0.0 || v > 16.0 {
        return Err(format!("Step must be positive and at most 16 hours, got {}", v));
    }
    Ok(v)
}

fn parse_month(s: &str) -> Result<Month, String> {
    if let Ok(n) = s.parse::<u8>() {
        return Month::try_from(n).map_err(|_| format!("Month must be between 1 and 12, got {}", n));
    }
    s.parse::<Month>().map_err(|_| format!("Unknown month: {}", s))
}

/// Dataset problems never abort the run: they are reported and the
/// fallback location is used instead.
fn resolve_location(path: &Path, region: Option<&str>, city: Option<&str>) -> Location {
    let dataset = match LocationDataset::load_or_empty(path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("warning: {e}; using default location");
            return Location::fallback();
        }
    };
    if dataset.is_empty() {
        eprintln!(
            "warning: location file '{}' not found or empty; using default location",
            path.display()
        );
        return Location::fallback();
    }

    let resolved = match (region, city) {
        (Some(r), Some(c)) => dataset.resolve(r, c).map(Some),
        (Some(r), None) => dataset.cities(r).map(|cities| {
            cities.first().map(|c| Location {
                name: c.name.clone(),
                latitude: c.latitude,
                is_fallback: false,
            })
        }),
        (None, Some(c)) => dataset.find_city(c).map(Some),
        (None, None) => Ok(dataset.first_location()),
    };
    match resolved {
        Ok(Some(loc)) => loc,
        Ok(None) => {
            eprintln!("warning: no cities in location data; using default location");
            Location::fallback()
        }
        Err(e) => {
            eprintln!("warning: {e}; using default location");
            Location::fallback()
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let location = match args.latitude {
        Some(latitude) => Location {
            name: format!("{latitude:.2}°"),
            latitude,
            is_fallback: false,
        },
        None => resolve_location(&args.locations, args.region.as_deref(), args.city.as_deref()),
    };

    let grid = HourGrid::new(4.0, 20.0, args.step).context("invalid sampling step")?;
    let config = SimulationConfig {
        latitude: location.latitude,
        height: args.height,
        month: args.month,
        year: args.year,
        hour: args.hour,
        grid,
    };
    config.validate().context("invalid simulation parameters")?;

    let report = Report::build(&config, location);
    match args.format {
        Format::Text => print!("{report}"),
        Format::Json => println!("{}", report.to_json().context("failed to serialize report")?),
    }
    Ok(())
}
