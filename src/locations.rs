//! Region → city → latitude dataset.
//!
//! The on-disk format is a JSON object keyed by region code:
//!
//! ```json
//! { "PE": { "cidades": [ { "nome": "Recife", "latitude": -8.06 } ] } }
//! ```
//!
//! `cities` and `name` are accepted as aliases.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const FALLBACK_CITY: &str = "Recife";
pub const FALLBACK_LATITUDE: f64 = -8.06;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    pub latitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "cidades", alias = "cities", default)]
    pub cities: Vec<City>,
}

/// A resolved place handed to the calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub is_fallback: bool,
}

impl Location {
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_CITY.to_string(),
            latitude: FALLBACK_LATITUDE,
            is_fallback: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationDataset {
    regions: BTreeMap<String, Region>,
}

impl LocationDataset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let regions: BTreeMap<String, Region> = serde_json::from_str(json)?;
        Ok(Self { regions })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::LocationFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Like [`load`](Self::load), but a missing file yields an empty dataset.
    pub fn load_or_empty(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(Error::LocationFile { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self) -> Vec<&str> {
        self.regions.keys().map(String::as_str).collect()
    }

    pub fn cities(&self, region: &str) -> Result<Vec<&City>> {
        let region_data = self
            .regions
            .get(region)
            .ok_or_else(|| Error::UnknownRegion(region.to_string()))?;
        let mut cities: Vec<&City> = region_data.cities.iter().collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cities)
    }

    pub fn resolve(&self, region: &str, city: &str) -> Result<Location> {
        let found = self
            .cities(region)?
            .into_iter()
            .find(|c| c.name == city)
            .ok_or_else(|| Error::UnknownCity {
                region: region.to_string(),
                city: city.to_string(),
            })?;
        Ok(Location {
            name: found.name.clone(),
            latitude: found.latitude,
            is_fallback: false,
        })
    }

    /// Searches every region, in key order, for a city with this name.
    pub fn find_city(&self, city: &str) -> Result<Location> {
        self.regions
            .values()
            .flat_map(|r| r.cities.iter())
            .find(|c| c.name == city)
            .map(|c| Location {
                name: c.name.clone(),
                latitude: c.latitude,
                is_fallback: false,
            })
            .ok_or_else(|| Error::UnknownCity {
                region: "any region".to_string(),
                city: city.to_string(),
            })
    }

    /// First region and its alphabetically first city, mirroring an
    /// untouched pair of select boxes.
    pub fn first_location(&self) -> Option<Location> {
        let region = self.regions().into_iter().next()?;
        let city = self.cities(region).ok()?.into_iter().next()?;
        Some(Location {
            name: city.name.clone(),
            latitude: city.latitude,
            is_fallback: false,
        })
    }
}
