//! OPIS fuel-price CSV catalog loading.
//!
//! Parses the truckstop price export into `CatalogStation` records. Rows
//! repeat per fuel product, so records are deduplicated by OPIS id (first
//! occurrence wins). The export carries no coordinates; they can be filled
//! in from a city lookup with [`assign_city_locations`].

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::traits::Station;

#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Csv(csv::Error),
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::Csv(err)
    }
}

/// One truckstop from the OPIS export.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogStation {
    #[serde(rename = "OPIS Truckstop ID")]
    pub opis_id: u64,
    #[serde(rename = "Truckstop Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Retail Price")]
    pub retail_price: f64,
    #[serde(rename = "Latitude", default)]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", default)]
    pub longitude: Option<f64>,
}

impl Station for CatalogStation {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.opis_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }

    fn price_per_unit(&self) -> f64 {
        self.retail_price
    }

    fn location(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

/// Reads stations from an OPIS price CSV.
///
/// Rows that fail to parse are skipped with a warning rather than failing
/// the whole load; duplicate OPIS ids keep the first row seen.
pub fn load_stations<R: io::Read>(reader: R) -> Result<Vec<CatalogStation>, CatalogError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut stations: Vec<CatalogStation> = Vec::new();
    let mut seen: HashSet<u64> = HashSet::new();
    let mut skipped = 0usize;

    for record in csv_reader.deserialize::<CatalogStation>() {
        match record {
            Ok(station) => {
                if seen.insert(station.opis_id) {
                    stations.push(station);
                }
            }
            Err(err) => {
                skipped += 1;
                warn!(%err, "skipping malformed catalog row");
            }
        }
    }

    debug!(
        loaded = stations.len(),
        skipped, "loaded station catalog"
    );

    Ok(stations)
}

/// Reads stations from a CSV file on disk.
pub fn load_stations_from_path(path: impl AsRef<Path>) -> Result<Vec<CatalogStation>, CatalogError> {
    let file = File::open(path)?;
    load_stations(file)
}

/// Fills in missing station coordinates from a (city, state) lookup, the
/// way the OPIS export has to be geocoded: city names are matched
/// case-insensitively. Returns how many stations remain without a location.
pub fn assign_city_locations(
    stations: &mut [CatalogStation],
    lookup: &HashMap<(String, String), (f64, f64)>,
) -> usize {
    let mut missing = 0usize;

    for station in stations.iter_mut() {
        if station.location().is_some() {
            continue;
        }
        let key = (station.city.to_lowercase(), station.state.clone());
        match lookup.get(&key) {
            Some(&(lat, lng)) => {
                station.latitude = Some(lat);
                station.longitude = Some(lng);
            }
            None => missing += 1,
        }
    }

    missing
}
