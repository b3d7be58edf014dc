//! Nominatim HTTP adapter for geocoding free-text locations.

use serde::Deserialize;

use crate::traits::Geocoder;

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying User-Agent.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "fuel-route-planner/0.2".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug)]
pub enum GeocodeError {
    Http(reqwest::Error),
    /// The service answered but returned no match for the query.
    NoMatch(String),
    /// The service returned coordinates that failed to parse as floats.
    BadCoordinates(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Http(err)
    }
}

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimGeocoder {
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for NominatimGeocoder {
    type Error = GeocodeError;

    fn geocode(&self, query: &str) -> Result<(f64, f64), GeocodeError> {
        let url = format!("{}/search", self.config.base_url);

        let places: Vec<NominatimPlace> = self
            .client
            .get(url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .send()?
            .error_for_status()?
            .json()?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NoMatch(query.to_string()))?;

        place.coords().ok_or_else(|| GeocodeError::BadCoordinates(query.to_string()))
    }
}

/// Nominatim returns lat/lon as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimPlace {
    fn coords(&self) -> Option<(f64, f64)> {
        let lat = self.lat.parse().ok()?;
        let lon = self.lon.parse().ok()?;
        Some((lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let body = r#"[{"place_id": 1, "lat": "40.7127281", "lon": "-74.0060152", "display_name": "New York"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(body).unwrap();
        let coords = places[0].coords().unwrap();
        assert!((coords.0 - 40.7127281).abs() < 1e-9);
        assert!((coords.1 - -74.0060152).abs() < 1e-9);
    }

    #[test]
    fn test_bad_coordinates_rejected() {
        let place = NominatimPlace {
            lat: "not-a-number".to_string(),
            lon: "-74.0".to_string(),
        };
        assert!(place.coords().is_none());
    }
}
