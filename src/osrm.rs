//! OSRM HTTP adapter for road routes.

use serde::Deserialize;

use crate::route::RoutePath;
use crate::traits::{RouteProvider, RouteSummary};

const METERS_PER_MILE: f64 = 1609.344;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug)]
pub enum RoutingError {
    Http(reqwest::Error),
    /// OSRM answered with a non-Ok code or an empty route list.
    NoRoute(String),
}

impl From<reqwest::Error> for RoutingError {
    fn from(err: reqwest::Error) -> Self {
        RoutingError::Http(err)
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl RouteProvider for OsrmClient {
    type Error = RoutingError;

    fn route_between(&self, from: (f64, f64), to: (f64, f64)) -> Result<RouteSummary, RoutingError> {
        // OSRM takes lng,lat pairs
        let url = format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=geojson",
            self.config.base_url, self.config.profile, from.1, from.0, to.1, to.0
        );

        let body: OsrmRouteResponse = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json()?;

        if body.code != "Ok" {
            return Err(RoutingError::NoRoute(body.code));
        }

        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::NoRoute("empty route list".to_string()))?;

        Ok(RouteSummary {
            path: route.geometry.into_path(),
            distance_miles: route.distance / METERS_PER_MILE,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Driven distance in meters.
    distance: f64,
    geometry: OsrmGeometry,
}

/// GeoJSON LineString: coordinates are [lng, lat].
#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

impl OsrmGeometry {
    fn into_path(self) -> RoutePath {
        RoutePath::new(
            self.coordinates
                .into_iter()
                .map(|[lng, lat]| (lat, lng))
                .collect(),
        )
    }
}
