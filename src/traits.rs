//! Core domain traits for the fuel route planner.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps should
//! implement them for their own data models.

use std::hash::Hash;

use crate::route::RoutePath;

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A fuel station that can be considered as a refueling stop.
pub trait Station {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    fn name(&self) -> &str;

    fn city(&self) -> &str;

    fn state(&self) -> &str;

    /// Price per fuel unit (e.g. per gallon). Must be > 0.
    fn price_per_unit(&self) -> f64;

    /// Location coordinates (lat, lng). Stations without a location are
    /// never projected onto a route.
    fn location(&self) -> Option<(f64, f64)>;
}

/// Resolves a free-text location query into coordinates.
pub trait Geocoder {
    type Error;

    fn geocode(&self, query: &str) -> Result<(f64, f64), Self::Error>;
}

/// A road route between two coordinates: geometry plus driven distance.
#[derive(Debug, Clone)]
pub struct RouteSummary {
    pub path: RoutePath,
    pub distance_miles: f64,
}

/// Provides a driving route between two (lat, lng) points.
pub trait RouteProvider {
    type Error;

    fn route_between(&self, from: (f64, f64), to: (f64, f64)) -> Result<RouteSummary, Self::Error>;
}
