//! Test fixtures for fuel-route-planner.
//!
//! Provides a station builder with sensible defaults plus synthetic
//! interstate-style route geometry for pipeline tests.

use fuel_route_planner::projector::ProjectedStation;
use fuel_route_planner::route::RoutePath;
use fuel_route_planner::traits::Station;
use serde::Serialize;

/// Miles per degree of latitude along a meridian.
pub const MILES_PER_LAT_DEGREE: f64 = 69.09;

#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize)]
pub struct StationId(pub String);

impl StationId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Builder for test stations with sensible defaults.
#[derive(Clone, Debug)]
pub struct TestStation {
    id: StationId,
    name: String,
    city: String,
    state: String,
    price: f64,
    location: Option<(f64, f64)>,
}

impl TestStation {
    pub fn new(id: &str) -> Self {
        Self {
            id: StationId::new(id),
            name: format!("Truckstop {}", id),
            city: "Las Vegas".to_string(),
            state: "NV".to_string(),
            price: 3.0,
            location: Some((36.0, -115.0)),
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.location = Some((lat, lng));
        self
    }

    pub fn without_location(mut self) -> Self {
        self.location = None;
        self
    }
}

impl Station for TestStation {
    type Id = StationId;

    fn id(&self) -> &StationId {
        &self.id
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
        self.price
    }

    fn location(&self) -> Option<(f64, f64)> {
        self.location
    }
}

/// Pins a station at an exact mileage, bypassing geometry. Lets scenario
/// tests assert exact fuel arithmetic.
pub fn at_mile(station: &TestStation, miles: f64) -> ProjectedStation<'_, TestStation> {
    ProjectedStation {
        station,
        distance_from_start: miles,
        distance_from_route: 0.0,
    }
}

/// A straight northbound path along the -115 meridian starting at 36.0
/// degrees, roughly `total_miles` long, with a point every ~0.7 miles.
pub fn northbound_path(total_miles: f64) -> RoutePath {
    let degrees = total_miles / MILES_PER_LAT_DEGREE;
    let steps = (degrees / 0.01).ceil() as usize;
    RoutePath::new(
        (0..=steps)
            .map(|i| (36.0 + i as f64 * 0.01, -115.0))
            .collect(),
    )
}

/// Latitude of the point `miles` up the northbound path.
pub fn lat_at_mile(miles: f64) -> f64 {
    36.0 + miles / MILES_PER_LAT_DEGREE
}
