//! Route geometry and distance parameterization.
//!
//! A raw routing-service path can carry thousands of points. The planner
//! only needs a 1-D distance axis: "how many miles from the start is this
//! point". `parameterize` downsamples the path and pairs each kept point
//! with its cumulative great-circle mileage.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geo::great_circle_miles;

/// Default cap on the number of samples kept from a raw path.
pub const DEFAULT_MAX_SAMPLES: usize = 1000;

/// A route geometry as decoded coordinates.
///
/// Stores (latitude, longitude) points directly for internal processing.
/// Encoding to/from compact polyline or GeoJSON formats should happen at
/// API boundaries, not within the planner core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    points: Vec<(f64, f64)>,
}

impl RoutePath {
    /// Creates a new RoutePath from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple, ordered start to finish.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the path and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

/// Axis-aligned bounding box over (lat, lng) degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Expands the box by `margin` degrees on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min_lat: self.min_lat - margin,
            max_lat: self.max_lat + margin,
            min_lng: self.min_lng - margin,
            max_lng: self.max_lng + margin,
        }
    }

    pub fn contains(&self, point: (f64, f64)) -> bool {
        let (lat, lng) = point;
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }

    fn of(points: &[(f64, f64)]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = Self {
            min_lat: first.0,
            max_lat: first.0,
            min_lng: first.1,
            max_lng: first.1,
        };
        for &(lat, lng) in rest {
            bbox.min_lat = bbox.min_lat.min(lat);
            bbox.max_lat = bbox.max_lat.max(lat);
            bbox.min_lng = bbox.min_lng.min(lng);
            bbox.max_lng = bbox.max_lng.max(lng);
        }
        Some(bbox)
    }
}

/// One retained path point with its mileage from the trip start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSample {
    pub location: (f64, f64),
    pub miles_from_start: f64,
}

/// A path reduced to a distance axis: sampled points paired with
/// non-decreasing cumulative miles starting at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterizedRoute {
    samples: Vec<RouteSample>,
    /// Bounding box of the *full* path, not just the kept samples.
    bbox: Option<BoundingBox>,
}

impl ParameterizedRoute {
    pub fn samples(&self) -> &[RouteSample] {
        &self.samples
    }

    /// Bounding box of the original path; `None` for an empty path.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bbox
    }

    /// Authoritative total route length in miles.
    pub fn total_miles(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.miles_from_start)
    }
}

/// Downsamples `path` to at most roughly `max_samples` points and computes
/// cumulative great-circle mileage along the kept points.
///
/// A path of 0 or 1 points parameterizes to a total of 0 miles; the planner
/// treats that as "no travel needed".
pub fn parameterize(path: &RoutePath, max_samples: usize) -> ParameterizedRoute {
    let points = path.points();
    let bbox = BoundingBox::of(points);

    let step = (points.len() / max_samples.max(1)).max(1);
    let mut samples: Vec<RouteSample> = Vec::with_capacity(points.len() / step + 1);
    let mut cumulative = 0.0;

    for &point in points.iter().step_by(step) {
        if let Some(prev) = samples.last() {
            cumulative += great_circle_miles(prev.location, point);
        }
        samples.push(RouteSample {
            location: point,
            miles_from_start: cumulative,
        });
    }

    debug!(
        raw_points = points.len(),
        kept = samples.len(),
        total_miles = cumulative,
        "parameterized route"
    );

    ParameterizedRoute { samples, bbox }
}
