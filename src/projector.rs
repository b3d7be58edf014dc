//! Station projection onto a parameterized route.
//!
//! Assigns each candidate station a position along the route's distance
//! axis by nearest-sample matching. This is a heuristic substitute for true
//! map-matching: a station very close to the route but geometrically
//! distant along a curling path can be missed, which is accepted.

use rayon::prelude::*;
use tracing::debug;

use crate::geo::great_circle_miles;
use crate::route::ParameterizedRoute;
use crate::traits::Station;

/// Tunables for the projection filters.
#[derive(Debug, Clone)]
pub struct ProjectorOptions {
    /// Maximum off-route distance for a station to count as "on route".
    pub corridor_radius_miles: f64,
    /// Margin added to the path bounding box for the coarse reject.
    pub bbox_margin_degrees: f64,
    /// Per-sample angular short-circuit: samples further than this from the
    /// station on either axis are skipped without an exact distance.
    pub angular_filter_degrees: f64,
}

impl Default for ProjectorOptions {
    fn default() -> Self {
        Self {
            corridor_radius_miles: 10.0,
            bbox_margin_degrees: 0.5,
            angular_filter_degrees: 0.2,
        }
    }
}

/// A station placed on the route's distance axis.
#[derive(Debug, Clone)]
pub struct ProjectedStation<'a, S> {
    pub station: &'a S,
    /// Cumulative route miles of the nearest sample.
    pub distance_from_start: f64,
    /// Great-circle miles from the station to that sample.
    pub distance_from_route: f64,
}

/// Projects `stations` onto `route`, dropping everything outside the
/// corridor. Output is sorted ascending by `distance_from_start`; ties keep
/// the input station order.
///
/// Work is O(stations x samples); stations are scanned in parallel and the
/// result order is deterministic regardless of thread scheduling.
pub fn project<'a, S: Station + Sync>(
    route: &ParameterizedRoute,
    stations: &'a [S],
    options: &ProjectorOptions,
) -> Vec<ProjectedStation<'a, S>> {
    let Some(bbox) = route.bounding_box() else {
        return Vec::new();
    };
    let bbox = bbox.expanded(options.bbox_margin_degrees);
    let samples = route.samples();

    let mut projected: Vec<ProjectedStation<'a, S>> = stations
        .par_iter()
        .filter_map(|station| {
            let location = station.location()?;
            if !bbox.contains(location) {
                return None;
            }

            let mut min_distance = f64::INFINITY;
            let mut nearest: Option<usize> = None;

            for (index, sample) in samples.iter().enumerate() {
                let (lat, lng) = sample.location;
                if (lat - location.0).abs() > options.angular_filter_degrees
                    || (lng - location.1).abs() > options.angular_filter_degrees
                {
                    continue;
                }

                let distance = great_circle_miles(location, sample.location);
                if distance < min_distance {
                    min_distance = distance;
                    nearest = Some(index);
                }
            }

            let nearest = nearest?;
            if min_distance > options.corridor_radius_miles {
                return None;
            }

            Some(ProjectedStation {
                station,
                distance_from_start: samples[nearest].miles_from_start,
                distance_from_route: min_distance,
            })
        })
        .collect();

    // Rayon preserves input order, so a stable sort keeps catalog order
    // for equal distances.
    projected.sort_by(|a, b| a.distance_from_start.total_cmp(&b.distance_from_start));

    debug!(
        candidates = stations.len(),
        on_route = projected.len(),
        "projected stations onto route"
    );

    projected
}
