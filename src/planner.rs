//! Greedy refueling planner.
//!
//! Walks the route as a (position, fuel range) state machine. Whenever the
//! remaining fuel cannot reach the finish, it drives to the cheapest station
//! reachable on the current tank and refills to full. This is locally
//! optimal per stop, not a global cost minimizer: a pricier-but-farther
//! station can occasionally beat the greedy pick downstream.

use serde::Serialize;
use tracing::debug;

use crate::projector::{project, ProjectedStation, ProjectorOptions};
use crate::route::{parameterize, RoutePath, DEFAULT_MAX_SAMPLES};
use crate::traits::Station;

/// Vehicle fuel model.
#[derive(Debug, Clone)]
pub struct VehicleOptions {
    /// Miles the vehicle travels on a full tank.
    pub max_range_miles: f64,
    /// Miles driven per fuel unit (e.g. miles per gallon).
    pub miles_per_unit: f64,
    /// Whether the trip starts on a full tank. Starting empty forces a
    /// stop before any distance is covered.
    pub start_with_full_tank: bool,
}

impl Default for VehicleOptions {
    fn default() -> Self {
        Self {
            max_range_miles: 500.0,
            miles_per_unit: 10.0,
            start_with_full_tank: true,
        }
    }
}

/// Options for a full planning request.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Cap on route samples kept by the parameterizer.
    pub max_samples: usize,
    pub projector: ProjectorOptions,
    pub vehicle: VehicleOptions,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
            projector: ProjectorOptions::default(),
            vehicle: VehicleOptions::default(),
        }
    }
}

/// One refueling decision. The tank is always refilled to full, so
/// `fuel_range_after` equals the vehicle's max range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelStop<Id> {
    pub station_id: Id,
    pub station_name: String,
    pub city: String,
    pub state: String,
    /// Route miles from the trip start at the moment of stopping.
    pub distance_from_start: f64,
    pub price_per_unit: f64,
    pub units_purchased: f64,
    pub cost: f64,
    pub fuel_range_after: f64,
}

/// Final planner output for one trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan<Id> {
    pub stops: Vec<FuelStop<Id>>,
    pub total_fuel_cost: f64,
    pub total_route_miles: f64,
    /// Route geometry passed through for rendering.
    pub geometry: RoutePath,
}

/// Planning failure. Deterministic function of the input, safe to recompute.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError<Id> {
    /// No station lies within the current fuel range; the trip cannot
    /// continue. Carries the stops decided before stranding, for
    /// diagnostics.
    Unreachable {
        position_miles: f64,
        partial_stops: Vec<FuelStop<Id>>,
    },
}

/// Planner state: where the vehicle is and how far it can still go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripState {
    pub position_miles: f64,
    pub fuel_range_miles: f64,
}

/// Outcome of one planner transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<Id> {
    /// Remaining fuel reaches the finish; no further stop needed.
    Arrived,
    /// Drove to a station and refilled; continue from the new state.
    Refuel { state: TripState, stop: FuelStop<Id> },
    /// No station in the reachable window.
    Stranded,
}

/// Pure planner transition: from `state`, either finish, refuel at the
/// cheapest reachable station, or strand.
///
/// `stations` must be sorted ascending by `distance_from_start` (the
/// projector's output order); the first strictly-cheaper candidate wins, so
/// equal prices resolve to the nearer station.
pub fn step<S: Station>(
    state: TripState,
    total_miles: f64,
    stations: &[ProjectedStation<'_, S>],
    vehicle: &VehicleOptions,
) -> Step<S::Id> {
    if state.position_miles + state.fuel_range_miles >= total_miles {
        return Step::Arrived;
    }

    let reach = state.position_miles + state.fuel_range_miles;
    let mut cheapest: Option<&ProjectedStation<'_, S>> = None;
    for candidate in stations {
        // Never back up to a station behind the current position.
        if candidate.distance_from_start <= state.position_miles {
            continue;
        }
        if candidate.distance_from_start > reach {
            break;
        }
        let better = match cheapest {
            None => true,
            Some(best) => candidate.station.price_per_unit() < best.station.price_per_unit(),
        };
        if better {
            cheapest = Some(candidate);
        }
    }

    let Some(choice) = cheapest else {
        return Step::Stranded;
    };

    let fuel_on_arrival =
        state.fuel_range_miles - (choice.distance_from_start - state.position_miles);
    let units_purchased = (vehicle.max_range_miles - fuel_on_arrival) / vehicle.miles_per_unit;
    let price = choice.station.price_per_unit();

    let stop = FuelStop {
        station_id: choice.station.id().clone(),
        station_name: choice.station.name().to_string(),
        city: choice.station.city().to_string(),
        state: choice.station.state().to_string(),
        distance_from_start: choice.distance_from_start,
        price_per_unit: price,
        units_purchased,
        cost: units_purchased * price,
        fuel_range_after: vehicle.max_range_miles,
    };

    Step::Refuel {
        state: TripState {
            position_miles: choice.distance_from_start,
            fuel_range_miles: vehicle.max_range_miles,
        },
        stop,
    }
}

/// Runs the transition loop over a projected station list.
///
/// Returns the ordered stops and their total cost, or `Unreachable` with
/// partial progress.
pub fn plan_stops<S: Station>(
    total_route_miles: f64,
    stations: &[ProjectedStation<'_, S>],
    vehicle: &VehicleOptions,
) -> Result<(Vec<FuelStop<S::Id>>, f64), PlanError<S::Id>> {
    let mut state = TripState {
        position_miles: 0.0,
        fuel_range_miles: if vehicle.start_with_full_tank {
            vehicle.max_range_miles
        } else {
            0.0
        },
    };
    let mut stops = Vec::new();
    let mut total_cost = 0.0;

    loop {
        match step(state, total_route_miles, stations, vehicle) {
            Step::Arrived => return Ok((stops, total_cost)),
            Step::Refuel { state: next, stop } => {
                debug!(
                    at_miles = stop.distance_from_start,
                    price = stop.price_per_unit,
                    cost = stop.cost,
                    "refueling stop"
                );
                total_cost += stop.cost;
                stops.push(stop);
                state = next;
            }
            Step::Stranded => {
                return Err(PlanError::Unreachable {
                    position_miles: state.position_miles,
                    partial_stops: stops,
                });
            }
        }
    }
}

/// Plans refueling stops for a trip along `path` using the given station
/// catalog.
///
/// The full pipeline: parameterize the path, project the catalog onto it,
/// then run the greedy planner. Stations without coordinates are ignored.
/// A path of 0 or 1 points is a zero-distance trip and trivially succeeds
/// with no stops.
pub fn plan<S: Station + Sync>(
    path: &RoutePath,
    stations: &[S],
    options: &PlanOptions,
) -> Result<Plan<S::Id>, PlanError<S::Id>> {
    let route = parameterize(path, options.max_samples);
    let total_route_miles = route.total_miles();

    if route.samples().len() < 2 {
        return Ok(Plan {
            stops: Vec::new(),
            total_fuel_cost: 0.0,
            total_route_miles,
            geometry: path.clone(),
        });
    }

    let projected = project(&route, stations, &options.projector);
    let (stops, total_fuel_cost) = plan_stops(total_route_miles, &projected, &options.vehicle)?;

    Ok(Plan {
        stops,
        total_fuel_cost,
        total_route_miles,
        geometry: path.clone(),
    })
}
