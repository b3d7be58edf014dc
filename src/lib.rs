//! fuel-route-planner core
//!
//! Route-constrained least-cost refueling: parameterize a road path into a
//! distance axis, project fuel stations onto it, then greedily pick the
//! cheapest reachable stops.

pub mod traits;
pub mod geo;
pub mod route;
pub mod projector;
pub mod planner;
pub mod geocode;
pub mod osrm;
pub mod catalog;
