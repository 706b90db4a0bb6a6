//! Facade crate for the EcoRoute collection planner.
//!
//! This crate re-exports the core domain types and exposes the greedy
//! nearest-neighbour solver behind the `solver-greedy` feature flag.

#![forbid(unsafe_code)]

pub use ecoroute_core::{
    CO2_KG_PER_KM, DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_MAX_POINTS, DEPOT_ID, Dms, EARTH_RADIUS_KM,
    FUEL_LITRES_PER_KM, FillStatus, HIGH_FILL_THRESHOLD, Heading, Hemisphere, HemisphereParseError,
    Leg, LookupPolicy, MEDIUM_FILL_THRESHOLD, PlanRequest, PlanningConfig, Point, RouteError,
    RoutePlan, Tour, TourMode, TourSolver, distance, haversine_km, leg_details, plan,
    total_distance,
};

#[cfg(feature = "solver-greedy")]
pub use ecoroute_solver_greedy::NearestNeighbourSolver;
