//! Core domain types for EcoRoute collection planning.
//!
//! The crate models depots and bins as [`Point`] values, computes haversine
//! [`distance`]s, defines the [`TourSolver`] boundary and derives per-hop
//! [`Leg`]s with distance, time and a short narrative. Everything is a pure,
//! synchronous computation over caller-supplied data.
//!
//! Solvers produce a [`Tour`] in one of two [`TourMode`]s: a closed round trip
//! from a depot, or an open path over the points alone.
//!
//! # Examples
//!
//! ```
//! use ecoroute_core::{LookupPolicy, Point, Tour, total_distance};
//!
//! # fn main() -> Result<(), ecoroute_core::RouteError> {
//! let points = vec![
//!     Point::reference_depot(),
//!     Point::from_lat_lng(2, 12.9697, 80.1789).with_label("Velachery"),
//! ];
//! let tour = Tour::from(vec![0, 2, 0]);
//! let km = total_distance(&tour, &points, LookupPolicy::Strict)?;
//! assert!(km > 19.0 && km < 21.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod distance;
mod dms;
mod error;
mod fill;
mod leg;
mod point;
mod route;
mod solver;
mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::{DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_MAX_POINTS, LookupPolicy, PlanningConfig};
pub use distance::{EARTH_RADIUS_KM, distance, haversine_km};
pub use dms::{Dms, Hemisphere, HemisphereParseError};
pub use error::RouteError;
pub use fill::{FillStatus, HIGH_FILL_THRESHOLD, MEDIUM_FILL_THRESHOLD};
pub use leg::{Heading, Leg, leg_details, total_distance};
pub use point::{DEPOT_ID, Point};
pub use route::{CO2_KG_PER_KM, FUEL_LITRES_PER_KM, PlanRequest, RoutePlan, plan};
pub use solver::TourSolver;
pub use tour::{Tour, TourMode};
