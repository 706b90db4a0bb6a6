//! Great-circle distances between points.
//!
//! Uses the haversine formula over a spherical Earth. The result is a planning
//! estimate, not a survey-grade measurement.

use geo::Coord;

use crate::{Point, RouteError};

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two already validated positions.
///
/// The formula is symmetric in its arguments and yields exactly `0.0` for
/// identical positions.
#[must_use]
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lng = (b.x - a.x).to_radians();
    let half_lat = (d_lat / 2.0).sin();
    let half_lng = (d_lng / 2.0).sin();
    let h = half_lat * half_lat
        + a.y.to_radians().cos() * b.y.to_radians().cos() * half_lng * half_lng;
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * central_angle
}

/// Distance in kilometres between two points.
///
/// # Errors
/// Returns [`RouteError::InvalidCoordinate`] if either point carries NaN,
/// infinite or out-of-range coordinates.
///
/// # Examples
/// ```
/// use ecoroute_core::{Point, distance};
///
/// # fn main() -> Result<(), ecoroute_core::RouteError> {
/// let depot = Point::from_lat_lng(0, 12.9249, 80.1000);
/// let bin = Point::from_lat_lng(2, 12.9697, 80.1789);
/// let km = distance(&depot, &bin)?;
/// assert!((9.5..10.5).contains(&km));
/// assert_eq!(km, distance(&bin, &depot)?);
/// # Ok(())
/// # }
/// ```
pub fn distance(a: &Point, b: &Point) -> Result<f64, RouteError> {
    a.validate_coordinates()?;
    b.validate_coordinates()?;
    Ok(haversine_km(a.location, b.location))
}
