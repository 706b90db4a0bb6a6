//! Per-hop distance, time and narrative derived from a tour.
//!
//! Legs are computed fresh from a [`Tour`] and the point set it was solved
//! over. Lookup misses follow the configured [`LookupPolicy`].

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::{LookupPolicy, PlanningConfig, Point, RouteError, Tour, distance};

const MINUTES_PER_HOUR: f64 = 60.0;

/// One consecutive hop within a tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Where the hop starts.
    pub from: Point,
    /// Where the hop ends.
    pub to: Point,
    /// Great-circle distance in kilometres.
    pub distance_km: f64,
    /// Travel time in minutes at the configured average speed.
    pub estimated_minutes: f64,
    /// Human-readable driving narrative.
    pub directions: Vec<String>,
}

impl Leg {
    /// Derive the leg from `from` to `to` at the speed in `config`.
    ///
    /// # Errors
    /// - [`RouteError::InvalidAverageSpeed`] when `config` is unusable.
    /// - [`RouteError::InvalidCoordinate`] for malformed coordinates.
    ///
    /// # Examples
    /// ```
    /// use ecoroute_core::{Leg, PlanningConfig, Point};
    ///
    /// # fn main() -> Result<(), ecoroute_core::RouteError> {
    /// let depot = Point::reference_depot();
    /// let bin = Point::from_lat_lng(2, 12.9697, 80.1789).with_label("Velachery");
    /// let leg = Leg::between(&depot, &bin, &PlanningConfig::default())?;
    ///
    /// assert_eq!(leg.directions[0], "Start from Tambaram.");
    /// assert_eq!(leg.directions[1], "Head north-east towards Velachery.");
    /// assert_eq!(leg.directions[3], "Arrive at Velachery.");
    /// # Ok(())
    /// # }
    /// ```
    pub fn between(from: &Point, to: &Point, config: &PlanningConfig) -> Result<Self, RouteError> {
        config.validate()?;
        let distance_km = distance(from, to)?;
        let estimated_minutes = distance_km / config.average_speed_kmh * MINUTES_PER_HOUR;
        let heading = Heading::between(from, to);
        let from_label = from.display_label();
        let to_label = to.display_label();
        let directions = vec![
            format!("Start from {from_label}."),
            format!("Head {heading} towards {to_label}."),
            format!("Continue for approximately {distance_km:.2} km."),
            format!("Arrive at {to_label}."),
        ];
        Ok(Self {
            from: from.clone(),
            to: to.clone(),
            distance_km,
            estimated_minutes,
            directions,
        })
    }

    /// Distance formatted to two decimal places.
    #[must_use]
    pub fn display_distance(&self) -> String {
        format!("{:.2}", self.distance_km)
    }

    /// Minutes rounded to the nearest whole minute, halves away from zero.
    #[must_use]
    pub fn display_minutes(&self) -> String {
        format!("{:.0}", self.estimated_minutes.round())
    }

    /// Endpoint coordinates as `lat°N, lng°E -> lat°S, lng°W` at 4 dp.
    #[must_use]
    pub fn display_coordinates(&self) -> String {
        format!(
            "{} -> {}",
            format_coordinate(&self.from),
            format_coordinate(&self.to)
        )
    }
}

fn format_coordinate(point: &Point) -> String {
    let lat = point.lat();
    let lng = point.lng();
    let ns = if lat < 0.0 { 'S' } else { 'N' };
    let ew = if lng < 0.0 { 'W' } else { 'E' };
    format!("{:.4}°{ns}, {:.4}°{ew}", lat.abs(), lng.abs())
}

/// Compass heading of a hop: always north or south, optionally east or west.
///
/// North is chosen only when the destination lies strictly north; the
/// east/west component is omitted when the longitudes are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    /// `true` for north, `false` for south.
    pub northward: bool,
    /// `Some(true)` for east, `Some(false)` for west, `None` if unchanged.
    pub eastward: Option<bool>,
}

impl Heading {
    /// Heading from `from` towards `to`.
    #[must_use]
    pub fn between(from: &Point, to: &Point) -> Self {
        let northward = to.lat() > from.lat();
        let eastward = match to.lng().partial_cmp(&from.lng()) {
            Some(Ordering::Greater) => Some(true),
            Some(Ordering::Less) => Some(false),
            Some(Ordering::Equal) | None => None,
        };
        Self {
            northward,
            eastward,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.northward { "north" } else { "south" })?;
        match self.eastward {
            Some(true) => f.write_str("-east"),
            Some(false) => f.write_str("-west"),
            None => Ok(()),
        }
    }
}

/// Resolves tour ids to points; the first occurrence of an id wins.
struct PointLookup<'a> {
    by_id: HashMap<u64, &'a Point>,
    policy: LookupPolicy,
}

impl<'a> PointLookup<'a> {
    fn new(points: &'a [Point], policy: LookupPolicy) -> Self {
        let mut by_id = HashMap::with_capacity(points.len());
        for point in points {
            by_id.entry(point.id).or_insert(point);
        }
        Self { by_id, policy }
    }

    /// Resolve both ends of a hop; `Ok(None)` means the hop is skipped.
    fn hop(&self, from: u64, to: u64) -> Result<Option<(&'a Point, &'a Point)>, RouteError> {
        match (self.by_id.get(&from), self.by_id.get(&to)) {
            (Some(a), Some(b)) => Ok(Some((*a, *b))),
            (a, _) => {
                let id = if a.is_none() { from } else { to };
                match self.policy {
                    LookupPolicy::Strict => Err(RouteError::UnknownPointId { id }),
                    LookupPolicy::Lenient => {
                        log::warn!("skipping hop {from} -> {to}: point {id} is not in the point set");
                        Ok(None)
                    }
                }
            }
        }
    }
}

/// Total length in kilometres of `tour` over `points`.
///
/// # Errors
/// - [`RouteError::UnknownPointId`] under [`LookupPolicy::Strict`] when the
///   tour references an id missing from `points`. Under
///   [`LookupPolicy::Lenient`] such hops contribute nothing.
/// - [`RouteError::InvalidCoordinate`] for malformed coordinates.
///
/// # Examples
/// ```
/// use ecoroute_core::{LookupPolicy, Point, Tour, total_distance};
///
/// # fn main() -> Result<(), ecoroute_core::RouteError> {
/// let points = vec![
///     Point::from_lat_lng(0, 0.0, 0.0),
///     Point::from_lat_lng(1, 0.0, 1.0),
/// ];
/// let tour = Tour::from(vec![0, 1, 0]);
/// let km = total_distance(&tour, &points, LookupPolicy::Strict)?;
/// assert!((km - 222.39).abs() < 0.01);
/// # Ok(())
/// # }
/// ```
pub fn total_distance(
    tour: &Tour,
    points: &[Point],
    policy: LookupPolicy,
) -> Result<f64, RouteError> {
    let lookup = PointLookup::new(points, policy);
    let mut total = 0.0;
    for (from, to) in tour.hops() {
        if let Some((a, b)) = lookup.hop(from, to)? {
            total += distance(a, b)?;
        }
    }
    Ok(total)
}

/// Derive one [`Leg`] per consecutive pair of `tour`.
///
/// # Errors
/// - [`RouteError::InvalidAverageSpeed`] when `config` is unusable.
/// - [`RouteError::UnknownPointId`] under [`LookupPolicy::Strict`]; under
///   [`LookupPolicy::Lenient`] the affected leg is omitted.
/// - [`RouteError::InvalidCoordinate`] for malformed coordinates.
pub fn leg_details(
    tour: &Tour,
    points: &[Point],
    config: &PlanningConfig,
) -> Result<Vec<Leg>, RouteError> {
    config.validate()?;
    let lookup = PointLookup::new(points, config.lookup);
    let mut legs = Vec::with_capacity(tour.len().saturating_sub(1));
    for (from, to) in tour.hops() {
        if let Some((a, b)) = lookup.hop(from, to)? {
            legs.push(Leg::between(a, b, config)?);
        }
    }
    Ok(legs)
}
