//! Planned collection routes: a solved tour with its legs and totals.

use crate::{Leg, PlanningConfig, Point, RouteError, Tour, TourMode, TourSolver, leg_details};

/// Litres of fuel a collection truck burns per kilometre.
pub const FUEL_LITRES_PER_KM: f64 = 0.05;

/// Kilograms of CO₂ emitted per kilometre driven.
pub const CO2_KG_PER_KM: f64 = 0.12;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Input to [`plan`]: an optional depot and the bins to visit.
///
/// Without a depot the tour is an open path. `use_reference_depot` selects
/// [`Point::reference_depot`] when no explicit depot is given.
///
/// # Examples
/// ```
/// use ecoroute_core::{PlanRequest, Point, TourMode};
///
/// let request = PlanRequest::closed(
///     Point::reference_depot(),
///     vec![Point::from_lat_lng(1, 13.035, 80.2672)],
/// );
/// assert!(matches!(request.mode(), TourMode::Closed { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Start and end location for a round trip.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub depot: Option<Point>,
    /// Use the reference depot when `depot` is absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub use_reference_depot: bool,
    /// Bins to visit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub points: Vec<Point>,
}

impl PlanRequest {
    /// Round trip from `depot` over `points`.
    #[must_use]
    pub const fn closed(depot: Point, points: Vec<Point>) -> Self {
        Self {
            depot: Some(depot),
            use_reference_depot: false,
            points,
        }
    }

    /// Open path over `points`.
    #[must_use]
    pub const fn open(points: Vec<Point>) -> Self {
        Self {
            depot: None,
            use_reference_depot: false,
            points,
        }
    }

    /// Tour mode implied by the request.
    #[must_use]
    pub fn mode(&self) -> TourMode {
        match (&self.depot, self.use_reference_depot) {
            (Some(depot), _) => TourMode::Closed {
                depot: depot.clone(),
            },
            (None, true) => TourMode::Closed {
                depot: Point::reference_depot(),
            },
            (None, false) => TourMode::Open,
        }
    }
}

/// A solved tour with derived legs and aggregate figures.
///
/// Totals are precise sums of the legs; round only when presenting them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    /// Visiting order.
    pub tour: Tour,
    /// One leg per hop of `tour`.
    pub legs: Vec<Leg>,
    /// Sum of leg distances in kilometres.
    pub total_distance_km: f64,
    /// Sum of leg travel times in minutes.
    pub total_minutes: f64,
}

impl RoutePlan {
    /// Aggregate `legs` into a plan for `tour`.
    #[must_use]
    pub fn from_legs(tour: Tour, legs: Vec<Leg>) -> Self {
        let total_distance_km = legs.iter().fold(0.0, |acc, leg| acc + leg.distance_km);
        let total_minutes = legs
            .iter()
            .fold(0.0, |acc, leg| acc + leg.estimated_minutes);
        Self {
            tour,
            legs,
            total_distance_km,
            total_minutes,
        }
    }

    /// Total distance to two decimal places.
    #[must_use]
    pub fn display_total_distance(&self) -> String {
        format!("{:.2}", self.total_distance_km)
    }

    /// Total time rounded to whole minutes.
    #[must_use]
    pub fn display_total_minutes(&self) -> String {
        format!("{:.0}", self.total_minutes.round())
    }

    /// Total time rounded to whole minutes, as `{hours}h {minutes}min`.
    ///
    /// # Examples
    /// ```
    /// use ecoroute_core::{RoutePlan, Tour};
    ///
    /// let mut route = RoutePlan::from_legs(Tour::default(), Vec::new());
    /// route.total_minutes = 134.6;
    /// assert_eq!(route.display_total_duration(), "2h 15min");
    /// ```
    #[must_use]
    pub fn display_total_duration(&self) -> String {
        let minutes = self.total_minutes.round();
        let hours = (minutes / MINUTES_PER_HOUR).floor();
        let remainder = minutes - hours * MINUTES_PER_HOUR;
        format!("{hours:.0}h {remainder:.0}min")
    }

    /// Estimated fuel use for the whole tour in litres.
    #[must_use]
    pub fn fuel_estimate_litres(&self) -> f64 {
        self.total_distance_km * FUEL_LITRES_PER_KM
    }

    /// Estimated CO₂ emissions for the whole tour in kilograms.
    #[must_use]
    pub fn co2_estimate_kg(&self) -> f64 {
        self.total_distance_km * CO2_KG_PER_KM
    }

    /// Fuel estimate to two decimal places.
    #[must_use]
    pub fn display_fuel_estimate(&self) -> String {
        format!("{:.2}", self.fuel_estimate_litres())
    }

    /// CO₂ estimate to two decimal places.
    #[must_use]
    pub fn display_co2_estimate(&self) -> String {
        format!("{:.2}", self.co2_estimate_kg())
    }
}

/// Solve `request` with `solver` and derive its legs.
///
/// # Errors
/// Propagates validation errors from the solver and the leg builder. The
/// solver receives `config.max_points` as its ceiling, so requests above it
/// fail with [`RouteError::TooManyPoints`].
///
/// # Examples
/// ```
/// use ecoroute_core::{PlanRequest, PlanningConfig, Point, Tour, TourMode, TourSolver, plan};
///
/// struct Direct;
///
/// impl TourSolver for Direct {
///     fn solve_within(
///         &self,
///         mode: &TourMode,
///         points: &[Point],
///         max_points: usize,
///     ) -> Result<Tour, ecoroute_core::RouteError> {
///         mode.validate_input(points, max_points)?;
///         let depot = mode.depot().map(|d| d.id);
///         let ids = depot
///             .into_iter()
///             .chain(points.iter().map(|p| p.id))
///             .chain(depot.filter(|_| !points.is_empty()))
///             .collect::<Vec<_>>();
///         Ok(Tour::from(ids))
///     }
/// }
///
/// # fn main() -> Result<(), ecoroute_core::RouteError> {
/// let request = PlanRequest::closed(
///     Point::reference_depot(),
///     vec![Point::from_lat_lng(1, 13.035, 80.2672).with_label("Mylapore")],
/// );
/// let route = plan(&Direct, &request, &PlanningConfig::default())?;
/// assert_eq!(route.tour.ids(), &[0, 1, 0]);
/// assert_eq!(route.legs.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn plan<S>(
    solver: &S,
    request: &PlanRequest,
    config: &PlanningConfig,
) -> Result<RoutePlan, RouteError>
where
    S: TourSolver + ?Sized,
{
    config.validate()?;
    let mode = request.mode();
    let tour = solver.solve_within(&mode, &request.points, config.max_points)?;

    let mut stops = Vec::with_capacity(request.points.len() + 1);
    stops.extend(mode.depot().cloned());
    stops.extend(request.points.iter().cloned());
    let legs = leg_details(&tour, &stops, config)?;
    Ok(RoutePlan::from_legs(tour, legs))
}
