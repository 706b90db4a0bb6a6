//! Fixtures and a trivial solver used by unit and behaviour tests.

use crate::{Point, RouteError, Tour, TourMode, TourSolver};

/// The Tambaram depot used throughout the Chennai fixtures.
#[must_use]
pub fn chennai_depot() -> Point {
    Point::reference_depot()
}

/// Five Chennai bins. Mylapore (1) and Mandaveli (4) share coordinates.
#[must_use]
pub fn chennai_bins() -> Vec<Point> {
    vec![
        Point::from_lat_lng(1, 13.035, 80.2672).with_label("Mylapore"),
        Point::from_lat_lng(2, 12.9697, 80.1789).with_label("Velachery"),
        Point::from_lat_lng(3, 13.0950, 80.1303).with_label("Avadi"),
        Point::from_lat_lng(4, 13.035, 80.2672).with_label("Mandaveli"),
        Point::from_lat_lng(5, 13.06, 80.21).with_label("Alwarpet"),
    ]
}

/// Depot followed by every bin.
#[must_use]
pub fn chennai_locations() -> Vec<Point> {
    std::iter::once(chennai_depot())
        .chain(chennai_bins())
        .collect()
}

/// `TourSolver` that visits points in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrderSolver;

impl TourSolver for InputOrderSolver {
    fn solve_within(
        &self,
        mode: &TourMode,
        points: &[Point],
        max_points: usize,
    ) -> Result<Tour, RouteError> {
        mode.validate_input(points, max_points)?;
        let depot = mode.depot().map(|d| d.id);
        let mut ids: Vec<u64> = depot.into_iter().collect();
        ids.extend(points.iter().map(|p| p.id));
        if !points.is_empty() {
            ids.extend(depot);
        }
        Ok(Tour::from(ids))
    }
}
