//! `NearestNeighbourSolver` implementation.
//!
//! Supports closed round trips from a depot and open paths over bins only.

use ecoroute_core::{Point, RouteError, Tour, TourMode, TourSolver, haversine_km};
use geo::Coord;

/// Greedy solver that always moves to the closest unvisited point.
///
/// Ties are broken by input order: the first of several equally near points
/// wins. Given the same input the solver always returns the same tour. The
/// point ceiling is supplied per call through
/// [`TourSolver::solve_within`]; [`TourSolver::solve`] uses the default.
///
/// # Examples
/// ```
/// use ecoroute_core::{Point, TourMode, TourSolver};
/// use ecoroute_solver_greedy::NearestNeighbourSolver;
///
/// # fn main() -> Result<(), ecoroute_core::RouteError> {
/// let depot = Point::from_lat_lng(0, 12.9249, 80.1000);
/// let bins = vec![
///     Point::from_lat_lng(1, 13.035, 80.2672),
///     Point::from_lat_lng(2, 12.9697, 80.1789),
/// ];
/// let tour = NearestNeighbourSolver::new().solve(&TourMode::Closed { depot }, &bins)?;
/// assert_eq!(tour.ids(), &[0, 2, 1, 0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbourSolver;

impl NearestNeighbourSolver {
    /// Construct a solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TourSolver for NearestNeighbourSolver {
    fn solve_within(
        &self,
        mode: &TourMode,
        points: &[Point],
        max_points: usize,
    ) -> Result<Tour, RouteError> {
        mode.validate_input(points, max_points)?;
        let ids = match mode {
            TourMode::Closed { depot } => closed_tour(depot, points),
            TourMode::Open => open_path(points),
        };
        log::debug!(
            "nearest-neighbour {} tour over {} points: {ids:?}",
            mode_name(mode),
            points.len()
        );
        Ok(Tour::from(ids))
    }
}

const fn mode_name(mode: &TourMode) -> &'static str {
    match mode {
        TourMode::Closed { .. } => "closed",
        TourMode::Open => "open",
    }
}

fn closed_tour(depot: &Point, points: &[Point]) -> Vec<u64> {
    if points.is_empty() {
        return vec![depot.id];
    }
    let mut ids = Vec::with_capacity(points.len() + 2);
    ids.push(depot.id);
    let mut visited = vec![false; points.len()];
    walk_nearest(depot.location, points, &mut visited, &mut ids);
    ids.push(depot.id);
    ids
}

fn open_path(points: &[Point]) -> Vec<u64> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let mut ids = Vec::with_capacity(points.len());
    ids.push(first.id);
    let mut visited = vec![false; points.len()];
    if let Some(flag) = visited.first_mut() {
        *flag = true;
    }
    walk_nearest(first.location, points, &mut visited, &mut ids);
    ids
}

/// Append unvisited points to `ids` in greedy order, starting from `start`.
fn walk_nearest(start: Coord<f64>, points: &[Point], visited: &mut [bool], ids: &mut Vec<u64>) {
    let mut current = start;
    while let Some((idx, point)) = nearest_unvisited(current, points, visited) {
        let Some(flag) = visited.get_mut(idx) else {
            break;
        };
        *flag = true;
        ids.push(point.id);
        current = point.location;
    }
}

/// Closest unvisited point to `from`; the earliest index wins ties.
fn nearest_unvisited<'a>(
    from: Coord<f64>,
    points: &'a [Point],
    visited: &[bool],
) -> Option<(usize, &'a Point)> {
    points
        .iter()
        .zip(visited)
        .enumerate()
        .filter(|(_, (_, seen))| !**seen)
        .map(|(idx, (point, _))| (idx, point, haversine_km(from, point.location)))
        .min_by(|(_, _, lhs), (_, _, rhs)| lhs.total_cmp(rhs))
        .map(|(idx, point, _)| (idx, point))
}

#[cfg(test)]
mod tests;
