use crate::{DEFAULT_MAX_POINTS, Point, RouteError, Tour, TourMode};

/// Produce a visiting order over a set of points.
///
/// Implementations must validate their input with
/// [`TourMode::validate_input`], passing through the ceiling they were given,
/// and return errors rather than panicking. The
/// resulting [`Tour`] must satisfy the mode's shape:
///
/// - [`TourMode::Closed`]: `points.len() + 2` ids with the depot at both ends
///   (`[depot]` alone when `points` is empty).
/// - [`TourMode::Open`]: `points.len()` ids.
///
/// Every input id appears exactly once outside the depot positions. Solvers
/// must be `Send + Sync` so they can be shared across threads.
pub trait TourSolver: Send + Sync {
    /// Solve for a tour over `points`, accepting at most `max_points` points
    /// with the depot included.
    ///
    /// # Errors
    /// Returns a [`RouteError`] when the input fails validation, including
    /// [`RouteError::TooManyPoints`] above `max_points`.
    fn solve_within(
        &self,
        mode: &TourMode,
        points: &[Point],
        max_points: usize,
    ) -> Result<Tour, RouteError>;

    /// Solve for a tour over `points` under [`DEFAULT_MAX_POINTS`].
    ///
    /// # Errors
    /// Returns a [`RouteError`] when the input fails validation.
    fn solve(&self, mode: &TourMode, points: &[Point]) -> Result<Tour, RouteError> {
        self.solve_within(mode, points, DEFAULT_MAX_POINTS)
    }
}
