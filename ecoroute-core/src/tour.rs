//! Visiting orders over located points.

use std::collections::HashSet;

use crate::{Point, RouteError};

/// Ordered sequence of point ids; position is the visiting order.
///
/// In [`TourMode::Closed`] the depot id opens and closes the sequence and
/// every other id appears once.
///
/// # Examples
/// ```
/// use ecoroute_core::Tour;
///
/// let tour = Tour::from(vec![0, 2, 1, 0]);
/// let hops: Vec<_> = tour.hops().collect();
/// assert_eq!(hops, vec![(0, 2), (2, 1), (1, 0)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Tour(Vec<u64>);

impl Tour {
    /// Ids in visiting order.
    #[must_use]
    pub fn ids(&self) -> &[u64] {
        &self.0
    }

    /// Number of stops, counting the depot at both ends.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the tour has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive `(from, to)` id pairs.
    pub fn hops(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.0.windows(2).filter_map(|pair| match pair {
            [from, to] => Some((*from, *to)),
            _ => None,
        })
    }

    /// Consume the tour, returning its ids.
    #[must_use]
    pub fn into_ids(self) -> Vec<u64> {
        self.0
    }
}

impl From<Vec<u64>> for Tour {
    fn from(ids: Vec<u64>) -> Self {
        Self(ids)
    }
}

/// Shape of the tour a solver should produce.
#[derive(Debug, Clone, PartialEq)]
pub enum TourMode {
    /// Round trip that leaves from and returns to `depot`.
    Closed {
        /// Fixed start and end location.
        depot: Point,
    },
    /// Open path over the points alone, starting at the first point.
    Open,
}

impl TourMode {
    /// The depot of a closed tour.
    #[must_use]
    pub const fn depot(&self) -> Option<&Point> {
        match self {
            Self::Closed { depot } => Some(depot),
            Self::Open => None,
        }
    }

    /// Validate solver input for this mode.
    ///
    /// Checks, in order, the point ceiling, then each point's coordinates and
    /// id uniqueness (depot first, then points in input order).
    ///
    /// # Errors
    /// - [`RouteError::TooManyPoints`] when the depot plus points exceed
    ///   `max_points`.
    /// - [`RouteError::InvalidCoordinate`] or [`RouteError::InvalidFillLevel`]
    ///   for the first malformed point.
    /// - [`RouteError::DuplicateIdentifier`] for the first repeated id,
    ///   including a point reusing the depot id.
    pub fn validate_input(&self, points: &[Point], max_points: usize) -> Result<(), RouteError> {
        let count = points.len() + usize::from(self.depot().is_some());
        if count > max_points {
            return Err(RouteError::TooManyPoints {
                count,
                limit: max_points,
            });
        }
        let mut seen = HashSet::with_capacity(count);
        for point in self.depot().into_iter().chain(points) {
            point.validate()?;
            if !seen.insert(point.id) {
                return Err(RouteError::DuplicateIdentifier { id: point.id });
            }
        }
        Ok(())
    }
}
