use thiserror::Error;

/// Errors raised while validating points, solving tours or deriving legs.
///
/// Empty input is not an error: both tour modes define explicit results for
/// zero and one point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// A coordinate was NaN, infinite or outside the WGS84 range.
    #[error("point {id} has invalid coordinates (lat {lat}, lng {lng})")]
    InvalidCoordinate {
        /// Identifier of the offending point.
        id: u64,
        /// Latitude as supplied.
        lat: f64,
        /// Longitude as supplied.
        lng: f64,
    },
    /// A fill level exceeded 100 percent.
    #[error("point {id} has fill level {level}%, above 100%")]
    InvalidFillLevel {
        /// Identifier of the offending point.
        id: u64,
        /// Fill percentage as supplied.
        level: u8,
    },
    /// Two points, or a point and the depot, share an identifier.
    #[error("point id {id} appears more than once")]
    DuplicateIdentifier {
        /// The repeated identifier.
        id: u64,
    },
    /// A tour referenced an id missing from the supplied point set.
    #[error("tour references unknown point id {id}")]
    UnknownPointId {
        /// The unresolved identifier.
        id: u64,
    },
    /// The input exceeded the configured point ceiling.
    #[error("{count} points exceed the planning limit of {limit}")]
    TooManyPoints {
        /// Number of points supplied, depot included.
        count: usize,
        /// Configured ceiling.
        limit: usize,
    },
    /// The average travel speed was not a positive finite number.
    #[error("average speed must be a positive number of km/h, got {speed}")]
    InvalidAverageSpeed {
        /// Speed as configured.
        speed: f64,
    },
}
