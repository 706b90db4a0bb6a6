//! Located stops: the depot and the bins a collection round visits.

use geo::Coord;

use crate::FillStatus;
use crate::error::RouteError;

/// Identifier conventionally reserved for the depot.
pub const DEPOT_ID: u64 = 0;

/// A stop with a unique identifier and a WGS84 position.
///
/// Coordinates follow `geo` conventions with `x = longitude` and
/// `y = latitude`, both in signed decimal degrees (south and west negative).
///
/// # Examples
/// ```
/// use ecoroute_core::Point;
///
/// let bin = Point::from_lat_lng(2, 12.9697, 80.1789).with_label("Velachery");
///
/// assert_eq!(bin.id, 2);
/// assert_eq!(bin.lat(), 12.9697);
/// assert_eq!(bin.display_label(), "Velachery");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PointRecord", into = "PointRecord")
)]
pub struct Point {
    /// Unique identifier.
    pub id: u64,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Human-readable name used in leg narratives.
    pub label: Option<String>,
    /// How full a bin is, as a percentage from 0 to 100.
    pub fill_level: Option<u8>,
}

impl Point {
    /// Construct an unlabelled point at `location`.
    pub const fn new(id: u64, location: Coord<f64>) -> Self {
        Self {
            id,
            location,
            label: None,
            fill_level: None,
        }
    }

    /// Construct an unlabelled point from latitude and longitude.
    pub const fn from_lat_lng(id: u64, lat: f64, lng: f64) -> Self {
        Self::new(id, Coord { x: lng, y: lat })
    }

    /// Attach a display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Record how full the bin is, in percent.
    #[must_use]
    pub const fn with_fill_level(mut self, level: u8) -> Self {
        self.fill_level = Some(level);
        self
    }

    /// Urgency band of the bin, when its fill level is known.
    #[must_use]
    pub const fn fill_status(&self) -> Option<FillStatus> {
        match self.fill_level {
            Some(level) => Some(FillStatus::from_level(level)),
            None => None,
        }
    }

    /// The Tambaram collection depot used by the demo fleet.
    ///
    /// # Examples
    /// ```
    /// use ecoroute_core::{DEPOT_ID, Point};
    ///
    /// let depot = Point::reference_depot();
    /// assert_eq!(depot.id, DEPOT_ID);
    /// assert_eq!(depot.display_label(), "Tambaram");
    /// ```
    #[must_use]
    pub fn reference_depot() -> Self {
        Self::from_lat_lng(DEPOT_ID, 12.9249, 80.1000).with_label("Tambaram")
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.location.x
    }

    /// Label shown to people, falling back to `#<id>` when none was given.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id))
    }

    /// Check the coordinates, then that any fill level is a percentage.
    ///
    /// # Errors
    /// - [`RouteError::InvalidCoordinate`] as for
    ///   [`Point::validate_coordinates`].
    /// - [`RouteError::InvalidFillLevel`] above 100 percent.
    pub fn validate(&self) -> Result<(), RouteError> {
        self.validate_coordinates()?;
        match self.fill_level {
            Some(level) if level > 100 => Err(RouteError::InvalidFillLevel { id: self.id, level }),
            _ => Ok(()),
        }
    }

    /// Check that the coordinates are finite and inside the WGS84 ranges.
    ///
    /// # Errors
    /// Returns [`RouteError::InvalidCoordinate`] for NaN, infinite or
    /// out-of-range values.
    pub fn validate_coordinates(&self) -> Result<(), RouteError> {
        let lat = self.lat();
        let lng = self.lng();
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);
        if lat_ok && lng_ok {
            Ok(())
        } else {
            Err(RouteError::InvalidCoordinate {
                id: self.id,
                lat,
                lng,
            })
        }
    }
}

/// Wire shape for [`Point`]: `{ "id", "lat", "lng", "label"?, "fill_level"? }`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PointRecord {
    id: u64,
    lat: f64,
    lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fill_level: Option<u8>,
}

#[cfg(feature = "serde")]
impl From<PointRecord> for Point {
    fn from(record: PointRecord) -> Self {
        Self {
            id: record.id,
            location: Coord {
                x: record.lng,
                y: record.lat,
            },
            label: record.label,
            fill_level: record.fill_level,
        }
    }
}

#[cfg(feature = "serde")]
impl From<Point> for PointRecord {
    fn from(point: Point) -> Self {
        Self {
            id: point.id,
            lat: point.location.y,
            lng: point.location.x,
            label: point.label,
            fill_level: point.fill_level,
        }
    }
}
