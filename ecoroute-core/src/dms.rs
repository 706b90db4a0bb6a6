//! Degrees-minutes-seconds coordinates, as printed on survey sheets.

use std::str::FromStr;

use thiserror::Error;

/// Compass hemisphere of a DMS reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    /// Northern latitudes.
    North,
    /// Southern latitudes.
    South,
    /// Eastern longitudes.
    East,
    /// Western longitudes.
    West,
}

/// Error returned when parsing a [`Hemisphere`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hemisphere '{0}', expected one of N, S, E, W")]
pub struct HemisphereParseError(pub String);

impl FromStr for Hemisphere {
    type Err = HemisphereParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            _ => Err(HemisphereParseError(s.to_owned())),
        }
    }
}

/// A coordinate component expressed as degrees, minutes and seconds.
///
/// # Examples
/// ```
/// use ecoroute_core::{Dms, Hemisphere};
///
/// let lat = Dms::new(12, 55, 29.64, Hemisphere::North);
/// assert!((lat.to_decimal() - 12.9249).abs() < 1e-9);
///
/// let lng = Dms::new(0, 7, 40.08, Hemisphere::West);
/// assert!(lng.to_decimal() < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: u16,
    /// Arc minutes.
    pub minutes: u8,
    /// Arc seconds, possibly fractional.
    pub seconds: f64,
    /// Hemisphere; south and west are negative.
    pub hemisphere: Hemisphere,
}

impl Dms {
    /// Construct a DMS reading.
    #[must_use]
    pub const fn new(degrees: u16, minutes: u8, seconds: f64, hemisphere: Hemisphere) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        }
    }

    /// Signed decimal degrees.
    #[must_use]
    pub fn to_decimal(&self) -> f64 {
        let magnitude =
            f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0;
        match self.hemisphere {
            Hemisphere::North | Hemisphere::East => magnitude,
            Hemisphere::South | Hemisphere::West => -magnitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("N", Hemisphere::North)]
    #[case("s", Hemisphere::South)]
    #[case(" E ", Hemisphere::East)]
    #[case("w", Hemisphere::West)]
    fn parses_hemispheres(#[case] input: &str, #[case] expected: Hemisphere) {
        assert_eq!(input.parse::<Hemisphere>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_hemisphere() {
        let err = "Q".parse::<Hemisphere>().expect_err("Q is not a hemisphere");
        assert_eq!(err, HemisphereParseError("Q".into()));
    }

    #[rstest]
    #[case(Hemisphere::South, -33.5)]
    #[case(Hemisphere::West, -33.5)]
    #[case(Hemisphere::North, 33.5)]
    fn sign_follows_hemisphere(#[case] hemisphere: Hemisphere, #[case] expected: f64) {
        let value = Dms::new(33, 30, 0.0, hemisphere).to_decimal();
        assert!((value - expected).abs() < 1e-12);
    }
}
