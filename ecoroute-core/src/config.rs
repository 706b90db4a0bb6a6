//! Planning knobs shared by solvers and the leg builder.

use crate::RouteError;

/// Average urban travel speed assumed for time estimates.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 40.0;

/// Default ceiling on the number of points in one planning call.
///
/// The nearest-neighbour scan is quadratic, so oversized inputs are rejected
/// instead of silently slowing down.
pub const DEFAULT_MAX_POINTS: usize = 500;

/// How tour ids missing from the point set are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LookupPolicy {
    /// Skip the affected hop: it contributes no distance and produces no leg.
    #[default]
    Lenient,
    /// Fail with [`RouteError::UnknownPointId`].
    Strict,
}

/// Configuration for tour solving and leg derivation.
///
/// # Examples
/// ```
/// use ecoroute_core::{LookupPolicy, PlanningConfig};
///
/// let config = PlanningConfig {
///     lookup: LookupPolicy::Strict,
///     ..PlanningConfig::default()
/// };
/// assert_eq!(config.average_speed_kmh, 40.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningConfig {
    /// Speed used to turn leg distances into minutes.
    pub average_speed_kmh: f64,
    /// Behaviour when a tour references an unknown id.
    pub lookup: LookupPolicy,
    /// Maximum number of points, depot included, accepted by a solve.
    pub max_points: usize,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            lookup: LookupPolicy::default(),
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

impl PlanningConfig {
    /// Reject speeds that would yield infinite or negative travel times.
    ///
    /// # Errors
    /// Returns [`RouteError::InvalidAverageSpeed`] when the speed is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<(), RouteError> {
        let speed = self.average_speed_kmh;
        if speed.is_finite() && speed > 0.0 {
            Ok(())
        } else {
            Err(RouteError::InvalidAverageSpeed { speed })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_unusable_speeds(#[case] speed: f64) {
        let config = PlanningConfig {
            average_speed_kmh: speed,
            ..PlanningConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RouteError::InvalidAverageSpeed { .. })
        ));
    }

    #[rstest]
    fn defaults_are_lenient() {
        assert_eq!(PlanningConfig::default().lookup, LookupPolicy::Lenient);
    }
}
