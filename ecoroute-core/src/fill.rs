//! Bin fill-level classification.

use std::fmt;

/// Fill percentage at and above which a bin is [`FillStatus::High`].
pub const HIGH_FILL_THRESHOLD: u8 = 75;

/// Fill percentage at and above which a bin is at least
/// [`FillStatus::Medium`].
pub const MEDIUM_FILL_THRESHOLD: u8 = 40;

/// Coarse urgency band for a bin's fill level.
///
/// # Examples
/// ```
/// use ecoroute_core::FillStatus;
///
/// assert_eq!(FillStatus::from_level(85), FillStatus::High);
/// assert_eq!(FillStatus::from_level(45).to_string(), "Medium");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FillStatus {
    /// Below [`MEDIUM_FILL_THRESHOLD`].
    Low,
    /// From [`MEDIUM_FILL_THRESHOLD`] up to [`HIGH_FILL_THRESHOLD`].
    Medium,
    /// [`HIGH_FILL_THRESHOLD`] or fuller.
    High,
}

impl FillStatus {
    /// Classify a fill percentage.
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        if level >= HIGH_FILL_THRESHOLD {
            Self::High
        } else if level >= MEDIUM_FILL_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for FillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, FillStatus::Low)]
    #[case(39, FillStatus::Low)]
    #[case(40, FillStatus::Medium)]
    #[case(74, FillStatus::Medium)]
    #[case(75, FillStatus::High)]
    #[case(100, FillStatus::High)]
    fn classifies_at_thresholds(#[case] level: u8, #[case] expected: FillStatus) {
        assert_eq!(FillStatus::from_level(level), expected);
    }
}
