//! Lateral adjustment for a ball sitting above or below the feet.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_STANCE_PERCENT, Handedness, ValidationError};

/// Where the ball sits relative to the player's feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum PinPosition {
    /// Ball above the feet.
    Above,
    /// Ball below the feet.
    Below,
    /// Flat lie.
    Level,
}

impl PinPosition {
    /// Upper-case name of the position.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Above => "ABOVE",
            Self::Below => "BELOW",
            Self::Level => "LEVEL",
        }
    }

    const fn sign(self) -> f64 {
        match self {
            Self::Above => 1.0,
            Self::Below => -1.0,
            Self::Level => 0.0,
        }
    }
}

impl fmt::Display for PinPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PinPosition {
    type Err = ValidationError;

    /// Match case-insensitively on the substrings `ABOVE`, `BELOW` and
    /// `LEVEL`, so stored values such as `"Ball above feet"` still parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        [Self::Above, Self::Below, Self::Level]
            .into_iter()
            .find(|position| upper.contains(position.as_str()))
            .ok_or_else(|| ValidationError::unknown("pin position", s))
    }
}

impl TryFrom<String> for PinPosition {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PinPosition> for String {
    fn from(value: PinPosition) -> Self {
        value.as_str().to_owned()
    }
}

/// Decode an optional pin position, reading blank text as no position.
///
/// Unrecognised non-blank text is still rejected.
#[cfg(feature = "serde")]
pub(crate) fn deserialize_optional_position<'de, D>(
    deserializer: D,
) -> Result<Option<PinPosition>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    raw.filter(|text| !text.trim().is_empty())
        .map(|text| text.parse().map_err(serde::de::Error::custom))
        .transpose()
}

/// Inputs for [`stance_offset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StanceParams {
    /// Distance to the pin in yards; absent, zero or `NaN` disables the
    /// adjustment.
    pub pin_distance: Option<f64>,
    /// Lie of the ball relative to the feet.
    pub pin_position: Option<PinPosition>,
    /// Club-specific stance percentage.
    pub stance_percent: Option<f64>,
    /// Player handedness.
    pub handedness: Handedness,
    /// Percentage used when `stance_percent` is absent or zero.
    pub default_percent: f64,
}

impl StanceParams {
    /// Parameters with no pin information and the default percentage.
    #[must_use]
    pub const fn new(handedness: Handedness) -> Self {
        Self {
            pin_distance: None,
            pin_position: None,
            stance_percent: None,
            handedness,
            default_percent: DEFAULT_STANCE_PERCENT,
        }
    }
}

/// Signed lateral offset in yards for an uneven lie.
///
/// A ball above the feet moves the aim right for a right-hander; left-handed
/// players mirror the result.
///
/// # Examples
/// ```
/// use caddy_core::{Handedness, PinPosition, StanceParams, stance_offset};
///
/// let params = StanceParams {
///     pin_distance: Some(20.0),
///     pin_position: Some(PinPosition::Above),
///     stance_percent: Some(5.0),
///     ..StanceParams::new(Handedness::Right)
/// };
/// assert_eq!(stance_offset(&params), 1.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the offset is a percentage of the pin distance"
)]
pub fn stance_offset(params: &StanceParams) -> f64 {
    let Some(distance) = params
        .pin_distance
        .filter(|distance| *distance != 0.0 && !distance.is_nan())
    else {
        return 0.0;
    };
    let Some(position) = params.pin_position else {
        return 0.0;
    };
    let percent = params
        .stance_percent
        .filter(|percent| *percent != 0.0 && !percent.is_nan())
        .unwrap_or(params.default_percent);
    let hand_sign = match params.handedness {
        Handedness::Right => 1.0,
        Handedness::Left => -1.0,
    };
    position.sign() * percent * distance / 100.0 * hand_sign
}
