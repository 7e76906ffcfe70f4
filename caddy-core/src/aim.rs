//! Combine offset terms into one total and render it as an aim instruction.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Coerce an offset term read as text.
///
/// Only the empty string is absent. Anything else is present and reads as
/// its numeric value, or zero when it is not a number, so whitespace-only
/// text counts as a zero term.
///
/// # Examples
/// ```
/// use caddy_core::parse_offset;
///
/// assert_eq!(parse_offset("-2"), Some(-2.0));
/// assert_eq!(parse_offset(""), None);
/// assert_eq!(parse_offset("  "), Some(0.0));
/// assert_eq!(parse_offset("n/a"), Some(0.0));
/// ```
#[must_use]
pub fn parse_offset(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    Some(raw.trim().parse::<f64>().unwrap_or(0.0))
}

/// Sum the wind, hazard and stance terms.
///
/// Stance alone never produces an instruction: the total is absent when both
/// the wind offset and the hazard bias are. Absent and `NaN` terms otherwise
/// count as zero.
///
/// # Examples
/// ```
/// use caddy_core::total_aim_offset;
///
/// assert_eq!(total_aim_offset(Some(5.5), Some(-2.0), Some(1.5)), Some(5.0));
/// assert_eq!(total_aim_offset(None, None, Some(1.5)), None);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "offset terms are summed")]
pub fn total_aim_offset(
    wind: Option<f64>,
    hazard: Option<f64>,
    stance: Option<f64>,
) -> Option<f64> {
    if wind.is_none() && hazard.is_none() {
        return None;
    }
    let term = |value: Option<f64>| value.filter(|v| !v.is_nan()).unwrap_or(0.0);
    Some(term(wind) + term(hazard) + term(stance))
}

/// Side of the target line to aim at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AimDirection {
    /// Aim left of the target.
    Left,
    /// Aim right of the target.
    Right,
    /// Aim straight at the target.
    Center,
}

impl AimDirection {
    /// Upper-case label used in directives.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Center => "CENTER",
        }
    }
}

/// Human-readable aim instruction such as `Aim LEFT 6 yds`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct AimDirective {
    /// Side to aim at.
    pub direction: AimDirection,
    /// Whole yards to aim off the target; zero for [`AimDirection::Center`].
    pub yards: f64,
}

impl fmt::Display for AimDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aim {}", self.direction.as_str())?;
        if self.direction != AimDirection::Center {
            write!(f, " {} yds", self.yards)?;
        }
        Ok(())
    }
}

impl FromStr for AimDirective {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::unknown("aim directive", s);
        let mut words = s.split_whitespace();
        if words.next() != Some("Aim") {
            return Err(invalid());
        }
        let direction = match words.next() {
            Some("LEFT") => AimDirection::Left,
            Some("RIGHT") => AimDirection::Right,
            Some("CENTER") => AimDirection::Center,
            _ => return Err(invalid()),
        };
        let yards = match (direction, words.next(), words.next(), words.next()) {
            (AimDirection::Center, None, None, None) => 0.0,
            (AimDirection::Left | AimDirection::Right, Some(yards), Some("yds"), None) => {
                yards.parse::<f64>().map_err(|_| invalid())?
            }
            _ => return Err(invalid()),
        };
        Ok(Self { direction, yards })
    }
}

impl TryFrom<String> for AimDirective {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AimDirective> for String {
    fn from(value: AimDirective) -> Self {
        value.to_string()
    }
}

/// Turn a signed total offset into an instruction.
///
/// Magnitudes round half away from zero. An absent total yields no
/// instruction.
///
/// # Examples
/// ```
/// use caddy_core::aim_directive;
///
/// let directive = aim_directive(Some(-5.7)).map(|d| d.to_string());
/// assert_eq!(directive.as_deref(), Some("Aim LEFT 6 yds"));
/// assert_eq!(aim_directive(Some(0.0)).map(|d| d.to_string()).as_deref(), Some("Aim CENTER"));
/// assert!(aim_directive(None).is_none());
/// ```
#[must_use]
pub fn aim_directive(total: Option<f64>) -> Option<AimDirective> {
    let offset = total?;
    let direction = if offset < 0.0 {
        AimDirection::Left
    } else if offset > 0.0 {
        AimDirection::Right
    } else {
        AimDirection::Center
    };
    let yards = match direction {
        AimDirection::Center => 0.0,
        AimDirection::Left | AimDirection::Right => offset.abs().round(),
    };
    Some(AimDirective { direction, yards })
}
