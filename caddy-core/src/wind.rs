//! Crosswind drift and natural shot shape resolved into a signed aim offset.
//!
//! Positive offsets mean "aim right", negative offsets mean "aim left".

#![expect(
    clippy::float_arithmetic,
    reason = "wind drift and curve terms are floating-point yardages"
)]

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Direction the wind blows relative to the target line.
///
/// Serialised by wire name; decoding accepts everything [`FromStr`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum WindDirection {
    /// Into the player's face.
    Head,
    /// From behind the player.
    Tail,
    /// Across the line from right to left.
    CrossRightToLeft,
    /// Across the line from left to right.
    CrossLeftToRight,
    /// No wind worth accounting for.
    Calm,
}

impl WindDirection {
    /// Wire name of the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Tail => "Tail",
            Self::CrossRightToLeft => "Cross_R_to_L",
            Self::CrossLeftToRight => "Cross_L_to_R",
            Self::Calm => "Calm",
        }
    }

    /// Angle of the wind across the target line, in degrees.
    #[must_use]
    pub const fn angle_degrees(self) -> f64 {
        match self {
            Self::CrossRightToLeft => -90.0,
            Self::CrossLeftToRight => 90.0,
            Self::Head | Self::Tail | Self::Calm => 0.0,
        }
    }

    const fn is_along_line(self) -> bool {
        matches!(self, Self::Head | Self::Tail)
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Head" => Ok(Self::Head),
            "Tail" => Ok(Self::Tail),
            "Cross_R_to_L" => Ok(Self::CrossRightToLeft),
            "Cross_L_to_R" => Ok(Self::CrossLeftToRight),
            "Calm" | "None" | "" => Ok(Self::Calm),
            other => Err(ValidationError::unknown("wind direction", other)),
        }
    }
}

/// The hand a player swings from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Handedness {
    /// Right-handed player.
    Right,
    /// Left-handed player.
    Left,
}

impl Handedness {
    /// Wire name of the handedness.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "Right",
            Self::Left => "Left",
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handedness {
    type Err = ValidationError;

    /// Parse case-insensitively; any value starting with `L` is left-handed
    /// and any value starting with `R` is right-handed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('L') => Ok(Self::Left),
            Some('R') => Ok(Self::Right),
            _ => Err(ValidationError::unknown("handedness", s)),
        }
    }
}

/// The player's stock ball flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum NaturalShape {
    /// Curves right to left for a right-hander.
    Draw,
    /// Curves left to right for a right-hander.
    Fade,
    /// No consistent curve.
    Straight,
}

impl NaturalShape {
    /// Wire name of the shape.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::Fade => "Fade",
            Self::Straight => "Straight",
        }
    }

    /// Sign of the lateral curve for a player of the given handedness.
    ///
    /// Negative curves move the ball left.
    #[must_use]
    pub const fn curve_sign(self, handedness: Handedness) -> f64 {
        match (self, handedness) {
            (Self::Draw, Handedness::Right) | (Self::Fade, Handedness::Left) => -1.0,
            (Self::Draw, Handedness::Left) | (Self::Fade, Handedness::Right) => 1.0,
            (Self::Straight, _) => 0.0,
        }
    }
}

impl fmt::Display for NaturalShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NaturalShape {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Draw" => Ok(Self::Draw),
            "Fade" => Ok(Self::Fade),
            "Straight" | "Neutral" => Ok(Self::Straight),
            other => Err(ValidationError::unknown("natural shape", other)),
        }
    }
}

macro_rules! string_wire {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = ValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_owned()
                }
            }
        )*
    };
}

string_wire!(WindDirection, Handedness, NaturalShape);

/// Complete inputs for [`wind_offset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindParams {
    /// Carry of the chosen club, in yards.
    pub club_carry: f64,
    /// Wind speed in mph.
    pub wind_speed: f64,
    /// Wind direction.
    pub wind_direction: WindDirection,
    /// Base curve of the player's 5-iron, in yards.
    pub base_shape: f64,
    /// Player handedness.
    pub handedness: Handedness,
    /// Player's natural shot shape.
    pub natural_shape: NaturalShape,
    /// Per-club multiplier on the natural curve.
    pub shape_mult: f64,
    /// Per-club multiplier on wind drift, reflecting launch height.
    pub height_mult: f64,
}

impl WindParams {
    /// Start building parameters field by field.
    #[must_use]
    pub fn builder() -> WindParamsBuilder {
        WindParamsBuilder::default()
    }
}

/// Builder enforcing that every wind parameter is supplied.
///
/// Zero is a valid value; only absence is an error.
///
/// # Examples
/// ```
/// use caddy_core::{Handedness, NaturalShape, ValidationError, WindDirection, WindParams};
///
/// let missing = WindParams::builder().club_carry(200.0).build();
/// assert_eq!(missing, Err(ValidationError::MissingParameter("wind_speed")));
///
/// let params = WindParams::builder()
///     .club_carry(200.0)
///     .wind_speed(0.0)
///     .wind_direction(WindDirection::Head)
///     .base_shape(5.0)
///     .handedness(Handedness::Right)
///     .natural_shape(NaturalShape::Draw)
///     .shape_mult(1.0)
///     .height_mult(1.0)
///     .build();
/// assert!(params.is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindParamsBuilder {
    club_carry: Option<f64>,
    wind_speed: Option<f64>,
    wind_direction: Option<WindDirection>,
    base_shape: Option<f64>,
    handedness: Option<Handedness>,
    natural_shape: Option<NaturalShape>,
    shape_mult: Option<f64>,
    height_mult: Option<f64>,
}

macro_rules! builder_setters {
    ($($field:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Set `", stringify!($field), "`.")]
            #[must_use]
            pub const fn $field(mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

impl WindParamsBuilder {
    builder_setters!(
        club_carry: f64,
        wind_speed: f64,
        wind_direction: WindDirection,
        base_shape: f64,
        handedness: Handedness,
        natural_shape: NaturalShape,
        shape_mult: f64,
        height_mult: f64,
    );

    /// Set the club carry when known.
    #[must_use]
    pub const fn maybe_club_carry(mut self, value: Option<f64>) -> Self {
        self.club_carry = value;
        self
    }

    /// Set the shape multiplier when known.
    #[must_use]
    pub const fn maybe_shape_mult(mut self, value: Option<f64>) -> Self {
        self.shape_mult = value;
        self
    }

    /// Set the height multiplier when known.
    #[must_use]
    pub const fn maybe_height_mult(mut self, value: Option<f64>) -> Self {
        self.height_mult = value;
        self
    }

    /// Set the shared wind and player fields from optional inputs.
    #[must_use]
    pub const fn conditions(
        mut self,
        wind_speed: Option<f64>,
        wind_direction: Option<WindDirection>,
        base_shape: Option<f64>,
        handedness: Option<Handedness>,
        natural_shape: Option<NaturalShape>,
    ) -> Self {
        self.wind_speed = wind_speed;
        self.wind_direction = wind_direction;
        self.base_shape = base_shape;
        self.handedness = handedness;
        self.natural_shape = natural_shape;
        self
    }

    /// Finish building.
    ///
    /// # Errors
    /// Returns [`ValidationError::MissingParameter`] naming the first absent
    /// field.
    pub const fn build(self) -> Result<WindParams, ValidationError> {
        let Some(club_carry) = self.club_carry else {
            return Err(ValidationError::MissingParameter("club_carry"));
        };
        let Some(wind_speed) = self.wind_speed else {
            return Err(ValidationError::MissingParameter("wind_speed"));
        };
        let Some(wind_direction) = self.wind_direction else {
            return Err(ValidationError::MissingParameter("wind_direction"));
        };
        let Some(base_shape) = self.base_shape else {
            return Err(ValidationError::MissingParameter("base_shape"));
        };
        let Some(handedness) = self.handedness else {
            return Err(ValidationError::MissingParameter("handedness"));
        };
        let Some(natural_shape) = self.natural_shape else {
            return Err(ValidationError::MissingParameter("natural_shape"));
        };
        let Some(shape_mult) = self.shape_mult else {
            return Err(ValidationError::MissingParameter("shape_mult"));
        };
        let Some(height_mult) = self.height_mult else {
            return Err(ValidationError::MissingParameter("height_mult"));
        };
        Ok(WindParams {
            club_carry,
            wind_speed,
            wind_direction,
            base_shape,
            handedness,
            natural_shape,
            shape_mult,
            height_mult,
        })
    }
}

/// Lateral drift in yards caused by the crosswind component.
///
/// Head and tail winds contribute nothing; a right-to-left wind produces a
/// negative (leftward) drift.
#[must_use]
pub fn wind_drift(params: &WindParams) -> f64 {
    let cross_mph = if params.wind_direction.is_along_line() {
        0.0
    } else {
        params.wind_speed * params.wind_direction.angle_degrees().to_radians().sin()
    };
    let yards_per_mph = params.club_carry / 100.0;
    cross_mph * yards_per_mph * params.height_mult
}

/// Lateral movement in yards from the player's natural curve.
#[must_use]
pub fn natural_curve(params: &WindParams) -> f64 {
    params.base_shape * params.shape_mult * params.natural_shape.curve_sign(params.handedness)
}

/// Aim offset that cancels wind drift and natural curve.
///
/// # Examples
/// ```
/// use caddy_core::{Handedness, NaturalShape, WindDirection, WindParams, wind_offset};
///
/// # fn main() -> Result<(), caddy_core::ValidationError> {
/// let params = WindParams::builder()
///     .club_carry(200.0)
///     .wind_speed(10.0)
///     .wind_direction(WindDirection::Head)
///     .base_shape(5.0)
///     .handedness(Handedness::Right)
///     .natural_shape(NaturalShape::Draw)
///     .shape_mult(1.2)
///     .height_mult(1.1)
///     .build()?;
/// // A right-handed draw curves left, so the player aims right.
/// assert!((wind_offset(&params) - 6.0).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn wind_offset(params: &WindParams) -> f64 {
    -(wind_drift(params) + natural_curve(params))
}
