//! Bias the aim line away from hazards that sit at the target carry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{HazardWeights, ValidationError};

/// Kind of hazard along the hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HazardKind {
    /// Water, including penalty areas.
    Water,
    /// Fairway bunker.
    Bunker,
    /// Greenside bunker or similar trouble around the green.
    Greenside,
    /// Any other feature; ignored by the bias calculation.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

/// Side of the target line a hazard sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HazardSide {
    /// Left of the target line.
    Left,
    /// Right of the target line.
    Right,
}

/// A hazard occupying the half-open yardage interval `[start_yard, end_yard)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hazard {
    /// Hazard kind.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: HazardKind,
    /// Side of the target line.
    pub side: HazardSide,
    /// First yard covered by the hazard.
    pub start_yard: f64,
    /// First yard past the hazard.
    pub end_yard: f64,
}

impl Hazard {
    /// Report whether the hazard covers `carry`.
    #[must_use]
    pub fn covers(&self, carry: f64) -> bool {
        carry >= self.start_yard && carry < self.end_yard
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct SideFlags {
    left: bool,
    right: bool,
}

impl SideFlags {
    const fn mark(&mut self, side: HazardSide) {
        match side {
            HazardSide::Left => self.left = true,
            HazardSide::Right => self.right = true,
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "flags are weighted into a yardage bias"
    )]
    fn weighted(self, weight: f64) -> f64 {
        weight * (f64::from(u8::from(self.left)) - f64::from(u8::from(self.right)))
    }
}

/// Signed bias pushing the aim away from hazards at `target_carry`.
///
/// Positive values push the aim right, negative values push it left. Several
/// hazards of the same kind on one side count once.
///
/// # Errors
/// Returns [`ValidationError::MissingTargetCarry`] when `target_carry` is zero
/// or `NaN`.
///
/// # Examples
/// ```
/// use caddy_core::{Hazard, HazardKind, HazardSide, HazardWeights, hazard_bias};
///
/// # fn main() -> Result<(), caddy_core::ValidationError> {
/// let hazards = [
///     Hazard {
///         kind: HazardKind::Water,
///         side: HazardSide::Left,
///         start_yard: 140.0,
///         end_yard: 160.0,
///     },
///     Hazard {
///         kind: HazardKind::Bunker,
///         side: HazardSide::Right,
///         start_yard: 140.0,
///         end_yard: 160.0,
///     },
/// ];
/// assert_eq!(hazard_bias(150.0, &hazards, HazardWeights::default())?, 5.0);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "water and bunker components are summed"
)]
pub fn hazard_bias(
    target_carry: f64,
    hazards: &[Hazard],
    weights: HazardWeights,
) -> Result<f64, ValidationError> {
    if target_carry == 0.0 || target_carry.is_nan() {
        return Err(ValidationError::MissingTargetCarry);
    }
    let mut water = SideFlags::default();
    let mut bunker = SideFlags::default();
    for hazard in hazards.iter().filter(|hazard| hazard.covers(target_carry)) {
        match hazard.kind {
            HazardKind::Water => water.mark(hazard.side),
            HazardKind::Bunker | HazardKind::Greenside => bunker.mark(hazard.side),
            HazardKind::Other => {}
        }
    }
    Ok(water.weighted(weights.water) + bunker.weighted(weights.bunker))
}
