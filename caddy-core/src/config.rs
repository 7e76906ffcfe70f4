//! Tunable constants for the scoring curve, hazard weights and stance
//! adjustment.
//!
//! Every field can be overridden so the curve and weights can be tuned without
//! touching the algorithms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Parameters of the logistic curve used to score clubs.
///
/// `score = ceiling / (1 + e^((distance - centre) / spread))`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringCurve {
    /// Highest score the curve approaches for very short distances.
    pub ceiling: f64,
    /// Distance at which the curve passes through half the ceiling.
    pub centre: f64,
    /// Horizontal scale of the decay, in distance units.
    pub spread: f64,
}

impl ScoringCurve {
    /// Validate the curve and return a copy.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidScoringCurve`] when the ceiling or
    /// spread is not a finite positive number, or the centre is not finite.
    pub fn validate(self) -> Result<Self, ValidationError> {
        for (field, value) in [("ceiling", self.ceiling), ("spread", self.spread)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidScoringCurve { field, value });
            }
        }
        if !self.centre.is_finite() {
            return Err(ValidationError::InvalidScoringCurve {
                field: "centre",
                value: self.centre,
            });
        }
        Ok(self)
    }
}

impl Default for ScoringCurve {
    fn default() -> Self {
        Self {
            ceiling: 10.0,
            centre: 120.0,
            spread: 25.0,
        }
    }
}

/// Weights applied per hazard side when biasing the aim line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HazardWeights {
    /// Yards of bias contributed by water on one side.
    pub water: f64,
    /// Yards of bias contributed by bunkers or greenside hazards on one side.
    pub bunker: f64,
}

impl Default for HazardWeights {
    fn default() -> Self {
        Self {
            water: 10.0,
            bunker: 5.0,
        }
    }
}

/// Stance percentage used when a club has none recorded.
pub const DEFAULT_STANCE_PERCENT: f64 = 3.0;

/// Complete engine configuration.
///
/// # Examples
/// ```
/// use caddy_core::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.scoring.centre, 120.0);
/// assert_eq!(config.hazard_weights.water, 10.0);
/// assert_eq!(config.default_stance_percent, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Club scoring curve.
    pub scoring: ScoringCurve,
    /// Hazard bias weights.
    pub hazard_weights: HazardWeights,
    /// Stance percentage applied when a club has none.
    pub default_stance_percent: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringCurve::default(),
            hazard_weights: HazardWeights::default(),
            default_stance_percent: DEFAULT_STANCE_PERCENT,
        }
    }
}
