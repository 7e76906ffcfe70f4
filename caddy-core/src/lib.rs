//! Scoring and aim-offset engine for golf club recommendations.
//!
//! Responsibilities:
//! - Score candidate clubs on a logistic distance curve and pick the best and
//!   second-best.
//! - Resolve wind drift, natural shot shape, hazard placement and stance into
//!   one signed aim offset and a readable instruction.
//! - Adjust carry distances for weather and elevation.
//!
//! Boundaries:
//! - No I/O. Callers own serialization, persistence and presentation.
//!
//! Invariants:
//! - Every operation is a pure function of its arguments.
//! - Hazardous clubs always score [`LARGE_NEGATIVE`]; blank rows score `None`.
//! - Positive offsets mean "aim right".
//!
//! # Examples
//!
//! ```
//! use caddy_core::{ScoringCurve, aim_directive, find_max_score, score_clubs, total_aim_offset};
//!
//! # fn main() -> Result<(), caddy_core::ValidationError> {
//! let scores = score_clubs(
//!     &["7-Iron", "PW"],
//!     &[false, false],
//!     &[150.0, 120.0],
//!     &[0.0, 0.0],
//!     ScoringCurve::default(),
//! )?;
//! assert_eq!(find_max_score(&scores)?, 5.0);
//!
//! let total = total_aim_offset(Some(-7.0), Some(10.0), Some(-1.0));
//! let directive = aim_directive(total).map(|directive| directive.to_string());
//! assert_eq!(directive.as_deref(), Some("Aim RIGHT 2 yds"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aim;
mod club;
mod conditions;
mod config;
mod error;
mod hazard;
pub mod lookup;
mod recommend;
mod selection;
pub mod scoring;
mod stance;
mod validate;
mod wind;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use aim::{AimDirection, AimDirective, aim_directive, parse_offset, total_aim_offset};
pub use club::{ClubCandidate, ClubColumns, ClubSelection};
pub use conditions::{
    BagClub, ClubFit, ShotDifficulty, Weather, WeatherImpact, adjusted_carry, club_for_distance,
    compass_point, shot_difficulty, weather_impact, wind_effect,
};
pub use config::{DEFAULT_STANCE_PERCENT, EngineConfig, HazardWeights, ScoringCurve};
pub use error::{RecommendError, ValidationError};
pub use hazard::{Hazard, HazardKind, HazardSide, hazard_bias};
pub use recommend::{ClubAdjustments, Recommendation, ShotPlan, ShotRequest, recommend};
pub use scoring::{LARGE_NEGATIVE, Score, score_clubs};
pub use selection::{
    find_max_score, find_second_max_score, optimal_club_details, second_best_club_details,
};
pub use stance::{PinPosition, StanceParams, stance_offset};
pub use validate::validate_parallel;
pub use wind::{
    Handedness, NaturalShape, WindDirection, WindParams, WindParamsBuilder, natural_curve,
    wind_drift, wind_offset,
};
