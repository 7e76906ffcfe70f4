//! Sequence scoring, selection and the offset calculators into one
//! recommendation.

use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    AimDirective, ClubColumns, ClubSelection, EngineConfig, Handedness, Hazard, NaturalShape,
    PinPosition, RecommendError, Score, StanceParams, ValidationError, WindDirection, WindParams,
    aim_directive, find_max_score, find_second_max_score, hazard_bias, optimal_club_details,
    score_clubs, second_best_club_details, stance_offset, total_aim_offset, wind_offset,
};

/// Per-club inputs for one of the two recommended shots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClubAdjustments {
    /// Carry of the club in yards.
    pub carry: Option<f64>,
    /// Multiplier on the natural curve.
    pub shape_mult: Option<f64>,
    /// Multiplier on wind drift.
    pub height_mult: Option<f64>,
    /// Distance to the pin for the stance adjustment.
    pub pin_distance: Option<f64>,
    /// Stance percentage recorded for the club.
    pub stance_percent: Option<f64>,
}

/// Everything the engine needs to recommend a shot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShotRequest {
    /// Candidate clubs in column layout.
    pub clubs: ClubColumns,
    /// Wind speed in mph.
    pub wind_speed: Option<f64>,
    /// Wind direction relative to the target line.
    pub wind_direction: Option<WindDirection>,
    /// Base curve of the player's 5-iron, in yards.
    pub base_shape: Option<f64>,
    /// Player handedness.
    pub handedness: Option<Handedness>,
    /// Player's natural shot shape.
    pub natural_shape: Option<NaturalShape>,
    /// Inputs for the best-scoring club.
    #[cfg_attr(feature = "serde", serde(default))]
    pub optimal: ClubAdjustments,
    /// Inputs for the runner-up club.
    #[cfg_attr(feature = "serde", serde(default))]
    pub second: ClubAdjustments,
    /// Carry distance to the target, in yards.
    pub target_carry: f64,
    /// Hazards along the hole.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hazards: Vec<Hazard>,
    /// Lie of the ball relative to the feet; blank text decodes as absent.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::stance::deserialize_optional_position"
        )
    )]
    pub pin_position: Option<PinPosition>,
}

/// Aim details for one recommended club.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShotPlan {
    /// Selected club.
    pub club: ClubSelection,
    /// Offset cancelling wind drift and natural curve.
    pub wind_offset: f64,
    /// Offset for the lie.
    pub stance_offset: f64,
    /// Sum of the wind, hazard and stance terms.
    pub total_offset: Option<f64>,
    /// Rendered instruction for the total.
    pub directive: Option<AimDirective>,
}

/// Result of [`recommend`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recommendation {
    /// Score of every candidate row.
    pub scores: Vec<Score>,
    /// Highest score.
    pub max_score: f64,
    /// Highest score below the maximum.
    pub second_max_score: f64,
    /// Hazard bias shared by both plans.
    pub hazard_bias: f64,
    /// Plan for the best-scoring club.
    pub optimal: ShotPlan,
    /// Plan for the runner-up club.
    pub second: ShotPlan,
}

struct PlanInputs<'a> {
    request: &'a ShotRequest,
    config: &'a EngineConfig,
}

impl PlanInputs<'_> {
    fn wind(&self, adjustments: ClubAdjustments) -> Result<WindParams, ValidationError> {
        let request = self.request;
        WindParams::builder()
            .maybe_club_carry(adjustments.carry)
            .conditions(
                request.wind_speed,
                request.wind_direction,
                request.base_shape,
                request.handedness,
                request.natural_shape,
            )
            .maybe_shape_mult(adjustments.shape_mult)
            .maybe_height_mult(adjustments.height_mult)
            .build()
    }

    fn plan(
        &self,
        club: ClubSelection,
        adjustments: ClubAdjustments,
        wind: &WindParams,
        bias: f64,
    ) -> ShotPlan {
        let wind_offset = wind_offset(wind);
        let stance_offset = stance_offset(&StanceParams {
            pin_distance: adjustments.pin_distance,
            pin_position: self.request.pin_position,
            stance_percent: adjustments.stance_percent,
            handedness: wind.handedness,
            default_percent: self.config.default_stance_percent,
        });
        let total_offset = total_aim_offset(Some(wind_offset), Some(bias), Some(stance_offset));
        ShotPlan {
            club,
            wind_offset,
            stance_offset,
            total_offset,
            directive: aim_directive(total_offset),
        }
    }
}

fn only_unplayable(scores: &[Score]) -> bool {
    scores
        .iter()
        .flatten()
        .all(|score| *score < 0.0 || score.is_nan())
}

/// Recommend the best and second-best clubs and where to aim each.
///
/// # Errors
/// Returns [`RecommendError`] wrapping the first [`ValidationError`] raised by
/// any step. No partial result is produced.
///
/// # Examples
/// ```
/// use caddy_core::{
///     ClubAdjustments, ClubCandidate, EngineConfig, Handedness, NaturalShape, ShotRequest,
///     WindDirection, recommend,
/// };
///
/// # fn main() -> Result<(), caddy_core::RecommendError> {
/// let clubs = [("Driver", 280.0), ("7-Iron", 150.0), ("PW", 120.0)]
///     .into_iter()
///     .map(|(name, distance)| ClubCandidate {
///         name: name.into(),
///         distance,
///         is_hazardous: false,
///         penalty: 0.0,
///         distance_label: format!("{distance}y"),
///         club_type: "Club".into(),
///     })
///     .collect();
/// let carry = |carry| ClubAdjustments {
///     carry: Some(carry),
///     shape_mult: Some(1.0),
///     height_mult: Some(1.0),
///     ..ClubAdjustments::default()
/// };
/// let request = ShotRequest {
///     clubs,
///     wind_speed: Some(0.0),
///     wind_direction: Some(WindDirection::Calm),
///     base_shape: Some(0.0),
///     handedness: Some(Handedness::Right),
///     natural_shape: Some(NaturalShape::Straight),
///     optimal: carry(120.0),
///     second: carry(150.0),
///     target_carry: 120.0,
///     hazards: Vec::new(),
///     pin_position: None,
/// };
/// let recommendation = recommend(&request, &EngineConfig::default())?;
/// assert_eq!(recommendation.optimal.club.club, "PW");
/// assert_eq!(recommendation.second.club.club, "7-Iron");
/// # Ok(())
/// # }
/// ```
pub fn recommend(
    request: &ShotRequest,
    config: &EngineConfig,
) -> Result<Recommendation, RecommendError> {
    let curve = config.scoring.validate()?;
    let clubs = &request.clubs;
    let scores = score_clubs(
        &clubs.names,
        &clubs.hazard_flags,
        &clubs.distances,
        &clubs.penalties,
        curve,
    )?;
    if only_unplayable(&scores) {
        warn!("Every candidate club is hazardous or blank; recommending the least bad pair");
    }
    let max_score = find_max_score(&scores)?;
    let second_max_score = find_second_max_score(&scores)?;
    let optimal_club = optimal_club_details(
        &clubs.names,
        &clubs.distance_labels,
        &clubs.club_types,
        &scores,
    )?;
    let second_club = second_best_club_details(
        &clubs.names,
        &clubs.distance_labels,
        &clubs.club_types,
        &scores,
    )?;
    debug!(
        "Selected {} ({max_score}) and {} ({second_max_score})",
        optimal_club.club, second_club.club
    );

    let inputs = PlanInputs { request, config };
    let optimal_wind = inputs.wind(request.optimal)?;
    let second_wind = inputs.wind(request.second)?;
    let bias = hazard_bias(request.target_carry, &request.hazards, config.hazard_weights)?;
    let optimal = inputs.plan(optimal_club, request.optimal, &optimal_wind, bias);
    let second = inputs.plan(second_club, request.second, &second_wind, bias);
    debug!(
        "Aim offsets: {} total {:?}, {} total {:?}",
        optimal.club.club, optimal.total_offset, second.club.club, second.total_offset
    );

    Ok(Recommendation {
        scores,
        max_score,
        second_max_score,
        hazard_bias: bias,
        optimal,
        second,
    })
}
