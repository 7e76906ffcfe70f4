//! Rank scores and pull out the best and second-best clubs.
//!
//! Ties resolve to the first matching row for both picks.

use crate::lookup::{MatchMode, index, match_position, max, xlookup};
use crate::{ClubSelection, Score, ValidationError, validate_parallel};

fn numeric_scores(scores: &[Score]) -> Vec<f64> {
    scores
        .iter()
        .flatten()
        .copied()
        .filter(|score| !score.is_nan())
        .collect()
}

/// Return the highest present score.
///
/// # Errors
/// Returns [`ValidationError::NoValidScores`] when no numeric score remains
/// after dropping blank rows and `NaN`.
///
/// # Examples
/// ```
/// use caddy_core::find_max_score;
///
/// assert_eq!(find_max_score(&[Some(3.5), None, Some(8.9), Some(4.3)]), Ok(8.9));
/// ```
pub fn find_max_score(scores: &[Score]) -> Result<f64, ValidationError> {
    let numeric = numeric_scores(scores);
    if numeric.is_empty() {
        return Err(ValidationError::NoValidScores);
    }
    max(&numeric)
}

/// Return the highest score strictly below the maximum.
///
/// Every entry equal to the maximum is removed before the second maximum is
/// taken, so duplicated winners never count as runners-up.
///
/// # Errors
/// Returns [`ValidationError::TooFewScores`] when fewer than two numeric
/// scores exist and [`ValidationError::IdenticalScores`] when they are all
/// equal.
///
/// # Examples
/// ```
/// use caddy_core::{ValidationError, find_second_max_score};
///
/// assert_eq!(find_second_max_score(&[Some(8.9), Some(7.2), Some(8.9)]), Ok(7.2));
/// assert_eq!(
///     find_second_max_score(&[Some(5.0), Some(5.0), Some(5.0)]),
///     Err(ValidationError::IdenticalScores)
/// );
/// ```
#[expect(
    clippy::float_cmp,
    reason = "scores equal to the maximum are removed by exact comparison"
)]
pub fn find_second_max_score(scores: &[Score]) -> Result<f64, ValidationError> {
    let numeric = numeric_scores(scores);
    if numeric.len() < 2 {
        return Err(ValidationError::TooFewScores {
            found: numeric.len(),
        });
    }
    let best = max(&numeric)?;
    let remainder: Vec<f64> = numeric.into_iter().filter(|&score| score != best).collect();
    if remainder.is_empty() {
        return Err(ValidationError::IdenticalScores);
    }
    max(&remainder)
}

fn validate_details<S: AsRef<str>>(
    operation: &'static str,
    names: &[S],
    distance_labels: &[S],
    club_types: &[S],
    scores: &[Score],
) -> Result<(), ValidationError> {
    validate_parallel(
        operation,
        &[
            names.len(),
            distance_labels.len(),
            club_types.len(),
            scores.len(),
        ],
    )
}

fn selection<S: AsRef<str>>(club: &S, distance_label: &S, club_type: &S) -> ClubSelection {
    ClubSelection {
        club: club.as_ref().to_owned(),
        distance_label: distance_label.as_ref().to_owned(),
        club_type: club_type.as_ref().to_owned(),
    }
}

/// Identify the club at the first row holding the maximum score.
///
/// # Errors
/// Returns a [`ValidationError`] when the columns are malformed or hold no
/// numeric score.
pub fn optimal_club_details<S: AsRef<str>>(
    names: &[S],
    distance_labels: &[S],
    club_types: &[S],
    scores: &[Score],
) -> Result<ClubSelection, ValidationError> {
    validate_details(
        "getOptimalClubDetails",
        names,
        distance_labels,
        club_types,
        scores,
    )?;
    let best = find_max_score(scores)?;
    let position = match_position(&Some(best), scores, MatchMode::Exact)?;
    Ok(selection(
        index(names, position)?,
        index(distance_labels, position)?,
        index(club_types, position)?,
    ))
}

/// Identify the club at the first row holding the second-highest score.
///
/// # Errors
/// Returns a [`ValidationError`] when the columns are malformed or no distinct
/// second score exists.
pub fn second_best_club_details<S: AsRef<str>>(
    names: &[S],
    distance_labels: &[S],
    club_types: &[S],
    scores: &[Score],
) -> Result<ClubSelection, ValidationError> {
    validate_details(
        "getSecondBestClubDetails",
        names,
        distance_labels,
        club_types,
        scores,
    )?;
    let runner_up = Some(find_second_max_score(scores)?);
    Ok(selection(
        xlookup(&runner_up, scores, names, None)?,
        xlookup(&runner_up, scores, distance_labels, None)?,
        xlookup(&runner_up, scores, club_types, None)?,
    ))
}
