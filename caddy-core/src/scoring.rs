//! Convert each club's distance, hazard flag and penalty into one comparable
//! score.
//!
//! Distances near the curve centre score highest on the decaying side of a
//! logistic curve. Hazardous clubs receive [`LARGE_NEGATIVE`] so they sink to
//! the bottom of any ranking, and blank rows score nothing at all.

use crate::lookup::round_to;
use crate::{ScoringCurve, ValidationError, validate_parallel};

/// Sentinel score assigned to hazardous clubs.
pub const LARGE_NEGATIVE: f64 = -1_000_000_000.0;

/// A club's score; `None` marks a blank row that takes no part in ranking.
pub type Score = Option<f64>;

/// Evaluate the scoring curve at `distance`, rounded to two decimals.
///
/// # Examples
/// ```
/// use caddy_core::{ScoringCurve, scoring::curve_value};
///
/// assert_eq!(curve_value(120.0, ScoringCurve::default()), 5.0);
/// assert_eq!(curve_value(280.0, ScoringCurve::default()), 0.02);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the logistic curve is defined over floating-point distances"
)]
pub fn curve_value(distance: f64, curve: ScoringCurve) -> f64 {
    let exponent = (distance - curve.centre) / curve.spread;
    round_to(curve.ceiling / (1.0 + exponent.exp()), 2)
}

/// Score a single row.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "penalties are subtracted from the curve value"
)]
pub fn score_club(
    name: &str,
    is_hazardous: bool,
    distance: f64,
    penalty: f64,
    curve: ScoringCurve,
) -> Score {
    if name.trim().is_empty() {
        return None;
    }
    if is_hazardous {
        return Some(LARGE_NEGATIVE);
    }
    let applied_penalty = if penalty.is_nan() { 0.0 } else { penalty };
    Some((curve_value(distance, curve) - applied_penalty).max(0.0))
}

/// Score every row of parallel club columns.
///
/// # Errors
/// Returns the [`validate_parallel`] failure when the columns are empty or
/// differ in length.
///
/// # Examples
/// ```
/// use caddy_core::{LARGE_NEGATIVE, ScoringCurve, score_clubs};
///
/// # fn main() -> Result<(), caddy_core::ValidationError> {
/// let scores = score_clubs(
///     &["Driver", "PW", ""],
///     &[true, false, false],
///     &[280.0, 120.0, 100.0],
///     &[0.0, 0.0, 0.0],
///     ScoringCurve::default(),
/// )?;
/// assert_eq!(scores, vec![Some(LARGE_NEGATIVE), Some(5.0), None]);
/// # Ok(())
/// # }
/// ```
pub fn score_clubs<S: AsRef<str>>(
    names: &[S],
    hazard_flags: &[bool],
    distances: &[f64],
    penalties: &[f64],
    curve: ScoringCurve,
) -> Result<Vec<Score>, ValidationError> {
    validate_parallel(
        "calculateScoringValues",
        &[
            names.len(),
            hazard_flags.len(),
            distances.len(),
            penalties.len(),
        ],
    )?;
    Ok(names
        .iter()
        .zip(hazard_flags)
        .zip(distances)
        .zip(penalties)
        .map(|(((name, &hazardous), &distance), &penalty)| {
            score_club(name.as_ref(), hazardous, distance, penalty, curve)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn blank_and_hazardous_rows() {
        let scores = score_clubs(
            &["Driver", "3-Wood", "5-Iron", ""],
            &[false, false, false, false],
            &[280.0, 230.0, 150.0, 120.0],
            &[0.0, 0.5, 1.0, 0.0],
            ScoringCurve::default(),
        )
        .expect("valid columns");
        assert_eq!(scores.len(), 4);
        assert_eq!(scores.get(3), Some(&None));
        assert!(scores.first().copied().flatten().is_some_and(|s| s > 0.0));
        assert!(scores.get(1).copied().flatten().is_some_and(|s| s > 0.0));
    }

    #[rstest]
    #[case(280.0, 0.0)]
    #[case(50.0, 100.0)]
    fn hazard_flag_overrides_distance_and_penalty(#[case] distance: f64, #[case] penalty: f64) {
        let score = score_club("Driver", true, distance, penalty, ScoringCurve::default());
        assert_eq!(score, Some(LARGE_NEGATIVE));
    }

    #[rstest]
    #[case(120.0, 0.0, 5.0)]
    #[case(120.0, 2.0, 3.0)]
    #[case(120.0, 9.0, 0.0)]
    #[case(120.0, f64::NAN, 5.0)]
    fn penalties_reduce_and_clamp(
        #[case] distance: f64,
        #[case] penalty: f64,
        #[case] expected: f64,
    ) {
        let score = score_club("PW", false, distance, penalty, ScoringCurve::default());
        assert_eq!(score, Some(expected));
    }

    #[rstest]
    fn whitespace_names_are_blank() {
        assert_eq!(score_club("   ", true, 100.0, 0.0, ScoringCurve::default()), None);
    }

    #[rstest]
    fn mismatched_columns_are_rejected() {
        let err = score_clubs(
            &["Driver"],
            &[false, false],
            &[280.0],
            &[0.0],
            ScoringCurve::default(),
        )
        .expect_err("mismatched columns");
        assert!(matches!(err, ValidationError::LengthMismatch { .. }));
    }

    #[rstest]
    fn empty_columns_are_rejected() {
        let names: [&str; 0] = [];
        let err = score_clubs(&names, &[], &[], &[], ScoringCurve::default())
            .expect_err("empty columns");
        assert!(matches!(err, ValidationError::EmptyInput { .. }));
    }

    #[rstest]
    fn custom_curve_moves_the_centre() {
        let curve = ScoringCurve {
            centre: 200.0,
            ..ScoringCurve::default()
        };
        assert_eq!(curve_value(200.0, curve), 5.0);
    }
}
