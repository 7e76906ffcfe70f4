//! Spreadsheet-style lookup primitives shared by every higher-level step.
//!
//! Positions are 1-based to match the `INDEX`/`MATCH` conventions the
//! scoring tables were designed with.

use std::fmt::Debug;

use crate::ValidationError;

/// Matching behaviour requested from [`match_position`].
///
/// Only [`MatchMode::Exact`] is implemented; the approximate modes exist so
/// callers translating spreadsheet formulas get an explicit error instead of
/// a silent exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// First element equal to the lookup value.
    Exact,
    /// Largest element not greater than the lookup value.
    NextSmaller,
    /// Smallest element not less than the lookup value.
    NextLarger,
}

/// Return the largest numeric entry, ignoring `NaN`.
///
/// # Errors
/// Returns [`ValidationError::EmptyInput`] for an empty slice and
/// [`ValidationError::NoNumericValues`] when every entry is `NaN`.
///
/// # Examples
/// ```
/// use caddy_core::lookup::max;
///
/// assert_eq!(max(&[1.0, f64::NAN, 9.0, 2.0]), Ok(9.0));
/// assert!(max(&[]).is_err());
/// ```
pub fn max(values: &[f64]) -> Result<f64, ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::EmptyInput { operation: "MAX" });
    }
    values
        .iter()
        .copied()
        .filter(|value| !value.is_nan())
        .reduce(f64::max)
        .ok_or(ValidationError::NoNumericValues)
}

/// Return the element at a 1-based position.
///
/// # Errors
/// Returns [`ValidationError::IndexOutOfBounds`] unless
/// `1 <= position <= array.len()`.
///
/// # Examples
/// ```
/// use caddy_core::lookup::index;
///
/// let clubs = ["Driver", "3-Wood"];
/// assert_eq!(index(&clubs, 2), Ok(&"3-Wood"));
/// assert!(index(&clubs, 0).is_err());
/// ```
pub fn index<T>(array: &[T], position: usize) -> Result<&T, ValidationError> {
    position
        .checked_sub(1)
        .and_then(|offset| array.get(offset))
        .ok_or(ValidationError::IndexOutOfBounds {
            index: position,
            len: array.len(),
        })
}

/// Return the 1-based position of the first element equal to `value`.
///
/// # Errors
/// Returns [`ValidationError::UnsupportedMatchMode`] for any mode other than
/// [`MatchMode::Exact`] and [`ValidationError::NotFound`] when no element
/// matches.
pub fn match_position<T>(value: &T, array: &[T], mode: MatchMode) -> Result<usize, ValidationError>
where
    T: PartialEq + Debug,
{
    if mode != MatchMode::Exact {
        return Err(ValidationError::UnsupportedMatchMode { mode });
    }
    array
        .iter()
        .position(|item| item == value)
        .map(|offset| offset.saturating_add(1))
        .ok_or_else(|| ValidationError::NotFound {
            operation: "MATCH",
            value: format!("{value:?}"),
        })
}

/// Return the entry of `returns` paired with the first match of `value` in
/// `lookup`.
///
/// When nothing matches, `fallback` is returned if supplied.
///
/// # Errors
/// Returns [`ValidationError::LengthMismatch`] when the two arrays differ in
/// length and [`ValidationError::NotFound`] when nothing matches and no
/// fallback was given.
///
/// # Examples
/// ```
/// use caddy_core::lookup::xlookup;
///
/// let keys = ["A", "B", "C"];
/// let values = [10, 20, 30];
/// assert_eq!(xlookup(&"B", &keys, &values, None), Ok(&20));
/// assert_eq!(xlookup(&"D", &keys, &values, Some(&0)), Ok(&0));
/// ```
pub fn xlookup<'a, K, V>(
    value: &K,
    lookup: &[K],
    returns: &'a [V],
    fallback: Option<&'a V>,
) -> Result<&'a V, ValidationError>
where
    K: PartialEq + Debug,
{
    if lookup.len() != returns.len() {
        return Err(ValidationError::LengthMismatch {
            operation: "XLOOKUP",
            lengths: vec![lookup.len(), returns.len()],
        });
    }
    let found = lookup
        .iter()
        .position(|item| item == value)
        .and_then(|offset| returns.get(offset));
    found.or(fallback).ok_or_else(|| ValidationError::NotFound {
        operation: "XLOOKUP",
        value: format!("{value:?}"),
    })
}

/// Round half away from zero to `digits` decimal places.
///
/// Negative `digits` round to tens, hundreds and so on.
///
/// # Examples
/// ```
/// use caddy_core::lookup::round_to;
///
/// assert_eq!(round_to(4.56789, 2), 4.57);
/// assert_eq!(round_to(123.456, -1), 120.0);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "decimal rounding scales by a power of ten"
)]
pub fn round_to(value: f64, digits: i32) -> f64 {
    if digits >= 0 {
        let factor = 10.0_f64.powi(digits);
        (value * factor).round() / factor
    } else {
        let factor = 10.0_f64.powi(digits.saturating_neg());
        (value / factor).round() * factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[1.0, 5.0, 3.0, 9.0, 2.0], 9.0)]
    #[case(&[0.0, -5.0, -10.0], 0.0)]
    #[case(&[100.0], 100.0)]
    #[case(&[1e-10, 1e10, -1e10], 1e10)]
    fn max_returns_largest(#[case] values: &[f64], #[case] expected: f64) {
        assert_eq!(max(values), Ok(expected));
    }

    #[rstest]
    fn max_rejects_all_nan() {
        assert_eq!(
            max(&[f64::NAN, f64::NAN]),
            Err(ValidationError::NoNumericValues)
        );
    }

    #[rstest]
    #[case(1, "A")]
    #[case(4, "D")]
    fn index_is_one_based(#[case] position: usize, #[case] expected: &str) {
        let values = ["A", "B", "C", "D"];
        assert_eq!(index(&values, position), Ok(&expected));
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    fn index_rejects_out_of_bounds(#[case] position: usize) {
        let values = ["A", "B", "C", "D"];
        assert_eq!(
            index(&values, position),
            Err(ValidationError::IndexOutOfBounds {
                index: position,
                len: 4
            })
        );
    }

    #[rstest]
    fn match_finds_first_position() {
        let values = [10, 20, 30, 20];
        assert_eq!(match_position(&30, &values, MatchMode::Exact), Ok(3));
        assert_eq!(match_position(&20, &values, MatchMode::Exact), Ok(2));
        assert_eq!(match_position(&10, &values, MatchMode::Exact), Ok(1));
    }

    #[rstest]
    fn match_reports_missing_value() {
        let err = match_position(&50, &[10, 20], MatchMode::Exact).expect_err("no match");
        assert!(matches!(err, ValidationError::NotFound { operation: "MATCH", .. }));
    }

    #[rstest]
    #[case(MatchMode::NextSmaller)]
    #[case(MatchMode::NextLarger)]
    fn match_rejects_approximate_modes(#[case] mode: MatchMode) {
        assert_eq!(
            match_position(&10, &[10], mode),
            Err(ValidationError::UnsupportedMatchMode { mode })
        );
    }

    #[rstest]
    fn xlookup_requires_equal_lengths() {
        let err = xlookup(&1, &[1, 2], &["a"], None).expect_err("mismatch");
        assert!(matches!(err, ValidationError::LengthMismatch { .. }));
    }

    #[rstest]
    fn xlookup_without_fallback_fails() {
        let err = xlookup(&"Z", &["A"], &[1], None).expect_err("missing");
        assert!(matches!(err, ValidationError::NotFound { operation: "XLOOKUP", .. }));
    }

    #[rstest]
    #[case(4.56789, 2, 4.57)]
    #[case(4.56789, 0, 5.0)]
    #[case(123.456, -1, 120.0)]
    #[case(2.675_000_1, 2, 2.68)]
    fn round_to_matches_spreadsheet(
        #[case] value: f64,
        #[case] digits: i32,
        #[case] expected: f64,
    ) {
        assert!((round_to(value, digits) - expected).abs() < 1e-9);
    }
}
