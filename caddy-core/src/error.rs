//! Error types raised by the recommendation engine.
//!
//! Every engine operation fails with [`ValidationError`]. The orchestrator
//! wraps whatever its sub-steps report in [`RecommendError`] so callers see a
//! single error type naming the failing context.

use thiserror::Error;

/// Input rejected by an engine operation.
///
/// Each variant names the operation that refused the input so messages stay
/// traceable once wrapped by [`RecommendError`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Parallel columns were supplied with differing lengths.
    #[error("{operation}: all input arrays must have the same length (got {lengths:?})")]
    LengthMismatch {
        /// Operation that validated the columns.
        operation: &'static str,
        /// Observed column lengths, in argument order.
        lengths: Vec<usize>,
    },
    /// Every supplied column was empty.
    #[error("{operation}: input arrays cannot be empty")]
    EmptyInput {
        /// Operation that validated the columns.
        operation: &'static str,
    },
    /// `MAX` found no numeric entries.
    #[error("MAX: no numeric values found")]
    NoNumericValues,
    /// An `INDEX` position fell outside the array.
    #[error("INDEX: index {index} is out of bounds for array of length {len}")]
    IndexOutOfBounds {
        /// Requested 1-based position.
        index: usize,
        /// Length of the indexed array.
        len: usize,
    },
    /// `MATCH` was asked for anything other than an exact match.
    #[error("MATCH: only exact match is supported (requested {mode:?})")]
    UnsupportedMatchMode {
        /// Mode the caller requested.
        mode: crate::lookup::MatchMode,
    },
    /// An exact-match lookup found nothing and had no fallback.
    #[error("{operation}: value {value} not found")]
    NotFound {
        /// Lookup that failed.
        operation: &'static str,
        /// Debug rendering of the searched value.
        value: String,
    },
    /// The score column held no usable scores.
    #[error("findMaxScore: no valid numeric scores found")]
    NoValidScores,
    /// Fewer than two numeric scores were available for second-best selection.
    #[error("findSecondMaxScore: need at least 2 valid scores (found {found})")]
    TooFewScores {
        /// Number of numeric scores present.
        found: usize,
    },
    /// Every numeric score was identical, so no distinct second value exists.
    #[error("findSecondMaxScore: all scores are identical")]
    IdenticalScores,
    /// A wind parameter was absent.
    #[error("calculateWindOffset: missing required parameter: {0}")]
    MissingParameter(&'static str),
    /// Hazard bias was requested without a usable target carry.
    #[error("calculateHazardBias: target carry must be a non-zero number")]
    MissingTargetCarry,
    /// The scoring curve cannot produce finite scores.
    #[error("scoring curve requires a finite positive {field} (got {value})")]
    InvalidScoringCurve {
        /// Offending curve field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A textual enum value was not recognised.
    #[error("unknown {kind} '{value}'")]
    UnknownVariant {
        /// Name of the enum being parsed.
        kind: &'static str,
        /// Rejected input text.
        value: String,
    },
}

impl ValidationError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Failure raised by [`recommend`](crate::recommend).
///
/// No partial recommendation accompanies the error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("calculateComplete: {source}")]
pub struct RecommendError {
    /// Sub-step failure that aborted the recommendation.
    #[source]
    pub source: ValidationError,
}

impl From<ValidationError> for RecommendError {
    fn from(source: ValidationError) -> Self {
        Self { source }
    }
}
