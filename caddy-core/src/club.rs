//! Club candidates and the column layout the scoring steps operate on.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ValidationError, validate_parallel};

/// One club under consideration for the current shot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClubCandidate {
    /// Display name; a blank name marks an unused row.
    pub name: String,
    /// Distance the club would leave or carry, in yards.
    pub distance: f64,
    /// Whether playing this club brings a hazard into play.
    pub is_hazardous: bool,
    /// Score penalty subtracted after the curve is applied.
    pub penalty: f64,
    /// Human-readable distance, e.g. `"230y"`.
    pub distance_label: String,
    /// Club family, e.g. `"Wood"`.
    pub club_type: String,
}

/// Column-oriented club table: parallel vectors tied together by index.
///
/// # Examples
/// ```
/// use caddy_core::{ClubCandidate, ClubColumns};
///
/// let columns: ClubColumns = [ClubCandidate {
///     name: "7-Iron".into(),
///     distance: 150.0,
///     is_hazardous: false,
///     penalty: 0.0,
///     distance_label: "150y".into(),
///     club_type: "Iron".into(),
/// }]
/// .into_iter()
/// .collect();
/// assert_eq!(columns.len(), 1);
/// assert!(columns.validate("demo").is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClubColumns {
    /// Club names.
    pub names: Vec<String>,
    /// Hazard flags.
    pub hazard_flags: Vec<bool>,
    /// Distances in yards.
    pub distances: Vec<f64>,
    /// Score penalties.
    pub penalties: Vec<f64>,
    /// Distance labels.
    pub distance_labels: Vec<String>,
    /// Club types.
    pub club_types: Vec<String>,
}

impl ClubColumns {
    /// Number of rows, taken from the name column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Report whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Validate that all six columns share a non-zero length.
    ///
    /// # Errors
    /// Propagates [`validate_parallel`] failures tagged with `operation`.
    pub fn validate(&self, operation: &'static str) -> Result<(), ValidationError> {
        validate_parallel(
            operation,
            &[
                self.names.len(),
                self.hazard_flags.len(),
                self.distances.len(),
                self.penalties.len(),
                self.distance_labels.len(),
                self.club_types.len(),
            ],
        )
    }

    /// Append a candidate as a new row.
    pub fn push(&mut self, candidate: ClubCandidate) {
        self.names.push(candidate.name);
        self.hazard_flags.push(candidate.is_hazardous);
        self.distances.push(candidate.distance);
        self.penalties.push(candidate.penalty);
        self.distance_labels.push(candidate.distance_label);
        self.club_types.push(candidate.club_type);
    }
}

impl FromIterator<ClubCandidate> for ClubColumns {
    fn from_iter<I: IntoIterator<Item = ClubCandidate>>(iter: I) -> Self {
        let mut columns = Self::default();
        for candidate in iter {
            columns.push(candidate);
        }
        columns
    }
}

/// Identifying fields copied out of the winning row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClubSelection {
    /// Club name.
    pub club: String,
    /// Distance label.
    pub distance_label: String,
    /// Club type.
    pub club_type: String,
}
