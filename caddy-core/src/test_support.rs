//! Canned requests shared by unit, behaviour and CLI tests.

use crate::{
    ClubAdjustments, ClubCandidate, Handedness, Hazard, HazardKind, HazardSide, NaturalShape,
    PinPosition, ShotRequest, WindDirection,
};

fn candidate(name: &str, distance: f64, penalty: f64, club_type: &str) -> ClubCandidate {
    ClubCandidate {
        name: name.to_owned(),
        distance,
        is_hazardous: false,
        penalty,
        distance_label: format!("{distance}y"),
        club_type: club_type.to_owned(),
    }
}

/// A four-row request with a blank last row, a right-to-left breeze and water
/// left of the target.
///
/// The optimal pick is the `PW` and the runner-up the `8-Iron`.
#[must_use]
pub fn sample_request() -> ShotRequest {
    ShotRequest {
        clubs: [
            candidate("Driver", 280.0, 0.0, "Driver"),
            candidate("8-Iron", 140.0, 0.0, "Iron"),
            candidate("PW", 120.0, 0.0, "Wedge"),
            candidate("", 100.0, 0.0, ""),
        ]
        .into_iter()
        .collect(),
        wind_speed: Some(10.0),
        wind_direction: Some(WindDirection::CrossRightToLeft),
        base_shape: Some(5.0),
        handedness: Some(Handedness::Right),
        natural_shape: Some(NaturalShape::Fade),
        optimal: ClubAdjustments {
            carry: Some(120.0),
            shape_mult: Some(1.0),
            height_mult: Some(1.0),
            pin_distance: Some(20.0),
            stance_percent: Some(5.0),
        },
        second: ClubAdjustments {
            carry: Some(140.0),
            shape_mult: Some(1.0),
            height_mult: Some(1.0),
            pin_distance: Some(20.0),
            stance_percent: None,
        },
        target_carry: 120.0,
        hazards: vec![Hazard {
            kind: HazardKind::Water,
            side: HazardSide::Left,
            start_yard: 100.0,
            end_yard: 130.0,
        }],
        pin_position: Some(PinPosition::Below),
    }
}
