//! Behavioural coverage for the recommendation orchestrator.

use std::cell::RefCell;

use caddy_core::{
    ClubAdjustments, ClubCandidate, ClubColumns, EngineConfig, Handedness, Hazard, HazardKind,
    HazardSide, NaturalShape, RecommendError, Recommendation, ShotRequest, ValidationError,
    WindDirection, recommend,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

type Outcome = Option<Result<Recommendation, RecommendError>>;

fn adjustments(carry: f64) -> ClubAdjustments {
    ClubAdjustments {
        carry: Some(carry),
        shape_mult: Some(1.0),
        height_mult: Some(1.0),
        ..ClubAdjustments::default()
    }
}

#[fixture]
fn request() -> RefCell<ShotRequest> {
    RefCell::new(ShotRequest {
        clubs: ClubColumns::default(),
        wind_speed: None,
        wind_direction: None,
        base_shape: None,
        handedness: None,
        natural_shape: None,
        optimal: ClubAdjustments::default(),
        second: ClubAdjustments::default(),
        target_carry: 120.0,
        hazards: Vec::new(),
        pin_position: None,
    })
}

#[fixture]
fn outcome() -> RefCell<Outcome> {
    RefCell::new(None)
}

#[given("a bag of Driver, 8-Iron and PW with a blank row")]
fn given_bag(#[from(request)] request: &RefCell<ShotRequest>) {
    let row = |name: &str, distance: f64| ClubCandidate {
        name: name.to_owned(),
        distance,
        is_hazardous: false,
        penalty: 0.0,
        distance_label: format!("{distance}y"),
        club_type: "Club".to_owned(),
    };
    let mut shot = request.borrow_mut();
    shot.clubs = [
        row("Driver", 280.0),
        row("8-Iron", 140.0),
        row("PW", 120.0),
        row("", 100.0),
    ]
    .into_iter()
    .collect();
    shot.optimal = adjustments(120.0);
    shot.second = adjustments(140.0);
}

#[given("a calm day for a right-handed player hitting it straight")]
fn given_calm(#[from(request)] request: &RefCell<ShotRequest>) {
    let mut shot = request.borrow_mut();
    shot.wind_speed = Some(0.0);
    shot.wind_direction = Some(WindDirection::Calm);
    shot.base_shape = Some(5.0);
    shot.handedness = Some(Handedness::Right);
    shot.natural_shape = Some(NaturalShape::Straight);
}

#[given("a 10 mph wind from left to right for a right-handed draw")]
fn given_crosswind(#[from(request)] request: &RefCell<ShotRequest>) {
    let mut shot = request.borrow_mut();
    shot.wind_speed = Some(10.0);
    shot.wind_direction = Some(WindDirection::CrossLeftToRight);
    shot.base_shape = Some(5.0);
    shot.handedness = Some(Handedness::Right);
    shot.natural_shape = Some(NaturalShape::Draw);
}

#[given("water left of the target")]
fn given_water(#[from(request)] request: &RefCell<ShotRequest>) {
    request.borrow_mut().hazards.push(Hazard {
        kind: HazardKind::Water,
        side: HazardSide::Left,
        start_yard: 110.0,
        end_yard: 130.0,
    });
}

#[given("the PW brings a hazard into play")]
fn given_hazardous_wedge(#[from(request)] request: &RefCell<ShotRequest>) {
    let mut shot = request.borrow_mut();
    if let Some(flag) = shot.clubs.hazard_flags.get_mut(2) {
        *flag = true;
    }
    shot.optimal = adjustments(140.0);
    shot.second = adjustments(280.0);
}

#[given("the penalty column is missing a row")]
fn given_ragged(#[from(request)] request: &RefCell<ShotRequest>) {
    request.borrow_mut().clubs.penalties.pop();
}

#[when("I request a recommendation")]
fn when_recommend(
    #[from(request)] request: &RefCell<ShotRequest>,
    #[from(outcome)] outcome: &RefCell<Outcome>,
) {
    let result = recommend(&request.borrow(), &EngineConfig::default());
    outcome.replace(Some(result));
}

fn recommendation(outcome: &RefCell<Outcome>) -> Recommendation {
    match outcome.borrow().as_ref() {
        Some(Ok(recommendation)) => recommendation.clone(),
        other => panic!("expected a recommendation, found {other:?}"),
    }
}

#[then("the optimal club is {club}")]
fn then_optimal(club: String, #[from(outcome)] outcome: &RefCell<Outcome>) {
    assert_eq!(recommendation(outcome).optimal.club.club, club);
}

#[then("the second club is {club}")]
fn then_second(club: String, #[from(outcome)] outcome: &RefCell<Outcome>) {
    assert_eq!(recommendation(outcome).second.club.club, club);
}

#[then("the optimal directive is {directive}")]
fn then_directive(directive: String, #[from(outcome)] outcome: &RefCell<Outcome>) {
    let rendered = recommendation(outcome)
        .optimal
        .directive
        .map(|aim| aim.to_string());
    assert_eq!(rendered.as_deref(), Some(directive.as_str()));
}

#[then("the recommendation fails with a length mismatch")]
fn then_length_mismatch(#[from(outcome)] outcome: &RefCell<Outcome>) {
    match outcome.borrow().as_ref() {
        Some(Err(err)) => {
            assert!(matches!(err.source, ValidationError::LengthMismatch { .. }));
            assert!(err.to_string().starts_with("calculateComplete: "));
        }
        other => panic!("expected a failure, found {other:?}"),
    }
}

#[scenario(path = "tests/features/recommendation.feature", index = 0)]
fn calm_day(request: RefCell<ShotRequest>, outcome: RefCell<Outcome>) {
    let _ = (request, outcome);
}

#[scenario(path = "tests/features/recommendation.feature", index = 1)]
fn water_left(request: RefCell<ShotRequest>, outcome: RefCell<Outcome>) {
    let _ = (request, outcome);
}

#[scenario(path = "tests/features/recommendation.feature", index = 2)]
fn hazardous_club(request: RefCell<ShotRequest>, outcome: RefCell<Outcome>) {
    let _ = (request, outcome);
}

#[scenario(path = "tests/features/recommendation.feature", index = 3)]
fn crosswind_and_draw(request: RefCell<ShotRequest>, outcome: RefCell<Outcome>) {
    let _ = (request, outcome);
}

#[scenario(path = "tests/features/recommendation.feature", index = 4)]
fn ragged_columns(request: RefCell<ShotRequest>, outcome: RefCell<Outcome>) {
    let _ = (request, outcome);
}
