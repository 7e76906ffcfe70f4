//! Facade crate for the caddy recommendation engine.
//!
//! This crate re-exports the core domain types and the orchestrator so callers
//! depend on a single crate.

#![forbid(unsafe_code)]

pub use caddy_core::{
    AimDirection, AimDirective, ClubAdjustments, ClubCandidate, ClubColumns, ClubSelection,
    EngineConfig, Handedness, Hazard, HazardKind, HazardSide, HazardWeights, NaturalShape,
    PinPosition, RecommendError, Recommendation, Score, ScoringCurve, ShotPlan, ShotRequest,
    ValidationError, Weather, WeatherImpact, WindDirection, aim_directive, recommend,
    weather_impact,
};

#[cfg(feature = "test-support")]
pub use caddy_core::test_support;
