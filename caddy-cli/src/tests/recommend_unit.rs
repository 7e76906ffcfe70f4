//! Focused unit tests covering recommend CLI configuration and request
//! loading.

use super::helpers::{Workspace, write_sample_request, write_utf8};
use super::recommend::{
    RecommendArgs, RecommendConfig, config_from_layers_for_test, load_shot_request,
    run_recommend_with,
};
use super::*;
use caddy_core::{EngineConfig, Recommendation, ValidationError};
use camino::Utf8PathBuf;
use rstest::rstest;

fn config_for(request_path: Utf8PathBuf) -> RecommendConfig {
    RecommendConfig {
        request_path,
        engine: EngineConfig::default(),
    }
}

#[rstest]
fn converting_without_request_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn overrides_replace_engine_defaults() {
    let args = RecommendArgs {
        request_path: Some("request.json".into()),
        water_bias: Some(20.0),
        stance_percent: Some(4.0),
        score_spread: Some(30.0),
        ..RecommendArgs::default()
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    let defaults = EngineConfig::default();
    assert_eq!(config.engine.hazard_weights.water, 20.0);
    assert_eq!(config.engine.hazard_weights.bunker, defaults.hazard_weights.bunker);
    assert_eq!(config.engine.default_stance_percent, 4.0);
    assert_eq!(config.engine.scoring.spread, 30.0);
    assert_eq!(config.engine.scoring.centre, defaults.scoring.centre);
}

#[rstest]
#[case(0.0)]
#[case(-5.0)]
#[case(f64::NAN)]
fn unusable_spread_is_rejected(#[case] spread: f64) {
    let args = RecommendArgs {
        request_path: Some("request.json".into()),
        score_spread: Some(spread),
        ..RecommendArgs::default()
    };
    let err = RecommendConfig::try_from(args).expect_err("spread should be rejected");
    match err {
        CliError::InvalidEngineConfig(ValidationError::InvalidScoringCurve { field, .. }) => {
            assert_eq!(field, "spread");
        }
        other => panic!("expected InvalidEngineConfig, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let workspace = Workspace::new();
    let config = config_for(workspace.path("missing.json"));
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_REQUEST),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    std::fs::create_dir(&request_path).expect("request directory");
    let err = config_for(request_path.clone())
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_shot_request_decodes_json() {
    let workspace = Workspace::new();
    let request_path = write_sample_request(&workspace);
    let decoded = load_shot_request(&request_path).expect("request should decode");
    assert_eq!(decoded, caddy_core::test_support::sample_request());
}

#[rstest]
fn load_shot_request_rejects_invalid_json() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_utf8(&request_path, b"{ not valid json");
    let err = load_shot_request(&request_path).expect_err("invalid json should error");
    match err {
        CliError::ParseShotRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_shot_request_io_error_returns_open_error() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    let err = load_shot_request(&request_path).expect_err("missing request should error");
    match err {
        CliError::OpenShotRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenShotRequest, found {other:?}"),
    }
}

#[rstest]
fn recommend_prints_pretty_json() {
    let workspace = Workspace::new();
    let config = config_for(write_sample_request(&workspace));
    let mut stdout = Vec::new();
    run_recommend_with(&config, &mut stdout).expect("recommendation should succeed");

    let text = String::from_utf8(stdout).expect("stdout utf-8");
    assert!(text.ends_with("}\n"));
    let recommendation: Recommendation = serde_json::from_str(&text).expect("recommendation JSON");
    assert_eq!(recommendation.optimal.club.club, "PW");
    assert_eq!(recommendation.second.club.club, "8-Iron");
    assert_eq!(
        recommendation.optimal.directive.map(|d| d.to_string()).as_deref(),
        Some("Aim RIGHT 16 yds")
    );
}

#[rstest]
fn water_bias_override_moves_the_aim_line() {
    let workspace = Workspace::new();
    let mut config = config_for(write_sample_request(&workspace));
    config.engine.hazard_weights.water = 20.0;
    let mut stdout = Vec::new();
    run_recommend_with(&config, &mut stdout).expect("recommendation should succeed");

    let recommendation: Recommendation =
        serde_json::from_slice(&stdout).expect("recommendation JSON");
    assert_eq!(recommendation.hazard_bias, 20.0);
    assert_eq!(
        recommendation.optimal.directive.map(|d| d.to_string()).as_deref(),
        Some("Aim RIGHT 26 yds")
    );
}

#[rstest]
fn engine_failures_name_the_request() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    let mut request = caddy_core::test_support::sample_request();
    request.clubs.penalties.pop();
    let payload = serde_json::to_string(&request).expect("serialise request");
    write_utf8(&request_path, payload.as_bytes());

    let err = run_recommend_with(&config_for(request_path.clone()), &mut Vec::new())
        .expect_err("ragged columns should fail");
    match err {
        CliError::Recommend { path, source } => {
            assert_eq!(path, request_path);
            assert!(matches!(source.source, ValidationError::LengthMismatch { .. }));
        }
        other => panic!("expected Recommend, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "request_path": "from-file.json",
            "water_bias": 12.0,
            "bunker_bias": 4.0,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": "from-env.json",
        "water_bias": 14.0,
    }));
    composer.push_cli(json!({ "water_bias": 16.0 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.engine.hazard_weights.water, 16.0);
    assert_eq!(config.engine.hazard_weights.bunker, 4.0);
    assert_eq!(config.engine.scoring, EngineConfig::default().scoring);
}
