//! Recommend command implementation for the caddy CLI.

use caddy_core::{EngineConfig, Recommendation, ShotRequest, recommend};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_BUNKER_BIAS, ARG_REQUEST, ARG_SCORE_CENTRE, ARG_SCORE_SPREAD, ARG_STANCE_PERCENT,
    ARG_WATER_BIAS, CliError, ENV_REQUEST,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every club in a JSON-encoded shot request, pick the \
                 best and second-best clubs and work out where to aim each \
                 one. Engine weights can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Recommend clubs and aim lines for a shot"
)]
#[ortho_config(prefix = "CADDY")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a ShotRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Yards of bias contributed by water on one side.
    #[arg(long = ARG_WATER_BIAS, value_name = "yards")]
    #[serde(default)]
    pub(crate) water_bias: Option<f64>,
    /// Yards of bias contributed by bunkers on one side.
    #[arg(long = ARG_BUNKER_BIAS, value_name = "yards")]
    #[serde(default)]
    pub(crate) bunker_bias: Option<f64>,
    /// Stance percentage used when a club has none recorded.
    #[arg(long = ARG_STANCE_PERCENT, value_name = "percent")]
    #[serde(default)]
    pub(crate) stance_percent: Option<f64>,
    /// Distance at which the scoring curve halves.
    #[arg(long = ARG_SCORE_CENTRE, value_name = "yards")]
    #[serde(default)]
    pub(crate) score_centre: Option<f64>,
    /// Horizontal scale of the scoring curve decay.
    #[arg(long = ARG_SCORE_SPREAD, value_name = "yards")]
    #[serde(default)]
    pub(crate) score_spread: Option<f64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Engine constants with any overrides applied.
    pub(crate) engine: EngineConfig,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;

        let defaults = EngineConfig::default();
        let mut engine = defaults;
        engine.hazard_weights.water = args.water_bias.unwrap_or(defaults.hazard_weights.water);
        engine.hazard_weights.bunker = args.bunker_bias.unwrap_or(defaults.hazard_weights.bunker);
        engine.default_stance_percent = args
            .stance_percent
            .unwrap_or(defaults.default_stance_percent);
        engine.scoring.centre = args.score_centre.unwrap_or(defaults.scoring.centre);
        engine.scoring.spread = args.score_spread.unwrap_or(defaults.scoring.spread);
        engine.scoring = engine
            .scoring
            .validate()
            .map_err(CliError::InvalidEngineConfig)?;

        Ok(Self {
            request_path,
            engine,
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_recommend_with(&config, writer)
}

pub(crate) fn run_recommend_with(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendation = execute_recommend(config)?;
    write_recommendation(writer, &recommendation)
}

fn execute_recommend(config: &RecommendConfig) -> Result<Recommendation, CliError> {
    config.validate_sources()?;
    let request = load_shot_request(&config.request_path)?;
    recommend(&request, &config.engine).map_err(|source| CliError::Recommend {
        path: config.request_path.clone(),
        source,
    })
}

/// Loads a JSON-encoded [`ShotRequest`] from disk.
pub(crate) fn load_shot_request(path: &Utf8Path) -> Result<ShotRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenShotRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseShotRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_recommendation(
    writer: &mut dyn Write,
    recommendation: &Recommendation,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(recommendation)
        .map_err(CliError::SerialiseRecommendation)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
