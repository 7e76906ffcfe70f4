//! Command-line interface for the caddy recommendation engine.
//!
//! `caddy recommend <request.json>` scores a JSON-encoded shot request and
//! prints the recommendation as pretty JSON. `caddy aim` folds individual
//! offset terms into a single aim instruction.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod aim;
mod error;
mod fs;
mod recommend;

pub use error::CliError;

use aim::{AimArgs, run_aim};
use recommend::{RecommendArgs, run_recommend};

const ARG_REQUEST: &str = "request";
const ARG_WATER_BIAS: &str = "water-bias";
const ARG_BUNKER_BIAS: &str = "bunker-bias";
const ARG_STANCE_PERCENT: &str = "stance-percent";
const ARG_SCORE_CENTRE: &str = "score-centre";
const ARG_SCORE_SPREAD: &str = "score-spread";
const ARG_WIND: &str = "wind";
const ARG_HAZARD: &str = "hazard";
const ARG_STANCE: &str = "stance";
const ENV_REQUEST: &str = "CADDY_CMDS_RECOMMEND_REQUEST_PATH";

/// Run the caddy CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration cannot be resolved,
/// the request cannot be read or scored, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Recommend(args) => run_recommend(args, &mut stdout),
        Command::Aim(args) => run_aim(&args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "caddy",
    about = "Club selection and aim advice for the next golf shot",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend the best and second-best club for a shot request.
    Recommend(RecommendArgs),
    /// Combine wind, hazard and stance offsets into an aim instruction.
    Aim(AimArgs),
}

#[cfg(test)]
mod tests;
