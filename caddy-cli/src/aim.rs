//! Aim command implementation for the caddy CLI.

use caddy_core::{aim_directive, parse_offset, total_aim_offset};
use clap::Parser;
use std::io::Write;

use crate::{ARG_HAZARD, ARG_STANCE, ARG_WIND, CliError};

/// CLI arguments for the `aim` subcommand.
///
/// Terms are taken as text so a blank value behaves like an empty cell.
#[derive(Debug, Clone, Parser, Default)]
#[command(
    long_about = "Combine the wind, hazard and stance offsets (yards, \
                 positive to the right) into one aim instruction. Blank \
                 terms are ignored; when both the wind and hazard terms are \
                 blank nothing is printed.",
    about = "Render an aim instruction from offset terms"
)]
pub(crate) struct AimArgs {
    /// Wind offset in yards.
    #[arg(long = ARG_WIND, value_name = "yards", allow_hyphen_values = true, default_value = "")]
    pub(crate) wind: String,
    /// Hazard bias in yards.
    #[arg(long = ARG_HAZARD, value_name = "yards", allow_hyphen_values = true, default_value = "")]
    pub(crate) hazard: String,
    /// Stance offset in yards.
    #[arg(long = ARG_STANCE, value_name = "yards", allow_hyphen_values = true, default_value = "")]
    pub(crate) stance: String,
}

/// Render the aim line for `args`; blank when no total can be formed.
pub(crate) fn aim_line(args: &AimArgs) -> String {
    let total = total_aim_offset(
        parse_offset(&args.wind),
        parse_offset(&args.hazard),
        parse_offset(&args.stance),
    );
    aim_directive(total)
        .map(|directive| directive.to_string())
        .unwrap_or_default()
}

pub(crate) fn run_aim(args: &AimArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let line = aim_line(args);
    writer
        .write_all(line.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
