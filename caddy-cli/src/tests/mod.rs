//! Shared test harness modules for the caddy CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod aim_unit;
mod helpers;
mod recommend_unit;
