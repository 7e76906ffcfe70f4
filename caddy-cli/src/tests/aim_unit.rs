//! Unit tests for the aim subcommand.

use super::aim::{AimArgs, aim_line, run_aim};
use super::*;
use rstest::rstest;

fn parse_aim(argv: &[&str]) -> AimArgs {
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    match cli.command {
        Command::Aim(args) => args,
        Command::Recommend(_) => panic!("expected aim command"),
    }
}

#[rstest]
#[case(&["caddy", "aim", "--wind", "5.5", "--hazard", "-2", "--stance", "1.5"], "Aim RIGHT 5 yds")]
#[case(&["caddy", "aim", "--wind", "-4.2", "--hazard=-1.5"], "Aim LEFT 6 yds")]
#[case(&["caddy", "aim", "--wind", "0"], "Aim CENTER")]
#[case(&["caddy", "aim", "--stance", "3"], "")]
#[case(&["caddy", "aim", "--wind", "n/a", "--hazard", "4"], "Aim RIGHT 4 yds")]
#[case(&["caddy", "aim", "--wind", " ", "--hazard", ""], "Aim CENTER")]
fn aim_lines_follow_the_terms(#[case] argv: &[&str], #[case] expected: &str) {
    assert_eq!(aim_line(&parse_aim(argv)), expected);
}

#[rstest]
fn run_aim_writes_a_single_line() {
    let args = AimArgs {
        wind: "-5.7".to_owned(),
        ..AimArgs::default()
    };
    let mut stdout = Vec::new();
    run_aim(&args, &mut stdout).expect("aim should succeed");
    assert_eq!(String::from_utf8(stdout).expect("utf-8"), "Aim LEFT 6 yds\n");
}

#[rstest]
fn blank_terms_print_an_empty_line() {
    let mut stdout = Vec::new();
    run_aim(&AimArgs::default(), &mut stdout).expect("aim should succeed");
    assert_eq!(stdout, b"\n");
}
