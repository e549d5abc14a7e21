#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use std::io::BufReader;
use vogel_cli::extensions::solve::config::read_config;
use vogel_cli::extensions::solve::{SolveOptions, solve_pragmatic};

const FORMAT_ARG_NAME: &str = "FORMAT";
const PROBLEM_ARG_NAME: &str = "PROBLEM";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";
const INCLUDE_SLACK_ARG_NAME: &str = "include-slack";
const INCLUDE_STEPS_ARG_NAME: &str = "include-steps";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves transportation problems using Vogel's approximation method")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem type")
                .required(true)
                .value_parser(["pragmatic"])
                .index(1),
        )
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Sets the problem files to use, several problems are solved in parallel")
                .required(true)
                .num_args(1..)
                .index(2),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to solver config file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether solver should log its progress")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether final solution should be checked for feasibility")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(INCLUDE_SLACK_ARG_NAME)
                .help("Writes quantities assigned to the dummy source or destination")
                .long(INCLUDE_SLACK_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(INCLUDE_STEPS_ARG_NAME)
                .help("Writes allocation steps")
                .long(INCLUDE_STEPS_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(matches: &ArgMatches) -> Result<(), String> {
    let options = get_solve_options(matches)?;

    let problem_files = matches
        .get_many::<String>(PROBLEM_ARG_NAME)
        .map(|paths| {
            paths.map(|path| open_file(path, "problem").map(BufReader::new)).collect::<Result<Vec<_>, String>>()
        })
        .transpose()?
        .unwrap_or_default();

    let out_buffer = create_out_buffer(matches, OUT_RESULT_ARG_NAME)?;

    solve_pragmatic(problem_files, &options, out_buffer).map_err(|err| format!("cannot solve problem: {err}"))
}

fn get_solve_options(matches: &ArgMatches) -> Result<SolveOptions, String> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| {
            open_file(path, "config")
                .and_then(|file| read_config(BufReader::new(file)).map_err(|err| err.to_string()))
        })
        .transpose()?
        .unwrap_or_default();

    let config = if matches.get_flag(LOG_ARG_NAME) { config.with_logging() } else { config };
    let config = config.with_output(matches.get_flag(INCLUDE_SLACK_ARG_NAME), matches.get_flag(INCLUDE_STEPS_ARG_NAME));

    Ok(SolveOptions { config, check: matches.get_flag(CHECK_ARG_NAME) })
}
