#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, Command};
use std::io::BufReader;
use vogel_cli::extensions::check::check_pragmatic_solution;

const FORMAT_ARG_NAME: &str = "FORMAT";
const PROBLEM_ARG_NAME: &str = "problem-file";
const SOLUTION_ARG_NAME: &str = "solution-file";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check solution feasibility")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies input type")
                .required(true)
                .value_parser(["pragmatic"])
                .index(1),
        )
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Sets input file which contains a problem definition")
                .short('p')
                .long(PROBLEM_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets solution file")
                .short('s')
                .long(SOLUTION_ARG_NAME)
                .required(true),
        )
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let problem_file = matches.get_one::<String>(PROBLEM_ARG_NAME).map(|path| open_file(path, "problem")).transpose()?;
    let solution_file =
        matches.get_one::<String>(SOLUTION_ARG_NAME).map(|path| open_file(path, "solution")).transpose()?;

    match (problem_file, solution_file) {
        (Some(problem_file), Some(solution_file)) => {
            check_pragmatic_solution(BufReader::new(problem_file), BufReader::new(solution_file))
        }
        _ => Err(vec!["pragmatic format expects one problem and one solution file".to_string()]),
    }
    .map_err(|err| format!("checker found {} errors:\n{}", err.len(), err.join("\n")))
}
