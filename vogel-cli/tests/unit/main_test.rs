use crate::cli::{get_app, run_subcommand};
use std::io::BufReader;
use vogel_pragmatic::format::solution::deserialize_solution;

const PRAGMATIC_PROBLEM_PATH: &str = "../data/pragmatic/balanced.problem.json";

#[test]
fn can_parse_all_subcommands() {
    let app = get_app();

    let names = app.get_subcommands().map(|command| command.get_name().to_string()).collect::<Vec<_>>();

    assert_eq!(names, vec!["solve", "check", "import", "generate"]);
}

#[test]
fn can_run_solve_subcommand() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = vec!["vogel-cli", "solve", "pragmatic", PRAGMATIC_PROBLEM_PATH, "-o", tmpfile.path().to_str().unwrap()];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches);

    let solution = deserialize_solution(BufReader::new(tmpfile.as_file())).unwrap();
    assert_eq!(solution.statistic.cost, 74.);
}

#[test]
fn can_reject_unknown_format() {
    let args = vec!["vogel-cli", "solve", "solomon", PRAGMATIC_PROBLEM_PATH];

    assert!(get_app().try_get_matches_from(args).is_err());
}
