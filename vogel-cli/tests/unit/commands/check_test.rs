use super::*;

const PROBLEM_PATH: &str = "../data/pragmatic/balanced.problem.json";
const SOLUTION_PATH: &str = "../data/pragmatic/balanced.solution.json";
const INFEASIBLE_SOLUTION_PATH: &str = "../data/pragmatic/balanced.infeasible.solution.json";

fn run_check_with(solution_path: &str) -> Result<(), String> {
    let args = vec!["check", "pragmatic", "--problem-file", PROBLEM_PATH, "--solution-file", solution_path];
    let matches = get_check_app().try_get_matches_from(args).unwrap();

    run_check(&matches)
}

#[test]
fn can_run_check_solution() {
    assert_eq!(run_check_with(SOLUTION_PATH), Ok(()));
}

#[test]
fn can_report_infeasible_solution() {
    let err = run_check_with(INFEASIBLE_SOLUTION_PATH).expect_err("should fail");

    assert!(err.starts_with("checker found"));
    assert!(err.contains("supply violation"));
    assert!(err.contains("shipped total mismatch, expected: 20, got: 21"));
    assert!(err.contains("cost mismatch, expected: 78, got: 70"));
}

#[test]
fn can_require_solution_file() {
    let args = vec!["check", "pragmatic", "--problem-file", PROBLEM_PATH];

    assert!(get_check_app().try_get_matches_from(args).is_err());
}
