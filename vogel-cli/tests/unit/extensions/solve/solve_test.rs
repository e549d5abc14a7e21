use super::*;
use crate::extensions::solve::config::OutputConfig;

const BALANCED_PROBLEM: &str = r#"{
  "sources": [ { "id": "s1", "supply": 10 }, { "id": "s2", "supply": 10 } ],
  "destinations": [ { "id": "d1", "demand": 8 }, { "id": "d2", "demand": 12 } ],
  "costs": [ [4, 6], [5, 3] ]
}"#;

const DEGENERATE_PROBLEM: &str = r#"{
  "sources": [ { "id": "s1", "supply": 0 } ],
  "destinations": [ { "id": "d1", "demand": 0 } ],
  "costs": [ [1] ]
}"#;

fn create_readers(problems: &[&'static str]) -> Vec<BufReader<&'static [u8]>> {
    problems.iter().map(|problem| BufReader::new(problem.as_bytes())).collect()
}

#[test]
fn can_solve_single_problem() {
    let solutions = solve_pragmatic_problems(create_readers(&[BALANCED_PROBLEM]), &SolveOptions::default()).unwrap();

    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].statistic.cost, 74.);
}

#[test]
fn can_solve_many_problems_keeping_order() {
    let options = SolveOptions { check: true, ..SolveOptions::default() };

    let solutions =
        solve_pragmatic_problems(create_readers(&[DEGENERATE_PROBLEM, BALANCED_PROBLEM, DEGENERATE_PROBLEM]), &options)
            .unwrap();

    let costs = solutions.iter().map(|solution| solution.statistic.cost).collect::<Vec<_>>();
    assert_eq!(costs, vec![0., 74., 0.]);
    assert_eq!(solutions[0].statistic.steps, 0);
}

#[test]
fn can_write_steps_when_configured() {
    let config = Config {
        output: Some(OutputConfig { include_slack: None, include_steps: Some(true) }),
        ..Config::default()
    };
    let options = SolveOptions { config, check: false };

    let mut buffer = Vec::new();
    solve_pragmatic(create_readers(&[BALANCED_PROBLEM]), &options, BufWriter::new(&mut buffer)).unwrap();

    let json = String::from_utf8(buffer).unwrap();
    assert!(json.trim_start().starts_with('{'));
    assert!(json.contains("\"steps\": ["));
}

#[test]
fn can_write_many_solutions_as_array() {
    let mut buffer = Vec::new();
    let readers = create_readers(&[BALANCED_PROBLEM, BALANCED_PROBLEM]);

    solve_pragmatic(readers, &SolveOptions::default(), BufWriter::new(&mut buffer)).unwrap();

    let solutions: Vec<Solution> = serde_json::from_slice(buffer.as_slice()).unwrap();
    assert_eq!(solutions.len(), 2);
}

#[test]
fn can_return_error_on_invalid_json() {
    let err = solve_pragmatic_problems(create_readers(&["{"]), &SolveOptions::default()).expect_err("should fail");

    assert!(err.to_string().starts_with("cannot read problem #0"));
    assert!(err.to_string().contains("E0000"));
}

#[test]
fn can_return_error_on_no_problems() {
    let readers: Vec<BufReader<&[u8]>> = vec![];

    assert!(solve_pragmatic_problems(readers, &SolveOptions::default()).is_err());
}
