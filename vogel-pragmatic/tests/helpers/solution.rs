use crate::format::problem::*;
use crate::format::solution::*;
use std::io::BufWriter;
use vogel_core::prelude::Solver;

pub fn solve_problem(problem: Problem, options: &WriterOptions) -> Solution {
    let core_problem = problem.clone().read_pragmatic().expect("cannot read problem");
    let solution = Solver::default().solve(&core_problem);

    create_solution(&problem, &solution, options)
}

pub fn solve_problem_as_json(problem: &Problem, options: &WriterOptions) -> String {
    let core_problem = problem.clone().read_pragmatic().expect("cannot read problem");
    let solution = Solver::default().solve(&core_problem);

    let mut buffer = Vec::new();
    solution.write_pragmatic_json(problem, BufWriter::new(&mut buffer), options).expect("cannot write solution");

    String::from_utf8(buffer).expect("invalid utf8")
}

pub fn all_options() -> WriterOptions {
    WriterOptions { include_slack: true, include_steps: true }
}
