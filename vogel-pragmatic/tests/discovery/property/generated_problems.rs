use crate::checker::CheckerContext;
use crate::format::problem::*;
use crate::format::solution::*;
use crate::generator::*;
use crate::helpers::{all_options, solve_problem};
use proptest::prelude::*;
use vogel_core::prelude::{Float, Solver};
use vogel_core::utils::is_close;

fn totals(problem: &Problem) -> (Float, Float) {
    (
        problem.sources.iter().map(|source| source.supply).sum(),
        problem.destinations.iter().map(|destination| destination.demand).sum(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn can_conserve_capacities(problem in generate_problem(8, 8)) {
        let (total_supply, total_demand) = totals(&problem);
        let solution = solve_problem(problem.clone(), &all_options());

        let shipped: Float = solution.allocation.iter().flatten().sum();
        prop_assert!(is_close(shipped, total_supply.min(total_demand), 1E-9));

        for (source, row) in problem.sources.iter().zip(solution.allocation.iter()) {
            prop_assert!(row.iter().sum::<Float>() <= source.supply + 1E-9);
        }

        for (col, destination) in problem.destinations.iter().enumerate() {
            let received: Float = solution.allocation.iter().map(|row| row[col]).sum();
            prop_assert!(received <= destination.demand + 1E-9);
        }
    }

    #[test]
    fn can_fully_allocate_balanced_problem(problem in generate_balanced_problem(8, 8)) {
        let solution = solve_problem(problem.clone(), &all_options());

        for (source, row) in problem.sources.iter().zip(solution.allocation.iter()) {
            prop_assert!(is_close(row.iter().sum::<Float>(), source.supply, 1E-9));
        }

        for (col, destination) in problem.destinations.iter().enumerate() {
            let received: Float = solution.allocation.iter().map(|row| row[col]).sum();
            prop_assert!(is_close(received, destination.demand, 1E-9));
        }

        prop_assert!(solution.slack.is_none());
    }

    #[test]
    fn can_keep_allocation_non_negative_and_cost_consistent(problem in generate_problem(8, 8)) {
        let solution = solve_problem(problem.clone(), &all_options());

        prop_assert!(solution.allocation.iter().flatten().all(|&quantity| quantity >= 0.));

        let expected: Float = solution
            .allocation
            .iter()
            .zip(problem.costs.iter())
            .flat_map(|(quantities, costs)| quantities.iter().zip(costs.iter()).map(|(q, c)| q * c))
            .sum();
        prop_assert_eq!(solution.statistic.cost, expected);
    }

    #[test]
    fn can_limit_amount_of_steps(problem in generate_sparse_problem(8, 8)) {
        let solution = solve_problem(problem.clone(), &all_options());
        let steps = solution.steps.as_ref().map_or(0, |steps| steps.len());

        // every step, including a zero quantity one, exhausts at least one line of the balanced problem
        // and the last one exhausts two, while balancing adds at most one line
        prop_assert!(steps <= problem.sources.len() + problem.destinations.len());
    }

    #[test]
    fn can_solve_problems_with_many_zero_capacities(problem in generate_sparse_problem(8, 8)) {
        let (total_supply, total_demand) = totals(&problem);
        let solution = solve_problem(problem.clone(), &all_options());

        let shipped: Float = solution.allocation.iter().flatten().sum();
        prop_assert_eq!(shipped, total_supply.min(total_demand));

        for (source, row) in problem.sources.iter().zip(solution.allocation.iter()) {
            if source.supply == 0. {
                prop_assert!(row.iter().all(|&quantity| quantity == 0.));
            }
        }

        let result = CheckerContext::new(problem, solution).check();
        prop_assert_eq!(result, Ok(()));
    }

    #[test]
    fn can_solve_deterministically(problem in generate_problem(6, 6)) {
        let core_problem = problem.clone().read_pragmatic().expect("cannot read problem");

        let left = Solver::default().solve(&core_problem);
        let right = Solver::default().solve(&core_problem);

        prop_assert_eq!(left.allocation, right.allocation);
        prop_assert_eq!(left.cost, right.cost);
        prop_assert_eq!(left.steps, right.steps);
    }

    #[test]
    fn can_pass_checker(problem in generate_problem(8, 8)) {
        let solution = solve_problem(problem.clone(), &WriterOptions::default());

        let result = CheckerContext::new(problem, solution).check();

        prop_assert_eq!(result, Ok(()));
    }
}
