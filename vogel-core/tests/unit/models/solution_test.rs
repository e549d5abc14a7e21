use super::*;
use crate::helpers::models::*;

fn create_solution() -> Solution {
    Solution {
        allocation: create_matrix(vec![vec![8., 2.], vec![0., 10.]]),
        cost: 74.,
        slack: None,
        steps: vec![],
    }
}

#[test]
fn can_get_flows() {
    let solution = create_solution();

    assert_eq!(solution.flows().collect::<Vec<_>>(), vec![(0, 0, 8.), (0, 1, 2.), (1, 1, 10.)]);
}

#[test]
fn can_get_totals_per_line() {
    let solution = create_solution();

    assert_eq!(solution.total_shipped(), 20.);
    assert_eq!(solution.shipped_per_source(), vec![10., 10.]);
    assert_eq!(solution.received_per_destination(), vec![8., 12.]);
}

#[test]
fn can_get_cost_per_source() {
    let problem = create_balanced_problem();
    let solution = create_solution();

    assert_eq!(solution.cost_per_source(&problem), vec![44., 30.]);
    assert_eq!(get_allocation_cost(&problem, &solution.allocation), 74.);
}

#[test]
fn can_ignore_cells_outside_of_problem_when_calculating_cost() {
    let problem = create_balanced_problem();
    let allocation = create_matrix(vec![vec![8., 2., 5.], vec![0., 10., 5.]]);

    assert_eq!(get_allocation_cost(&problem, &allocation), 74.);
}

#[test]
fn can_create_empty_solution() {
    let solution = Solution::empty(&create_balanced_problem());

    assert_eq!(solution.allocation, Matrix::zeros(2, 2));
    assert_eq!(solution.cost, 0.);
    assert!(solution.slack.is_none());
    assert!(solution.steps.is_empty());
}

#[test]
fn can_get_slack_total() {
    let slack = Slack::UnusedSupply(vec![0., 25.]);

    assert_eq!(slack.quantities(), &[0., 25.]);
    assert_eq!(slack.total(), 25.);
}
