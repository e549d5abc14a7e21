use super::*;
use crate::helpers::models::*;
use crate::solver::TelemetryMode;

fn run_allocate(costs: Vec<Vec<Float>>, supply: Vec<Float>, demand: Vec<Float>) -> (Matrix, Vec<AllocationStep>) {
    let problem = create_problem(costs, supply, demand);

    allocate(&BalancedProblem::new(&problem), &Telemetry::new(TelemetryMode::None))
}

#[test]
fn can_allocate_balanced_problem_step_by_step() {
    let (allocation, steps) = run_allocate(vec![vec![4., 6.], vec![5., 3.]], vec![10., 10.], vec![8., 12.]);

    assert_eq!(allocation.to_rows(), vec![vec![8., 2.], vec![0., 10.]]);
    assert_eq!(
        steps,
        vec![
            AllocationStep { line: Line::Column(1), penalty: 3., cell: (1, 1), quantity: 10. },
            AllocationStep { line: Line::Column(1), penalty: 6., cell: (0, 1), quantity: 2. },
            AllocationStep { line: Line::Row(0), penalty: 4., cell: (0, 0), quantity: 8. },
        ]
    );
}

#[test]
fn can_prefer_row_when_row_and_column_penalties_are_equal() {
    let (allocation, steps) = run_allocate(vec![vec![1., 4.], vec![2., 1.]], vec![3., 7.], vec![5., 5.]);

    assert_eq!(steps[0], AllocationStep { line: Line::Row(0), penalty: 3., cell: (0, 0), quantity: 3. });
    assert_eq!(allocation.to_rows(), vec![vec![3., 0.], vec![2., 5.]]);
}

#[test]
fn can_pick_first_line_and_first_cheapest_cell_on_ties() {
    let (_, steps) = run_allocate(vec![vec![2., 2.], vec![2., 2.]], vec![1., 1.], vec![1., 1.]);

    assert_eq!(
        steps,
        vec![
            AllocationStep { line: Line::Row(0), penalty: 0., cell: (0, 0), quantity: 1. },
            AllocationStep { line: Line::Row(1), penalty: 2., cell: (1, 1), quantity: 1. },
        ]
    );
}

#[test]
fn can_use_dummy_destination_for_supply_excess() {
    let (allocation, steps) = run_allocate(vec![vec![2.], vec![3.]], vec![20., 30.], vec![25.]);

    assert_eq!(allocation.to_rows(), vec![vec![20., 0.], vec![5., 25.]]);
    assert_eq!(steps.iter().map(|step| step.line).collect::<Vec<_>>(), vec![Line::Row(1), Line::Row(1), Line::Row(0)]);
}

#[test]
fn can_exhaust_zero_capacity_line_with_zero_quantity_step() {
    let (allocation, steps) = run_allocate(vec![vec![1., 5.], vec![1., 5.]], vec![0., 4.], vec![0., 4.]);

    assert_eq!(allocation.to_rows(), vec![vec![0., 0.], vec![0., 4.]]);
    assert_eq!(
        steps,
        vec![
            AllocationStep { line: Line::Row(1), penalty: 4., cell: (1, 0), quantity: 0. },
            AllocationStep { line: Line::Row(1), penalty: 5., cell: (1, 1), quantity: 4. },
        ]
    );
}

#[test]
fn can_count_zero_demand_column_in_row_penalties() {
    let (allocation, steps) = run_allocate(
        vec![vec![1., 0., 5.], vec![0., 4., 2.], vec![6., 7., 3.], vec![7., 7., 7.]],
        vec![4., 3., 7., 4.],
        vec![0., 9., 9.],
    );

    assert_eq!(allocation.to_rows(), vec![vec![0., 4., 0.], vec![0., 1., 2.], vec![0., 0., 7.], vec![0., 4., 0.]]);
    assert_eq!(
        steps.iter().map(|step| (step.line, step.cell, step.quantity)).collect::<Vec<_>>(),
        vec![
            (Line::Column(1), (0, 1), 4.),
            (Line::Row(2), (2, 2), 7.),
            (Line::Column(2), (1, 2), 2.),
            (Line::Row(1), (1, 0), 0.),
            (Line::Row(3), (3, 1), 4.),
            (Line::Row(1), (1, 1), 1.),
        ]
    );
}

#[test]
fn can_fall_back_to_first_line_with_capacity_when_no_cell_is_reachable() {
    let costs = create_matrix(vec![vec![1., 2.], vec![3., 4.]]);
    let mut active = ActiveLines::new(2, 2);
    active.exhaust(Line::Column(0));
    active.exhaust(Line::Column(1));

    let cell = select_cell(&costs, &active, Line::Row(0), &[1., 1.], &[0., 1.]);

    assert_eq!(cell, Some((0, 1)));
}

#[test]
fn can_stop_when_nothing_is_left_to_select() {
    let costs = create_matrix(vec![vec![1.]]);
    let active = ActiveLines::new(1, 1);

    assert_eq!(select_line(&costs, &active, &[0.], &[0.]), None);
}
