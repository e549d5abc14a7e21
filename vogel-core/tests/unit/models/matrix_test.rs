use super::*;
use crate::helpers::models::create_matrix;

#[test]
fn can_create_matrix_from_rows() {
    let matrix = create_matrix(vec![vec![1., 2., 3.], vec![4., 5., 6.]]);

    assert_eq!(matrix.rows(), 2);
    assert_eq!(matrix.cols(), 3);
    assert_eq!(matrix.get(1, 2), 6.);
    assert_eq!(matrix.row(0), &[1., 2., 3.]);
    assert_eq!(matrix.col(1).collect::<Vec<_>>(), vec![2., 5.]);
}

#[test]
fn can_reject_non_rectangular_rows() {
    let result = Matrix::from_rows(vec![vec![1., 2.], vec![3.]]);

    assert_eq!(result.err().map(|err| err.to_string()), Some("matrix is not rectangular: row 1 has 1 values, expected 2".to_string()));
}

#[test]
fn can_extend_and_truncate_matrix() {
    let matrix = create_matrix(vec![vec![1., 2.], vec![3., 4.]]);

    let extended = matrix.extended(0, 1, 0.);
    assert_eq!(extended.to_rows(), vec![vec![1., 2., 0.], vec![3., 4., 0.]]);

    let extended = matrix.extended(1, 0, 7.);
    assert_eq!(extended.to_rows(), vec![vec![1., 2.], vec![3., 4.], vec![7., 7.]]);

    assert_eq!(extended.truncated(2, 2), matrix);
}

#[test]
fn can_iterate_over_cells() {
    let mut matrix = Matrix::zeros(2, 2);
    matrix.set(1, 0, 5.);

    let cells = matrix.cells().filter(|(_, _, value)| *value > 0.).collect::<Vec<_>>();

    assert_eq!(cells, vec![(1, 0, 5.)]);
}

#[test]
#[should_panic(expected = "out of 2x2")]
fn can_panic_on_out_of_range_access() {
    Matrix::zeros(2, 2).get(2, 0);
}

#[test]
fn can_display_matrix() {
    let matrix = create_matrix(vec![vec![1., 2.5], vec![0., 4.]]);

    assert_eq!(matrix.to_string(), "[1, 2.5]\n[0, 4]\n");
}
