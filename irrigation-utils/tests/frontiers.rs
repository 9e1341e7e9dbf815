use irrigation_utils::{pareto_compare, pareto_frontier_indices, ParetoCompare};

#[test]
fn test_pareto_compare() {
    assert_eq!(
        pareto_compare(&[1.0, 0.0], &[1.0, 0.0]),
        ParetoCompare::Equal
    );
    assert_eq!(
        pareto_compare(&[0.0, 1.0], &[1.0, 0.0]),
        ParetoCompare::Equal
    );
    assert_eq!(
        pareto_compare(&[0.0, 1.0], &[1.0, 1.0]),
        ParetoCompare::ADominatesB
    );
    assert_eq!(
        pareto_compare(&[1.0, 1.0], &[1.0, 0.0]),
        ParetoCompare::BDominatesA
    );
}

#[test]
fn test_pareto_frontier_indices() {
    let points = vec![
        vec![3.0, 1.0],
        vec![1.0, 4.0],
        vec![2.0, 2.0],
        vec![3.0, 3.0],
        vec![4.0, 4.0],
        vec![1.0, 5.0],
    ];
    // (3,3), (4,4) and (1,5) are dominated; the rest trade off.
    assert_eq!(pareto_frontier_indices(&points), vec![0, 1, 2]);
}

#[test]
fn test_pareto_frontier_keeps_equal_duplicates() {
    let points = vec![vec![2.0, 2.0], vec![2.0, 2.0], vec![3.0, 3.0]];
    assert_eq!(pareto_frontier_indices(&points), vec![0, 1]);
}

#[test]
fn test_pareto_frontier_single_point() {
    let points = vec![vec![5.0, 7.0]];
    assert_eq!(pareto_frontier_indices(&points), vec![0]);
}

#[test]
fn test_pareto_frontier_empty() {
    assert_eq!(pareto_frontier_indices(&[]), Vec::<usize>::new());
}
