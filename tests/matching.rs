use bimatch::{solve_matching, MatchingError};

#[test]
fn vertex_with_no_edges_stays_unmatched() {
    let adjacency = vec![vec![], vec![(0, 5)], vec![(1, 10)]];
    let result = solve_matching(2, &adjacency).unwrap();
    assert_eq!(result.left_pair, vec![None, Some(0), Some(1)]);
    assert_eq!(result.right_pair, vec![Some(1), Some(2)]);
    assert_eq!(result.weight_sum, 15);
}

#[test]
fn negative_weight_alternative_is_rejected_in_favour_of_a_heavier_matching() {
    let adjacency = vec![vec![(0, 10), (1, -5)], vec![(0, -3), (1, 8)]];
    let result = solve_matching(2, &adjacency).unwrap();
    assert_eq!(result.left_pair, vec![Some(0), Some(1)]);
    assert_eq!(result.weight_sum, 18);
}

#[test]
fn out_of_range_endpoint_is_an_error() {
    let adjacency = vec![vec![(0, 1)], vec![(9, 2)]];
    let err = solve_matching(2, &adjacency).unwrap_err();
    assert_eq!(
        err,
        MatchingError::OutOfRangeEndpoint {
            left: 1,
            right: 9,
            num_right: 2,
        }
    );
}

#[test]
fn empty_adjacency_is_an_error() {
    let adjacency: Vec<Vec<(usize, i64)>> = vec![];
    assert_eq!(
        solve_matching(2, &adjacency).unwrap_err(),
        MatchingError::EmptyVertexSet
    );
    assert_eq!(
        solve_matching::<i64>(0, &[vec![]]).unwrap_err(),
        MatchingError::EmptyVertexSet
    );
}

#[test]
fn disjoint_left_vertices_each_reach_their_own_right_vertex() {
    let adjacency = vec![vec![(0, 3)], vec![(1, 7)], vec![(2, 1)]];
    let result = solve_matching(3, &adjacency).unwrap();
    assert_eq!(result.left_pair, vec![Some(0), Some(1), Some(2)]);
    assert_eq!(result.weight_sum, 11);
}
