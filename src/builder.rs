//! Turns a cost matrix or an adjacency list into the CSR edge store the
//! matching engine consumes, applying top-K edge retention along the
//! way.

use crate::error::MatchingError;
use crate::graph::{CsrGraph, CsrGraphBuilder};
use crate::matrix::Matrix;
use crate::quickselect::{retain_top_k, EdgeCandidate};
use num_traits::{Bounded, One, Signed, Zero};

/// Bound set a matching weight type must satisfy, carried over from
/// `kuhn_munkres`'s own `Weights<C>` trait.
pub trait Weight: Copy + Ord + Zero + One + Bounded + Signed {}
impl<T: Copy + Ord + Zero + One + Bounded + Signed> Weight for T {}

/// Build the CSR graph, engine-space (retention-capped) left potentials
/// and the transposition flag from a non-negative integer cost matrix.
///
/// Weights are converted to a maximization problem (`M + 1 - cost`) so
/// the engine, which only ever maximizes, can be shared between both
/// entry points.
pub(crate) fn build_from_cost_matrix<C: Weight>(
    cost: &Matrix<C>,
) -> Result<(CsrGraph<C>, Vec<C>, bool), MatchingError> {
    if cost.rows == 0 || cost.columns == 0 {
        return Err(MatchingError::EmptyCostMatrix);
    }
    let transposed = cost.rows > cost.columns;
    let oriented = if transposed {
        cost.transposed()
    } else {
        cost.clone()
    };
    debug_assert!(oriented.rows <= oriented.columns);

    let max_cost = oriented
        .iter()
        .flat_map(|row: &[C]| row.iter())
        .copied()
        .max()
        .expect("non-empty matrix");
    let bias = max_cost + C::one();

    let k = oriented.rows.min(oriented.columns);
    let mut graph_builder =
        CsrGraphBuilder::with_capacity(oriented.rows, oriented.columns, oriented.rows * k);
    let mut u = Vec::with_capacity(oriented.rows);

    for row in oriented.iter() {
        let mut edges: Vec<EdgeCandidate<C>> = row
            .iter()
            .enumerate()
            .map(|(to, &cost)| EdgeCandidate {
                to,
                weight: bias - cost,
            })
            .collect();
        let row_max = edges
            .iter()
            .map(|e| e.weight)
            .max()
            .expect("row has at least one column");
        u.push(row_max);
        retain_top_k(&mut edges, k);
        edges.truncate(k);
        graph_builder.push_row(&edges);
    }

    Ok((graph_builder.build(), u, transposed))
}

/// Build the CSR graph and initial left potentials from an adjacency
/// list for the maximum-weight matching entry point. No transposition
/// is performed; negative weights are accepted and simply never
/// selected by the search.
pub(crate) fn build_from_adjacency<C: Weight>(
    num_right: usize,
    adjacency: &[Vec<(usize, C)>],
) -> Result<(CsrGraph<C>, Vec<C>), MatchingError> {
    let num_left = adjacency.len();
    if num_left == 0 || num_right == 0 {
        return Err(MatchingError::EmptyVertexSet);
    }
    for (left, edges) in adjacency.iter().enumerate() {
        for &(right, _) in edges {
            if right >= num_right {
                return Err(MatchingError::OutOfRangeEndpoint {
                    left,
                    right,
                    num_right,
                });
            }
        }
    }

    let k = num_left;
    let total_edges: usize = adjacency.iter().map(Vec::len).sum();
    let mut graph_builder =
        CsrGraphBuilder::with_capacity(num_left, num_right, total_edges.min(num_left * k));
    let mut u = Vec::with_capacity(num_left);

    for edges in adjacency {
        let mut candidates: Vec<EdgeCandidate<C>> = edges
            .iter()
            .map(|&(to, weight)| EdgeCandidate { to, weight })
            .collect();
        let row_max = candidates.iter().map(|e| e.weight).max().unwrap_or_else(Zero::zero);
        u.push(row_max);
        retain_top_k(&mut candidates, k);
        candidates.truncate(k);
        graph_builder.push_row(&candidates);
    }

    Ok((graph_builder.build(), u))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_cost_matrix() {
        let empty = Matrix::<i64>::from_vec(0, 0, vec![]);
        assert_eq!(
            build_from_cost_matrix(&empty).unwrap_err(),
            MatchingError::EmptyCostMatrix
        );
    }

    #[test]
    fn rejects_empty_vertex_sets() {
        assert_eq!(
            build_from_adjacency::<i64>(3, &[]).unwrap_err(),
            MatchingError::EmptyVertexSet
        );
        assert_eq!(
            build_from_adjacency::<i64>(0, &[vec![]]).unwrap_err(),
            MatchingError::EmptyVertexSet
        );
    }

    #[test]
    fn rejects_out_of_range_endpoint() {
        let adjacency = vec![vec![(0_usize, 5_i64)], vec![(3, 1)]];
        assert_eq!(
            build_from_adjacency(2, &adjacency).unwrap_err(),
            MatchingError::OutOfRangeEndpoint {
                left: 1,
                right: 3,
                num_right: 2,
            }
        );
    }

    #[test]
    fn transposes_tall_matrices() {
        let cost = Matrix::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]);
        let (graph, u, transposed) = build_from_cost_matrix(&cost).unwrap();
        assert!(transposed);
        assert_eq!(graph.num_left(), 2);
        assert_eq!(graph.num_right(), 3);
        assert_eq!(u.len(), 2);
    }
}
