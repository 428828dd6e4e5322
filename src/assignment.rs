//! Minimum-cost assignment over a dense cost matrix, and the result
//! adapter that undoes the internal transposition of tall matrices.

use crate::builder::{build_from_cost_matrix, Weight};
use crate::engine;
use crate::error::MatchingError;
use crate::matrix::Matrix;
use crate::result::Matching;

/// Compute a minimum-cost assignment over a non-negative integer cost
/// matrix `cost[h][w]`.
///
/// Internally the matrix is transposed when `h > w` so the matching
/// engine always works with at least as many columns as rows; this is
/// reversed before returning. As a consequence, **`right_pair` is left
/// empty whenever the matrix was transposed** (`h > w`) — callers of
/// this entry point should only rely on `left_pair`. This asymmetry is
/// preserved for API compatibility rather than papered over.
///
/// `left_pair` is indexed by original row and has length `h`; a matched
/// row holds `Some(original_column)`. `weight_sum` is recomputed
/// directly from `cost` as `sum(cost[i][left_pair[i]])` over matched
/// rows, independent of the engine's own (transformed) objective.
///
/// # Errors
///
/// Returns [`MatchingError::EmptyCostMatrix`] if `cost` has zero rows or
/// zero columns.
///
/// # Panics
///
/// Panics if `cost`'s rows do not all share the same length.
pub fn solve_assignment<C: Weight>(cost: &[Vec<C>]) -> Result<Matching<C>, MatchingError> {
    if cost.is_empty() || cost[0].is_empty() {
        return Err(MatchingError::EmptyCostMatrix);
    }
    let rows = cost.len();
    let columns = cost[0].len();
    assert!(
        cost.iter().all(|row| row.len() == columns),
        "all rows of the cost matrix must have the same length"
    );
    let flat: Vec<C> = cost.iter().flat_map(|row| row.iter().copied()).collect();
    let matrix = Matrix::from_vec(rows, columns, flat);

    let (graph, u, transposed) = build_from_cost_matrix(&matrix)?;
    let engine_result = engine::run(&graph, u);

    let (left_pair, right_pair) = if transposed {
        (engine_result.right_pair, Vec::new())
    } else {
        (engine_result.left_pair, engine_result.right_pair)
    };

    let mut weight_sum = C::zero();
    for (row, &assigned) in left_pair.iter().enumerate() {
        if let Some(col) = assigned {
            weight_sum = weight_sum + cost[row][col];
        }
    }

    Ok(Matching {
        left_pair,
        right_pair,
        weight_sum,
    })
}
