//! Entry point B (maximum-weight matching over an adjacency list).

use crate::builder::{build_from_adjacency, Weight};
use crate::engine;
use crate::error::MatchingError;
use crate::result::Matching;

/// Compute a maximum-weight matching between a left vertex set of size
/// `adjacency.len()` and a right vertex set of size `num_right`, given
/// each left vertex's outgoing `(right_vertex, weight)` edges.
///
/// Both `left_pair` and `right_pair` are fully populated on success;
/// `weight_sum` is `sum(weight(l, left_pair[l]))` over matched left
/// vertices. Negative weights are accepted: they are never selected by
/// the search, since retention and the initial potentials push them out
/// before the engine runs.
///
/// Left vertices are augmented in order, one at a time; when several
/// left vertices can only reach the same scarce right vertices, the
/// vertex processed first keeps whatever it finds, which is not always
/// the globally heaviest assignment in that region of the graph. This
/// matches the classical algorithm's guarantee on complete bipartite
/// graphs but is not a general optimality guarantee for sparse ones.
///
/// # Errors
///
/// Returns [`MatchingError::EmptyVertexSet`] if `adjacency` or
/// `num_right` is zero, or [`MatchingError::OutOfRangeEndpoint`] if any
/// edge references a right vertex outside `0..num_right`.
pub fn solve_matching<C: Weight>(
    num_right: usize,
    adjacency: &[Vec<(usize, C)>],
) -> Result<Matching<C>, MatchingError> {
    let (graph, u) = build_from_adjacency(num_right, adjacency)?;
    let engine_result = engine::run(&graph, u);
    Ok(Matching {
        left_pair: engine_result.left_pair,
        right_pair: engine_result.right_pair,
        weight_sum: engine_result.weight_sum,
    })
}
