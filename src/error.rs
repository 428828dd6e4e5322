//! Errors returned by the two entry points.

/// Invalid-argument errors detected by the adapters before the matching
/// engine is entered.
///
/// Internal invariants that should never fire (feasibility, tightness)
/// are asserted with `debug_assert!` inside the engine instead of being
/// represented here; they denote a bug in this crate, not a caller
/// mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatchingError {
    /// The cost matrix had zero rows or zero columns.
    #[error("cost matrix must have at least one row and one column")]
    EmptyCostMatrix,

    /// The adjacency-list input had `|L| == 0` or `|R| == 0`.
    #[error("left and right vertex sets must both be non-empty")]
    EmptyVertexSet,

    /// An adjacency-list entry referenced a right vertex outside `0..num_right`.
    #[error("edge from left vertex {left} references right vertex {right}, out of range for {num_right} right vertices")]
    OutOfRangeEndpoint {
        /// Left vertex whose edge list contains the offending entry.
        left: usize,
        /// The out-of-range right-vertex index.
        right: usize,
        /// The number of right vertices declared by the caller.
        num_right: usize,
    },
}
