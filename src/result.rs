//! The result type shared by both entry points.

/// A matching between a left and a right vertex set.
///
/// `left_pair[l] == Some(r)` if and only if `right_pair[r] == Some(l)`;
/// no right vertex appears twice in `left_pair`. `None` plays the role
/// of the `-1` sentinel described in the data model: a left or right
/// vertex with no counterpart in the matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching<C> {
    /// `left_pair[l]` is the right vertex matched to left vertex `l`, if any.
    pub left_pair: Vec<Option<usize>>,
    /// `right_pair[r]` is the left vertex matched to right vertex `r`, if any.
    ///
    /// For the cost-matrix entry point, this is left empty whenever the
    /// matrix was transposed internally (more rows than columns) — see
    /// [`solve_assignment`](crate::solve_assignment) for the full quirk.
    pub right_pair: Vec<Option<usize>>,
    /// The objective value, in the units of the entry point that produced it.
    pub weight_sum: C,
}
