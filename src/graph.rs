//! CSR-style edge store produced by the graph builder and consumed by
//! the matching engine.

use crate::quickselect::EdgeCandidate;

/// Flat, cache-friendly adjacency store for the left vertex set: three
/// parallel arrays rather than a vector of per-vertex vectors.
///
/// `edge_to[row_off[l]..row_off[l + 1]]` and
/// `edge_w[row_off[l]..row_off[l + 1]]` give the (right-vertex, weight)
/// pairs retained for left vertex `l`.
pub(crate) struct CsrGraph<C> {
    edge_to: Vec<usize>,
    edge_w: Vec<C>,
    row_off: Vec<usize>,
    num_right: usize,
}

impl<C: Copy> CsrGraph<C> {
    /// Number of left vertices.
    pub(crate) fn num_left(&self) -> usize {
        self.row_off.len() - 1
    }

    /// Number of right vertices the store was built against.
    pub(crate) fn num_right(&self) -> usize {
        self.num_right
    }

    /// Retained outgoing edges of left vertex `l`, as `(right, weight)` pairs.
    pub(crate) fn neighbors(&self, l: usize) -> impl Iterator<Item = (usize, C)> + '_ {
        let range = self.row_off[l]..self.row_off[l + 1];
        self.edge_to[range.clone()]
            .iter()
            .copied()
            .zip(self.edge_w[range].iter().copied())
    }
}

/// Accumulates rows of retained edges into the three parallel CSR arrays.
pub(crate) struct CsrGraphBuilder<C> {
    edge_to: Vec<usize>,
    edge_w: Vec<C>,
    row_off: Vec<usize>,
    num_right: usize,
}

impl<C> CsrGraphBuilder<C> {
    pub(crate) fn with_capacity(num_left: usize, num_right: usize, edge_capacity: usize) -> Self {
        let mut row_off = Vec::with_capacity(num_left + 1);
        row_off.push(0);
        CsrGraphBuilder {
            edge_to: Vec::with_capacity(edge_capacity),
            edge_w: Vec::with_capacity(edge_capacity),
            row_off,
            num_right,
        }
    }

    /// Append the (already top-K-retained) edges of the next left vertex.
    pub(crate) fn push_row(&mut self, retained: &[EdgeCandidate<C>])
    where
        C: Copy,
    {
        for edge in retained {
            self.edge_to.push(edge.to);
            self.edge_w.push(edge.weight);
        }
        self.row_off.push(self.edge_to.len());
    }

    pub(crate) fn build(self) -> CsrGraph<C> {
        CsrGraph {
            edge_to: self.edge_to,
            edge_w: self.edge_w,
            row_off: self.row_off,
            num_right: self.num_right,
        }
    }
}
