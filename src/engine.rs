//! The matching engine: primal-dual label-and-augment search over the
//! CSR graph produced by the builder.
//!
//! This generalizes `kuhn_munkres.rs`'s dense O(n^3) algorithm to a
//! sparse, retention-capped CSR graph: potentials, slack and the
//! alternating-path BFS are the same idea, now scoped to each left
//! vertex's retained neighbor list instead of every column, with a
//! greedy initial matching up front and scratch rolled back in
//! `O(|touched|)` between augmentations instead of being fully cleared.

use crate::builder::Weight;
use crate::graph::CsrGraph;
use fixedbitset::FixedBitSet;
use std::collections::VecDeque;

pub(crate) struct EngineResult<C> {
    pub left_pair: Vec<Option<usize>>,
    pub right_pair: Vec<Option<usize>>,
    pub weight_sum: C,
}

/// Per-call scratch state for the augmenting-path search, reused across
/// every root in a single engine invocation.
struct Engine<'g, C> {
    graph: &'g CsrGraph<C>,
    u: Vec<C>,
    v: Vec<C>,
    left_pair: Vec<Option<usize>>,
    right_pair: Vec<Option<usize>>,
    slack: Vec<C>,
    parent: Vec<Option<usize>>,
    r_visited: FixedBitSet,
    r_on_edge: FixedBitSet,
    visited_l: Vec<usize>,
    visited_r: Vec<usize>,
    on_edge_r: Vec<usize>,
    queue: VecDeque<usize>,
}

impl<'g, C: Weight> Engine<'g, C> {
    fn new(graph: &'g CsrGraph<C>, u: Vec<C>) -> Self {
        let n_left = graph.num_left();
        let n_right = graph.num_right();
        Engine {
            graph,
            u,
            v: vec![C::zero(); n_right],
            left_pair: vec![None; n_left],
            right_pair: vec![None; n_right],
            slack: vec![C::max_value(); n_right],
            parent: vec![None; n_right],
            r_visited: FixedBitSet::with_capacity(n_right),
            r_on_edge: FixedBitSet::with_capacity(n_right),
            visited_l: Vec::new(),
            visited_r: Vec::new(),
            on_edge_r: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Walk each left vertex in order, matching it to the first
    /// already-tight edge whose right endpoint is still free.
    fn greedy_init(&mut self) {
        for l in 0..self.graph.num_left() {
            for (r, w) in self.graph.neighbors(l) {
                if self.right_pair[r].is_none() && self.u[l] + self.v[r] == w {
                    self.left_pair[l] = Some(r);
                    self.right_pair[r] = Some(l);
                    break;
                }
            }
        }
    }

    /// Reset the scratch touched by the previous augmentation and seed
    /// the BFS queue with `root`.
    fn reset_for(&mut self, root: usize) {
        for &r in &self.visited_r {
            self.r_visited.set(r, false);
        }
        for &r in &self.on_edge_r {
            self.r_on_edge.set(r, false);
            self.slack[r] = C::max_value();
            self.parent[r] = None;
        }
        self.visited_l.clear();
        self.visited_r.clear();
        self.on_edge_r.clear();
        self.queue.clear();

        self.visited_l.push(root);
        self.queue.push_back(root);
    }

    /// Absorb `r` into the tight subgraph. Returns `true` if `r` was
    /// unmatched, in which case the augmenting path rooted at the
    /// current root has just been flipped and the search is done.
    fn advance(&mut self, r: usize) -> bool {
        self.r_visited.insert(r);
        self.r_on_edge.set(r, false);
        self.visited_r.push(r);
        match self.right_pair[r] {
            Some(l2) => {
                self.queue.push_back(l2);
                self.visited_l.push(l2);
                false
            }
            None => {
                let mut cursor = Some(r);
                while let Some(rr) = cursor {
                    let l2 = self.parent[rr].expect("tight right vertex has a parent");
                    let prev = self.left_pair[l2];
                    self.left_pair[l2] = Some(rr);
                    self.right_pair[rr] = Some(l2);
                    cursor = prev;
                }
                true
            }
        }
    }

    /// Scan the outgoing edges of every left vertex currently queued,
    /// updating slacks and calling `advance` on every edge found tight.
    /// Returns `true` once an augmenting path has been completed.
    fn scan(&mut self) -> bool {
        while let Some(l2) = self.queue.pop_front() {
            let p = self.u[l2];
            let edges: Vec<(usize, C)> = self.graph.neighbors(l2).collect();
            for (r, w) in edges {
                if self.r_visited.contains(r) {
                    continue;
                }
                let diff = p + self.v[r] - w;
                debug_assert!(diff >= C::zero(), "feasibility invariant violated");
                if diff == C::zero() {
                    self.parent[r] = Some(l2);
                    if self.advance(r) {
                        return true;
                    }
                } else if diff < self.slack[r] {
                    self.slack[r] = diff;
                    self.parent[r] = Some(l2);
                    if !self.r_on_edge.contains(r) {
                        self.r_on_edge.insert(r);
                        self.on_edge_r.push(r);
                    }
                }
            }
        }
        false
    }

    /// Tighten the dual variables by the smallest outstanding slack and
    /// absorb any right vertex that becomes tight as a result. Returns
    /// `Some(true)`/`Some(false)` mirroring `scan`'s contract, or `None`
    /// if no candidate right vertex remains — the root cannot be
    /// matched through the retained edges and the augmentation fails.
    fn tighten(&mut self) -> Option<bool> {
        let delta = self
            .on_edge_r
            .iter()
            .copied()
            .filter(|&r| self.r_on_edge.contains(r))
            .map(|r| self.slack[r])
            .min()?;
        debug_assert!(delta > C::zero(), "dual update must be strictly positive");

        for &l2 in &self.visited_l {
            self.u[l2] = self.u[l2] - delta;
        }
        for &r in &self.visited_r {
            self.v[r] = self.v[r] + delta;
        }

        let mut newly_tight = Vec::new();
        for &r in &self.on_edge_r {
            if self.r_on_edge.contains(r) {
                self.slack[r] = self.slack[r] - delta;
                if self.slack[r] == C::zero() {
                    newly_tight.push(r);
                }
            }
        }
        for r in newly_tight {
            if self.r_on_edge.contains(r) && self.advance(r) {
                return Some(true);
            }
        }
        Some(false)
    }

    /// Run one augmentation rooted at `root`. Returns `true` if `root`
    /// ended up matched.
    fn augment(&mut self, root: usize) -> bool {
        self.reset_for(root);
        loop {
            if self.scan() {
                return true;
            }
            match self.tighten() {
                Some(true) => return true,
                Some(false) => continue,
                None => return false,
            }
        }
    }

    fn weight_sum(&self) -> C {
        let mut sum = C::zero();
        for l in 0..self.graph.num_left() {
            if let Some(r) = self.left_pair[l] {
                sum = sum + self.u[l] + self.v[r];
            }
        }
        sum
    }
}

/// Run the matching engine over `graph` starting from initial left
/// potentials `u`. One augmentation is attempted per unmatched left
/// vertex, in order.
pub(crate) fn run<C: Weight>(graph: &CsrGraph<C>, u: Vec<C>) -> EngineResult<C> {
    let mut engine = Engine::new(graph, u);
    engine.greedy_init();
    for root in 0..graph.num_left() {
        if engine.left_pair[root].is_none() {
            engine.augment(root);
        }
    }
    let weight_sum = engine.weight_sum();
    EngineResult {
        left_pair: engine.left_pair,
        right_pair: engine.right_pair,
        weight_sum,
    }
}
