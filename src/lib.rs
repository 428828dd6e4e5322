#![deny(missing_docs)]

//! A solver for the assignment problem and, more generally, for
//! maximum-weight matching in a weighted bipartite graph.
//!
//! Given non-negative integer edge weights between a left vertex set
//! `L` and a right vertex set `R`, this crate returns a matching of
//! maximum total weight, exposed through two entry points:
//!
//! - [`solve_assignment`]: minimum-cost assignment over a dense cost
//!   matrix.
//! - [`solve_matching`]: maximum-weight matching over a sparse
//!   adjacency list.
//!
//! Both entry points share the same pipeline: a graph builder converts
//! the input into a CSR edge store, retaining only the top-K
//! highest-weighted outgoing edges per left vertex (via
//! [`quickselect`]); a primal-dual matching engine runs a
//! breadth-first augmenting-path search over that store, maintaining
//! vertex potentials and slack; and, for the cost-matrix entry point, a
//! result adapter reverses any internal transposition and recomputes
//! the true cost from the original matrix.
//!
//! The engine is single-threaded and fully synchronous: every call
//! owns its scratch state and releases it on return, with no
//! process-wide state surviving between calls.

pub extern crate num_traits;

mod assignment;
mod builder;
mod engine;
mod error;
mod graph;
mod matching;
mod matrix;
#[cfg(test)]
mod oracle;
mod quickselect;
mod result;

pub use assignment::solve_assignment;
pub use builder::Weight;
pub use error::MatchingError;
pub use matching::solve_matching;
pub use result::Matching;
