//! A dense, test-only reference solver used to cross-check the CSR
//! engine's objective value, the same way `bertsekas.rs`'s tests cross-
//! check the auction algorithm against `kuhn_munkres`.
//!
//! This is `kuhn_munkres.rs`'s O(n^3) dense Kuhn-Munkres algorithm,
//! trimmed to the minimization direction and restricted to square or
//! wide (`rows <= columns`) matrices, which is all the property tests
//! need. It intentionally does not share any code with the CSR engine
//! in `engine.rs`, so it is a genuine independent check rather than a
//! copy that could share the same bug.

#![cfg(test)]

use crate::builder::Weight;
use crate::matrix::Matrix;
use fixedbitset::FixedBitSet;

/// Minimum-cost assignment over a dense matrix with `rows <= columns`,
/// computed by the classical labeling method (no edge retention, no
/// CSR). Returns the optimal total cost.
pub(crate) fn dense_min_cost<C: Weight>(cost: &Matrix<C>) -> C {
    let nx = cost.rows;
    let ny = cost.columns;
    assert!(nx <= ny, "dense oracle requires rows <= columns");

    let weights: Vec<Vec<C>> = (0..nx)
        .map(|r| (0..ny).map(|c| -cost[&(r, c)]).collect())
        .collect();

    let mut lx: Vec<C> = weights
        .iter()
        .map(|row| row.iter().copied().max().expect("non-empty row"))
        .collect();
    let mut ly = vec![C::zero(); ny];
    let mut xy: Vec<Option<usize>> = vec![None; nx];
    let mut yx: Vec<Option<usize>> = vec![None; ny];

    let mut in_s = FixedBitSet::with_capacity(nx);
    for root in 0..nx {
        in_s.clear();
        let mut alternating: Vec<Option<usize>> = vec![None; ny];
        let mut slack: Vec<C> = (0..ny).map(|y| lx[root] + ly[y] - weights[root][y]).collect();
        let mut slack_x = vec![root; ny];
        in_s.insert(root);

        let mut terminal_y;
        loop {
            let mut delta = None;
            let mut best = (0usize, 0usize);
            for y in 0..ny {
                if alternating[y].is_none() && (delta.is_none() || slack[y] < delta.unwrap()) {
                    delta = Some(slack[y]);
                    best = (slack_x[y], y);
                }
            }
            let delta = delta.expect("free column remains while s is non-empty");
            if delta > C::zero() {
                for x in in_s.ones() {
                    lx[x] = lx[x] - delta;
                }
                for y in 0..ny {
                    if alternating[y].is_some() {
                        ly[y] = ly[y] + delta;
                    } else {
                        slack[y] = slack[y] - delta;
                    }
                }
            }
            let (x, y) = best;
            alternating[y] = Some(x);
            if yx[y].is_none() {
                terminal_y = y;
                break;
            }
            let next_x = yx[y].expect("column is matched");
            in_s.insert(next_x);
            for y in 0..ny {
                if alternating[y].is_none() {
                    let candidate = lx[next_x] + ly[y] - weights[next_x][y];
                    if candidate < slack[y] {
                        slack[y] = candidate;
                        slack_x[y] = next_x;
                    }
                }
            }
        }

        let mut y = Some(terminal_y);
        while let Some(yy) = y {
            let x = alternating[yy].expect("augmenting path node has a predecessor");
            let prev = xy[x];
            yx[yy] = Some(x);
            xy[x] = Some(yy);
            y = prev;
        }
    }

    let negated_total: C = lx.into_iter().fold(C::zero(), |acc, x| acc + x)
        + ly.into_iter().fold(C::zero(), |acc, x| acc + x);
    -negated_total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_optimum() {
        let cost = Matrix::from_vec(3, 3, vec![1, 2, 3, 2, 4, 6, 3, 6, 9]);
        assert_eq!(dense_min_cost(&cost), 10);
    }

    #[test]
    fn cranes_example() {
        let cost = Matrix::from_vec(
            4,
            4,
            vec![90, 75, 75, 80, 35, 85, 55, 65, 125, 95, 90, 105, 45, 110, 95, 115],
        );
        assert_eq!(dense_min_cost(&cost), 275);
    }
}
