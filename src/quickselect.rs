//! Partial in-place reordering of an edge list so that the `K`
//! highest-weighted entries occupy a contiguous prefix.
//!
//! This is the top-K edge-retention step used by the graph builder: it
//! never allocates, makes no guarantee about the order within the
//! retained prefix or the discarded suffix, and breaks ties arbitrarily.

/// One candidate outgoing edge considered for retention: the right-vertex
/// endpoint together with its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeCandidate<C> {
    pub to: usize,
    pub weight: C,
}

/// Reorder `items` in place so that the `k` entries with the greatest
/// weight occupy positions `[0, k)`. If `items.len() <= k`, `items` is
/// left unchanged.
pub(crate) fn retain_top_k<C: Ord + Copy>(items: &mut [EdgeCandidate<C>], k: usize) {
    let n = items.len();
    if n <= k || k == 0 {
        return;
    }
    let target = k - 1;
    let (mut left, mut right) = (0usize, n - 1);
    while left < right {
        let mid = left + (right - left) / 2;
        let pivot = median_of_three(items, left, mid, right);
        let store = partition(items, left, right, pivot);
        if store == target {
            break;
        } else if store < target {
            left = store + 1;
        } else {
            right = store - 1;
        }
    }
}

/// Return the index (among `left`, `mid`, `right`) holding the median
/// weight of the three.
fn median_of_three<C: Ord + Copy>(items: &[EdgeCandidate<C>], left: usize, mid: usize, right: usize) -> usize {
    let (a, b, c) = (items[left].weight, items[mid].weight, items[right].weight);
    if a > b {
        if b > c {
            mid
        } else if a > c {
            right
        } else {
            left
        }
    } else if a > c {
        left
    } else if b > c {
        right
    } else {
        mid
    }
}

/// One-pass Lomuto-style partition: entries with weight strictly greater
/// than the pivot's weight are moved before `store_index`, then the
/// pivot is swapped into `store_index`. Returns the pivot's final index.
fn partition<C: Ord + Copy>(
    items: &mut [EdgeCandidate<C>],
    left: usize,
    right: usize,
    pivot_idx: usize,
) -> usize {
    let pivot_weight = items[pivot_idx].weight;
    items.swap(pivot_idx, right);
    let mut store_index = left;
    for i in left..right {
        if items[i].weight > pivot_weight {
            items.swap(i, store_index);
            store_index += 1;
        }
    }
    items.swap(store_index, right);
    store_index
}
