//! Greedy frontier expansion over the edit graph (Myers, 1986).
//!
//! The edit graph of `old` (length n) and `new` (length m) has a point for
//! every `(x, y)` with `x <= n`, `y <= m`. Moving right removes `old[x]`,
//! moving down adds `new[y]`, and moving diagonally keeps a unit both sides
//! agree on, for free. The search grows the set of cheapest paths one edit at
//! a time and stops at the first depth whose frontier touches `(n, m)`.

mod frontier;

use frontier::{Frontier, KLine};

use crate::op::DiffOp;
use crate::trace::TraceStore;

/// Outcome of a search: the edit distance, the diagonal that reached the end
/// of both sequences, and the script that got there.
#[derive(Debug, Clone)]
pub(crate) struct Found<Tr> {
    pub depth: usize,
    pub diagonal: isize,
    pub trace: Tr,
}

/// Runs the search, recording partial scripts in `store`.
///
/// Among the minimal scripts, the one returned is fixed by the move choice:
/// take the down (`Add`) edge from `k + 1` when `k == -d`, or when `k != d`
/// and `x[k - 1] < x[k + 1]`; otherwise take the right (`Remove`) edge from
/// `k - 1`. Ties therefore go right.
pub(crate) fn search<T, S>(old: &[T], new: &[T], store: &mut S) -> Found<S::Trace>
where
    T: PartialEq,
    S: TraceStore,
{
    let n = old.len();
    let m = new.len();
    let max = n + m;
    let mut v: Frontier<S::Trace> = Frontier::new(max);

    for depth in 0..=max {
        let d = depth as isize;
        for k in (-d..=d).step_by(2) {
            let (mut x, mut trace) = if depth == 0 {
                (0, Default::default())
            } else if k == -d || (k != d && v[k - 1].x < v[k + 1].x) {
                let above = &v[k + 1];
                (above.x, store.step(&above.trace, DiffOp::Add))
            } else {
                let left = &v[k - 1];
                (left.x + 1, store.step(&left.trace, DiffOp::Remove))
            };
            // y never goes negative: a down move adds one to the neighbour's
            // y, a right move keeps it.
            let mut y = (x as isize - k) as usize;

            let start = x;
            while x < n && y < m && old[x] == new[y] {
                x += 1;
                y += 1;
            }
            store.extend(&mut trace, DiffOp::Same, x - start);

            if x >= n && y >= m {
                debug!(n, m, depth, diagonal = k, "edit graph search done");
                return Found {
                    depth,
                    diagonal: k,
                    trace,
                };
            }
            v[k] = KLine { x, trace };
        }
        trace!(depth, diagonals = depth + 1, "frontier expanded");
    }

    // Removing all of `old` then adding all of `new` is a path of n + m
    // edits, so some diagonal terminates by depth n + m.
    unreachable!("edit graph search exceeded {max} edits")
}
