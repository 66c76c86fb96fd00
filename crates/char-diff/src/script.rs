//! Turning a forward list of runs back into slices of the inputs.

use crate::op::{DiffOp, Hunk, Run, Span};

/// Slices `old` and `new` along `runs`.
///
/// Two cursors start at zero. `Same` and `Add` runs take their items from
/// `new` (a `Same` run also moves the `old` cursor); `Remove` runs take them
/// from `old`. `runs` must describe a script from `old` to `new`.
pub fn hunks<'a, T>(old: &'a [T], new: &'a [T], runs: &[Run]) -> Vec<Hunk<'a, T>> {
    let mut out = Vec::with_capacity(runs.len());
    let mut old_index = 0usize;
    let mut new_index = 0usize;
    for run in runs {
        let items = match run.op {
            DiffOp::Same => {
                let items = &new[new_index..new_index + run.len];
                new_index += run.len;
                old_index += run.len;
                items
            }
            DiffOp::Add => {
                let items = &new[new_index..new_index + run.len];
                new_index += run.len;
                items
            }
            DiffOp::Remove => {
                let items = &old[old_index..old_index + run.len];
                old_index += run.len;
                items
            }
        };
        out.push(Hunk { op: run.op, items });
    }
    out
}

/// [`hunks`] over chars, collected into owned text.
pub fn spans(old: &[char], new: &[char], runs: &[Run]) -> Vec<Span> {
    hunks(old, new, runs).into_iter().map(Span::from).collect()
}
