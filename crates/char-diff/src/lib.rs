//! Minimal character-level edit scripts.
//!
//! Computes the shortest list of keep / insert / delete operations that turns
//! one sequence into another, using Myers' greedy search over the edit graph,
//! and returns it as labeled runs in left-to-right order.
//!
//! # Overview
//!
//! - [`diff`] - character diff, every frontier keeps a flat operation list
//! - [`diff_efficient`] - character diff, frontiers share run-length chains
//! - [`diff_slices`] - the same search over any `PartialEq` unit
//! - [`edit_distance`] - only the number of edits
//! - [`patch`] - helpers over finished scripts (`src`, `dst`, `apply`, ...)
//! - [`bytes`] - byte-slice wrappers
//!
//! Both strategies return the same script for the same input: when several
//! minimal scripts exist, the search's move rule picks one deterministically.
//!
//! # Example
//!
//! ```
//! use char_diff::{diff, diff_efficient, DiffOp, Span};
//!
//! let spans = diff("abcdef", "abXdef");
//! assert_eq!(
//!     spans,
//!     vec![
//!         Span::new(DiffOp::Same, "ab"),
//!         Span::new(DiffOp::Remove, "c"),
//!         Span::new(DiffOp::Add, "X"),
//!         Span::new(DiffOp::Same, "def"),
//!     ]
//! );
//! assert_eq!(diff_efficient("abcdef", "abXdef"), spans);
//! ```

#[macro_use]
mod tracing_macros;

pub mod bytes;
mod error;
mod op;
pub mod patch;
pub mod script;
mod search;
mod strategy;
pub mod trace;

pub use error::DiffError;
pub use op::{DiffOp, Hunk, Run, Span};
pub use strategy::Strategy;

use trace::{OpList, RunChain, TraceStore};

/// Character diff using flat per-frontier operation lists.
pub fn diff(old: &str, new: &str) -> Vec<Span> {
    diff_with(old, new, Strategy::Simple)
}

/// Character diff using shared run chains. Same output as [`diff`].
pub fn diff_efficient(old: &str, new: &str) -> Vec<Span> {
    diff_with(old, new, Strategy::Efficient)
}

/// Character diff with an explicit [`Strategy`].
///
/// Units are `char`s, so multi-byte text is never split inside a span.
pub fn diff_with(old: &str, new: &str, strategy: Strategy) -> Vec<Span> {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();
    let runs = edit_runs(&old, &new, strategy);
    script::spans(&old, &new, &runs)
}

/// Minimal edit script over arbitrary units, as slices of the inputs.
pub fn diff_slices<'a, T: PartialEq>(
    old: &'a [T],
    new: &'a [T],
    strategy: Strategy,
) -> Vec<Hunk<'a, T>> {
    let runs = edit_runs(old, new, strategy);
    script::hunks(old, new, &runs)
}

/// Minimal edit script as forward runs, without slicing the inputs.
pub fn edit_runs<T: PartialEq>(old: &[T], new: &[T], strategy: Strategy) -> Vec<Run> {
    debug!(%strategy, n = old.len(), m = new.len(), "diff start");
    match strategy {
        Strategy::Simple => {
            let mut list = OpList;
            let found = run_search(old, new, &mut list);
            list.runs(&found.trace)
        }
        Strategy::Efficient => {
            let mut chain = RunChain::new();
            let found = run_search(old, new, &mut chain);
            debug!(nodes = chain.len(), depth = found.depth, "run chain built");
            chain.runs(&found.trace)
        }
    }
}

/// Number of `Add` plus `Remove` units in a minimal script from `old` to `new`.
pub fn edit_distance<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    run_search(old, new, &mut RunChain::new()).depth
}

fn run_search<T: PartialEq, S: TraceStore>(
    old: &[T],
    new: &[T],
    store: &mut S,
) -> search::Found<S::Trace> {
    let found = search::search(old, new, store);
    debug_assert_eq!(found.diagonal, old.len() as isize - new.len() as isize);
    found
}
