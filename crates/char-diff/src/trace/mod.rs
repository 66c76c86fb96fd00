//! Raw edit traces recorded by the frontier search.
//!
//! A [`TraceStore`] decides how a frontier's partial script is kept while the
//! search runs, and how the winning one is turned back into forward runs:
//!
//! - [`OpList`]: every frontier owns a flat `Vec<DiffOp>`, one tag per unit.
//! - [`RunChain`]: every frontier holds a handle into a shared arena of
//!   immutable run nodes linked towards the start of the script.

mod chain;
mod list;

pub use chain::{NodeId, RunChain};
pub use list::OpList;

use crate::op::{DiffOp, Run};

/// Storage strategy for partial edit scripts.
///
/// `Trace::default()` must be the empty script.
pub trait TraceStore {
    type Trace: Clone + Default;

    /// A new trace: `from` followed by one costed unit of `op`.
    /// `from` stays valid and unchanged.
    fn step(&mut self, from: &Self::Trace, op: DiffOp) -> Self::Trace;

    /// Appends `len` units of `op` to `trace` in place.
    fn extend(&mut self, trace: &mut Self::Trace, op: DiffOp, len: usize);

    /// The script recorded by `trace`, first run first. Never yields an
    /// empty run.
    fn runs(&self, trace: &Self::Trace) -> Vec<Run>;
}
