use super::TraceStore;
use crate::op::{DiffOp, Run};

/// Flat, one-tag-per-unit traces.
///
/// Each costed step copies the predecessor's whole list, so the footprint
/// grows with the square of the edit distance. Kept as the reference the
/// chain form is checked against.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpList;

impl TraceStore for OpList {
    type Trace = Vec<DiffOp>;

    fn step(&mut self, from: &Vec<DiffOp>, op: DiffOp) -> Vec<DiffOp> {
        let mut ops = Vec::with_capacity(from.len() + 1);
        ops.extend_from_slice(from);
        ops.push(op);
        ops
    }

    fn extend(&mut self, trace: &mut Vec<DiffOp>, op: DiffOp, len: usize) {
        trace.extend(std::iter::repeat(op).take(len));
    }

    fn runs(&self, trace: &Vec<DiffOp>) -> Vec<Run> {
        coalesce(trace)
    }
}

/// Collapses consecutive identical tags into runs, in order.
pub fn coalesce(ops: &[DiffOp]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for &op in ops {
        match runs.last_mut() {
            Some(last) if last.op == op => last.len += 1,
            _ => runs.push(Run::new(op, 1)),
        }
    }
    runs
}
