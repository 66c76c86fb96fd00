use super::TraceStore;
use crate::op::{DiffOp, Run};

/// Index of a node in a [`RunChain`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy)]
struct RunNode {
    op: DiffOp,
    len: usize,
    /// Run immediately before this one in the script, `None` at the start.
    prev: Option<NodeId>,
}

/// Arena of run nodes forming persistent, backwards-linked scripts.
///
/// A trace is a handle to its last run (`None` for the empty script). Nodes
/// are never mutated after they are pushed, so any number of frontiers can
/// share a common prefix. Appending a unit of the same kind as the head does
/// not grow the chain: a replacement head absorbing the old length is pushed
/// and linked to the old head's predecessor.
#[derive(Debug, Default, Clone)]
pub struct RunChain {
    nodes: Vec<RunNode>,
}

impl RunChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes allocated so far, live or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> &RunNode {
        &self.nodes[id.0]
    }

    fn merge(&mut self, op: DiffOp, len: usize, head: Option<NodeId>) -> Option<NodeId> {
        let node = match head.map(|id| *self.node(id)) {
            Some(prev) if prev.op == op => RunNode {
                op,
                len: prev.len + len,
                prev: prev.prev,
            },
            _ => RunNode { op, len, prev: head },
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        Some(id)
    }
}

impl TraceStore for RunChain {
    type Trace = Option<NodeId>;

    fn step(&mut self, from: &Option<NodeId>, op: DiffOp) -> Option<NodeId> {
        self.merge(op, 1, *from)
    }

    fn extend(&mut self, trace: &mut Option<NodeId>, op: DiffOp, len: usize) {
        if len > 0 {
            *trace = self.merge(op, len, *trace);
        }
    }

    fn runs(&self, trace: &Option<NodeId>) -> Vec<Run> {
        let mut runs = Vec::new();
        let mut cursor = *trace;
        while let Some(id) = cursor {
            let node = self.node(id);
            runs.push(Run::new(node.op, node.len));
            cursor = node.prev;
        }
        // Links point towards the start of the script.
        runs.reverse();
        runs
    }
}
