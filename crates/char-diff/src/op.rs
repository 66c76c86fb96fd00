//! Operation tags and the shapes an edit script takes on its way out.
//!
//! - [`DiffOp`]: the closed set of unit edit kinds
//! - [`Run`]: `len` consecutive units of one kind, no text attached
//! - [`Hunk`]: a run materialized as a borrowed slice of the input
//! - [`Span`]: a run materialized as owned text (character diffs)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of a single unit edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum DiffOp {
    /// Unit present unchanged in both sequences.
    Same = 0,
    /// Unit present only in `new`.
    Add = 1,
    /// Unit present only in `old`.
    Remove = 2,
}

impl DiffOp {
    /// Whether this unit is consumed from `old`.
    pub fn in_old(self) -> bool {
        matches!(self, DiffOp::Same | DiffOp::Remove)
    }

    /// Whether this unit is consumed from `new`.
    pub fn in_new(self) -> bool {
        matches!(self, DiffOp::Same | DiffOp::Add)
    }

    /// `Add` and `Remove` swapped; `Same` stays.
    pub fn inverse(self) -> DiffOp {
        match self {
            DiffOp::Same => DiffOp::Same,
            DiffOp::Add => DiffOp::Remove,
            DiffOp::Remove => DiffOp::Add,
        }
    }
}

/// A maximal run of same-kind unit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Run {
    pub op: DiffOp,
    pub len: usize,
}

impl Run {
    pub fn new(op: DiffOp, len: usize) -> Self {
        Self { op, len }
    }
}

/// A run sliced out of the sequence it came from.
///
/// `Same` and `Add` hunks borrow from `new`, `Remove` hunks from `old`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hunk<'a, T> {
    pub op: DiffOp,
    pub items: &'a [T],
}

/// A labeled piece of text in a character-level edit script.
///
/// `Same` text is taken from `new`; for `Same` the two sequences agree
/// anyway, but callers must not rely on it pointing into `old`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub value: String,
    pub op: DiffOp,
}

impl Span {
    pub fn new(op: DiffOp, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            op,
        }
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl<'a> From<Hunk<'a, char>> for Span {
    fn from(hunk: Hunk<'a, char>) -> Self {
        Span {
            value: hunk.items.iter().collect(),
            op: hunk.op,
        }
    }
}
