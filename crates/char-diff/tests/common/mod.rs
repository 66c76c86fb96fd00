#![allow(dead_code)]

use char_diff::{patch, DiffOp, Span};

/// Insert/delete-only edit distance by dynamic programming over the LCS
/// table. Independent of the frontier search.
pub fn lcs_distance(old: &str, new: &str) -> usize {
    let a: Vec<char> = old.chars().collect();
    let b: Vec<char> = new.chars().collect();
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for ca in &a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    a.len() + b.len() - 2 * prev[b.len()]
}

/// Checks the invariants every returned script must satisfy.
pub fn assert_script(old: &str, new: &str, spans: &[Span]) {
    assert_eq!(patch::src(spans), old, "old side of {spans:?}");
    assert_eq!(patch::dst(spans), new, "new side of {spans:?}");
    assert!(
        spans.iter().all(|s| !s.is_empty()),
        "empty span in {spans:?}"
    );
    assert!(
        spans.windows(2).all(|w| w[0].op != w[1].op),
        "unmerged neighbours in {spans:?}"
    );
    assert_eq!(
        patch::distance(spans),
        lcs_distance(old, new),
        "not minimal for {old:?} -> {new:?}"
    );
}

pub fn ops(spans: &[Span]) -> Vec<DiffOp> {
    spans.iter().map(|s| s.op).collect()
}
