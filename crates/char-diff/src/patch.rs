//! Helpers over finished character-level scripts.

use crate::error::DiffError;
use crate::op::{DiffOp, Span};

/// Drops empty spans and merges neighbours of the same kind.
pub fn normalize(spans: Vec<Span>) -> Vec<Span> {
    let mut out: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_empty() {
            continue;
        }
        if let Some(last) = out.last_mut() {
            if last.op == span.op {
                last.value.push_str(&span.value);
                continue;
            }
        }
        out.push(span);
    }
    out
}

/// The `old` side of a script: `Same` and `Remove` text, in order.
pub fn src(spans: &[Span]) -> String {
    collect(spans, DiffOp::in_old)
}

/// The `new` side of a script: `Same` and `Add` text, in order.
pub fn dst(spans: &[Span]) -> String {
    collect(spans, DiffOp::in_new)
}

fn collect(spans: &[Span], keep: fn(DiffOp) -> bool) -> String {
    let mut out = String::new();
    for span in spans {
        if keep(span.op) {
            out.push_str(&span.value);
        }
    }
    out
}

/// Number of edited chars: `Add` plus `Remove`.
pub fn distance(spans: &[Span]) -> usize {
    spans
        .iter()
        .filter(|span| span.op != DiffOp::Same)
        .map(Span::len)
        .sum()
}

/// The script that undoes `spans`: every `Add` becomes a `Remove` and vice versa.
pub fn invert(spans: &[Span]) -> Vec<Span> {
    spans
        .iter()
        .map(|span| Span {
            value: span.value.clone(),
            op: span.op.inverse(),
        })
        .collect()
}

/// Replays `spans` against `old` and returns the text it produces.
///
/// Every `Same` and `Remove` span must match `old` at the current position,
/// and the script must consume all of `old`.
pub fn apply(old: &str, spans: &[Span]) -> Result<String, DiffError> {
    let source: Vec<char> = old.chars().collect();
    let mut out = String::with_capacity(old.len());
    let mut offset = 0usize;

    for span in spans {
        if span.op.in_old() {
            let end = offset + span.len();
            if end > source.len() {
                return Err(DiffError::SourceExhausted {
                    offset,
                    needed: end - source.len(),
                });
            }
            let found: String = source[offset..end].iter().collect();
            if found != span.value {
                return Err(DiffError::SourceMismatch {
                    offset,
                    expected: span.value.clone(),
                    found,
                });
            }
            offset = end;
        }
        if span.op.in_new() {
            out.push_str(&span.value);
        }
    }

    if offset < source.len() {
        return Err(DiffError::TrailingSource {
            offset,
            remaining: source.len() - offset,
        });
    }
    Ok(out)
}
