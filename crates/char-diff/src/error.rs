use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("unknown diff strategy `{0}`, expected `simple` or `efficient`")]
    UnknownStrategy(String),
    #[error("script expects {expected:?} at char {offset}, source has {found:?}")]
    SourceMismatch {
        offset: usize,
        expected: String,
        found: String,
    },
    #[error("script needs {needed} more chars at char {offset}, source is exhausted")]
    SourceExhausted { offset: usize, needed: usize },
    #[error("script ends at char {offset} with {remaining} source chars left over")]
    TrailingSource { offset: usize, remaining: usize },
}
