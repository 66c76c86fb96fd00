use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DiffError;

/// How partial scripts are kept during the search.
///
/// Both strategies return the same script for the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// One flat list of unit operations per frontier record.
    Simple,
    /// Shared, run-length-encoded chains of run nodes.
    #[default]
    Efficient,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Simple => "simple",
            Strategy::Efficient => "efficient",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Strategy::Simple),
            "efficient" => Ok(Strategy::Efficient),
            _ => Err(DiffError::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_efficient() {
        assert_eq!(Strategy::default(), Strategy::Efficient);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Simple".parse::<Strategy>(), Ok(Strategy::Simple));
        assert_eq!(" EFFICIENT ".parse::<Strategy>(), Ok(Strategy::Efficient));
    }

    #[test]
    fn display_round_trips() {
        for s in [Strategy::Simple, Strategy::Efficient] {
            assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "heuristic".parse::<Strategy>().unwrap_err();
        assert_eq!(err, DiffError::UnknownStrategy("heuristic".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown diff strategy `heuristic`, expected `simple` or `efficient`"
        );
    }
}
