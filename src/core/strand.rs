//! Strand orientation shared by PSL alignments and genePred transcripts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation of a query sequence relative to its target.
///
/// PSL stores reverse-strand query block starts in the reversed query frame,
/// so most coordinate arithmetic in this crate branches on this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    /// `+` in PSL/genePred text.
    #[serde(rename = "+")]
    Forward,
    /// `-` in PSL/genePred text.
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    /// Parse a strand field. Returns `None` for anything other than `+` or `-`.
    ///
    /// Translated BLAT output can carry two-character strands (`++`, `+-`);
    /// those never appear in transMap or genePred-derived PSL and are rejected.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Forward),
            "-" => Some(Self::Reverse),
            _ => None,
        }
    }

    /// True for the reverse strand.
    #[must_use]
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::Reverse)
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Strand::parse("+"), Some(Strand::Forward));
        assert_eq!(Strand::parse("-"), Some(Strand::Reverse));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Strand::parse(""), None);
        assert_eq!(Strand::parse("++"), None);
        assert_eq!(Strand::parse("."), None);
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(Strand::Forward.to_string(), "+");
        assert_eq!(Strand::Reverse.to_string(), "-");
        assert_eq!(Strand::parse(&Strand::Reverse.to_string()), Some(Strand::Reverse));
    }

    #[test]
    fn test_is_reverse() {
        assert!(!Strand::Forward.is_reverse());
        assert!(Strand::Reverse.is_reverse());
    }
}
