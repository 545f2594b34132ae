//! Vote Types
//!
//! The binary ballot cast by every agent each round.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single ballot.
///
/// Serializes to `"Yes"` / `"No"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vote {
    Yes,
    No,
}

impl Vote {
    /// Returns the other side of the ballot.
    pub fn opposite(self) -> Self {
        match self {
            Vote::Yes => Vote::No,
            Vote::No => Vote::Yes,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Yes => "Yes",
            Vote::No => "No",
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither "Yes" nor "No".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid vote: '{0}', expected 'Yes' or 'No'")]
pub struct ParseVoteError(pub String);

impl FromStr for Vote {
    type Err = ParseVoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(Vote::Yes),
            "no" => Ok(Vote::No),
            _ => Err(ParseVoteError(s.to_string())),
        }
    }
}

/// Counts of each side within a sequence of votes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub yes: usize,
    pub no: usize,
}

impl Tally {
    /// Counts the votes in `votes`.
    pub fn of(votes: &[Vote]) -> Self {
        votes.iter().fold(Self::default(), |mut tally, vote| {
            match vote {
                Vote::Yes => tally.yes += 1,
                Vote::No => tally.no += 1,
            }
            tally
        })
    }

    /// The side with strictly fewer votes, or `None` on an exact tie.
    pub fn minority(&self) -> Option<Vote> {
        if self.yes < self.no {
            Some(Vote::Yes)
        } else if self.no < self.yes {
            Some(Vote::No)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Vote::Yes.opposite(), Vote::No);
        assert_eq!(Vote::No.opposite(), Vote::Yes);
    }

    #[test]
    fn test_parse_vote() {
        assert_eq!("Yes".parse::<Vote>(), Ok(Vote::Yes));
        assert_eq!("no".parse::<Vote>(), Ok(Vote::No));
        assert_eq!(
            "maybe".parse::<Vote>(),
            Err(ParseVoteError("maybe".to_string()))
        );
    }

    #[test]
    fn test_vote_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&Vote::Yes).unwrap(), "\"Yes\"");
        let parsed: Vote = serde_json::from_str("\"No\"").unwrap();
        assert_eq!(parsed, Vote::No);
    }

    #[test]
    fn test_tally_minority() {
        let votes = [Vote::Yes, Vote::No, Vote::No];
        let tally = Tally::of(&votes);
        assert_eq!(tally, Tally { yes: 1, no: 2 });
        assert_eq!(tally.minority(), Some(Vote::Yes));

        let tie = Tally::of(&[Vote::Yes, Vote::No]);
        assert_eq!(tie.minority(), None);

        assert_eq!(Tally::of(&[]).minority(), None);
    }
}
