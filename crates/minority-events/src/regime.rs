//! Regime Types
//!
//! The four information/trust policies an agent can vote under.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Information regime governing how undeclared agents decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Simultaneous voting, no information about other ballots
    Basic,
    /// Sequential voting with full trust in the votes cast so far
    Info,
    /// Sequential voting, information trusted 80% of the time
    Reliable,
    /// Sequential voting, information trusted 30% of the time
    Unreliable,
}

impl Regime {
    /// Returns all regime variants.
    pub fn all() -> &'static [Regime] {
        &[
            Regime::Basic,
            Regime::Info,
            Regime::Reliable,
            Regime::Unreliable,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Basic => "basic",
            Regime::Info => "info",
            Regime::Reliable => "reliable",
            Regime::Unreliable => "unreliable",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a regime name outside the four recognized values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown regime: '{0}', expected one of basic, info, reliable, unreliable")]
pub struct UnknownRegime(pub String);

impl FromStr for Regime {
    type Err = UnknownRegime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Regime::Basic),
            "info" => Ok(Regime::Info),
            "reliable" => Ok(Regime::Reliable),
            "unreliable" => Ok(Regime::Unreliable),
            _ => Err(UnknownRegime(s.to_string())),
        }
    }
}
