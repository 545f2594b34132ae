//! Shared vote, regime and report types for the minority game simulator.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod regime;
pub mod report;
pub mod vote;

pub use regime::{Regime, UnknownRegime};
pub use report::{ScenarioReport, SimulationReport, WinRecord};
pub use vote::{ParseVoteError, Tally, Vote};
