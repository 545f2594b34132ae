//! Minority Game Simulation Library
//!
//! Agents cast Yes/No ballots in a fixed order; whoever lands on the strict
//! numeric minority wins the round. Four regimes control how much an agent
//! knows about, and trusts, the ballots cast before its own.

pub mod agent;
pub mod config;
pub mod decision;
pub mod error;
pub mod output;
pub mod round;
pub mod trial;

pub use agent::Agent;
pub use config::{AgentConfig, Config, ConfigError, ScenarioConfig, ScenarioGroup};
pub use error::GameError;
pub use round::{minority_rule, minority_rule_named, RoundOutcome};
pub use trial::{run_simulation, run_simulation_named, trial_rng, WinTally};

pub use minority_events::{Regime, Tally, UnknownRegime, Vote};
