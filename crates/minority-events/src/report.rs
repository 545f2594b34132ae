//! Report Records
//!
//! Serializable results of a simulation run, one record per scenario.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Regime;

/// Win count for one agent within a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinRecord {
    pub name: String,
    pub wins: u64,
    /// Wins divided by trials
    pub win_rate: f64,
}

/// Results of all trials for a single scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub title: String,
    pub regime: Regime,
    pub trials: u64,
    /// Rounds that ended without a strict minority
    pub ties: u64,
    /// Ordered by wins descending
    #[serde(default)]
    pub wins: Vec<WinRecord>,
}

impl ScenarioReport {
    pub fn total_wins(&self) -> u64 {
        self.wins.iter().map(|w| w.wins).sum()
    }

    pub fn wins_for(&self, name: &str) -> u64 {
        self.wins
            .iter()
            .find(|w| w.name == name)
            .map(|w| w.wins)
            .unwrap_or(0)
    }
}

/// Full output of one `minority_sim` invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub run_id: Uuid,
    pub seed: u64,
    pub trials: u64,
    pub scenarios: Vec<ScenarioReport>,
}

impl SimulationReport {
    pub fn new(seed: u64, trials: u64) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            seed,
            trials,
            scenarios: Vec::new(),
        }
    }

    pub fn push(&mut self, scenario: ScenarioReport) {
        self.scenarios.push(scenario);
    }

    pub fn scenario(&self, name: &str) -> Option<&ScenarioReport> {
        self.scenarios.iter().find(|s| s.scenario == name)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
