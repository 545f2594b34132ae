//! Trial Runner
//!
//! Repeats independent rounds over a fixed roster and counts wins per agent.
//! Each trial draws from its own generator seeded from `(seed, trial)`, so a
//! run is reproducible and trials never share random state.

use std::collections::HashMap;

use minority_events::Regime;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;

use crate::agent::Agent;
use crate::error::GameError;
use crate::round::minority_rule;

/// Odd 64-bit constant used to spread trial indices across the seed space
const TRIAL_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Generator for a single trial
pub fn trial_rng(seed: u64, trial: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed ^ trial.wrapping_mul(TRIAL_SEED_STRIDE))
}

/// Win counts accumulated over many trials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinTally {
    pub trials: u64,
    /// Trials that ended in an exact tie
    pub ties: u64,
    wins: HashMap<String, u64>,
}

impl WinTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&mut self, name: &str) {
        *self.wins.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn wins(&self, name: &str) -> u64 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    pub fn total_wins(&self) -> u64 {
        self.wins.values().sum()
    }

    /// True when no agent ever won
    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    /// Wins per trial for `name`
    pub fn win_rate(&self, name: &str) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.wins(name) as f64 / self.trials as f64
    }

    /// Agents that won at least once, most wins first; equal counts are
    /// ordered by name.
    pub fn most_common(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .wins
            .iter()
            .map(|(name, &count)| (name.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Run `trials` independent rounds of `agents` under `regime`.
pub fn run_simulation(agents: &[Agent], regime: Regime, trials: u64, seed: u64) -> WinTally {
    debug!(
        agents = agents.len(),
        %regime,
        trials,
        seed,
        "running trials"
    );

    let mut tally = WinTally::new();
    for trial in 0..trials {
        let mut rng = trial_rng(seed, trial);
        let outcome = minority_rule(agents, regime, &mut rng);

        tally.trials += 1;
        if outcome.is_tie() {
            tally.ties += 1;
        }
        for agent in outcome.winning_agents(agents) {
            tally.record_win(agent.name());
        }
    }

    debug!(
        total_wins = tally.total_wins(),
        ties = tally.ties,
        "trials complete"
    );
    tally
}

/// [`run_simulation`] with a regime given by name; fails before any trial
/// runs if the name is unknown.
pub fn run_simulation_named(
    agents: &[Agent],
    regime: &str,
    trials: u64,
    seed: u64,
) -> Result<WinTally, GameError> {
    let regime: Regime = regime.parse()?;
    Ok(run_simulation(agents, regime, trials, seed))
}
