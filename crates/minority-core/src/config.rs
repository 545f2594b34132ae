//! Configuration System
//!
//! Loads run settings and scenario rosters from scenarios.toml so new
//! experiments can be described without recompiling.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use minority_events::{Regime, Vote};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::agent::Agent;

/// Default scenario file path
pub const DEFAULT_SCENARIO_PATH: &str = "scenarios.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
}

/// Run parameters shared by every scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Independent rounds per scenario
    pub trials: u64,
    /// Base seed; each trial derives its own generator from it
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 1_000_000,
            seed: 42,
        }
    }
}

const CHARACTER_HEADING: &str =
    "CHARACTER-BASED SCENARIOS (Testing what happens if certain personalities impact actions)";

/// Report grouping for a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioGroup {
    #[default]
    Baseline,
    Character,
}

impl ScenarioGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            ScenarioGroup::Baseline => "BASELINE SCENARIOS",
            ScenarioGroup::Character => CHARACTER_HEADING,
        }
    }
}

/// One roster and regime to simulate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Identifier used on the command line and in JSON output
    pub name: String,
    /// Heading printed in the report
    pub title: String,
    /// Extra lines printed under the heading
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default)]
    pub group: ScenarioGroup,
    pub regime: Regime,
    /// Voting order is the order listed here
    pub agents: Vec<AgentConfig>,
}

impl ScenarioConfig {
    pub fn new(name: &str, title: &str, group: ScenarioGroup, regime: Regime) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            notes: Vec::new(),
            group,
            regime,
            agents: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.notes.push(note.to_string());
        self
    }

    pub fn with_agents(mut self, agents: Vec<AgentConfig>) -> Self {
        self.agents = agents;
        self
    }

    /// Build the roster in voting order
    pub fn roster(&self) -> Vec<Agent> {
        self.agents.iter().map(AgentConfig::to_agent).collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.agents.is_empty() {
            return Err(ConfigError::EmptyRoster(self.name.clone()));
        }

        let mut seen = HashSet::new();
        for agent in &self.agents {
            if !seen.insert(agent.name.as_str()) {
                return Err(ConfigError::DuplicateAgent {
                    scenario: self.name.clone(),
                    agent: agent.name.clone(),
                });
            }
            agent.validate(&self.name)?;
        }
        Ok(())
    }
}

/// Per-agent parameters as written in the scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared: Option<Vote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias: Option<Vote>,
    #[serde(default)]
    pub hesitancy: f32,
    #[serde(default)]
    pub overconfidence: f32,
}

impl AgentConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            declared: None,
            bias: None,
            hesitancy: 0.0,
            overconfidence: 0.0,
        }
    }

    pub fn declared(mut self, vote: Vote) -> Self {
        self.declared = Some(vote);
        self
    }

    pub fn bias(mut self, vote: Vote) -> Self {
        self.bias = Some(vote);
        self
    }

    pub fn hesitancy(mut self, hesitancy: f32) -> Self {
        self.hesitancy = hesitancy;
        self
    }

    pub fn overconfidence(mut self, overconfidence: f32) -> Self {
        self.overconfidence = overconfidence;
        self
    }

    pub fn to_agent(&self) -> Agent {
        let mut agent = Agent::new(&self.name)
            .with_hesitancy(self.hesitancy)
            .with_overconfidence(self.overconfidence);
        if let Some(vote) = self.declared {
            agent = agent.with_declared(vote);
        }
        if let Some(vote) = self.bias {
            agent = agent.with_bias(vote);
        }
        agent
    }

    fn validate(&self, scenario: &str) -> Result<(), ConfigError> {
        for (field, value) in [
            ("hesitancy", self.hesitancy),
            ("overconfidence", self.overconfidence),
        ] {
            // NaN fails the range check
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability {
                    scenario: scenario.to_string(),
                    agent: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Load from `path` if it exists, otherwise use the built-in scenarios.
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            info!("Loading scenarios from {}", path.display());
            Self::load(path)
        } else {
            info!("{} not found, using built-in scenarios", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }

        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            if !seen.insert(scenario.name.as_str()) {
                return Err(ConfigError::DuplicateScenario(scenario.name.clone()));
            }
            scenario.validate()?;
        }
        Ok(())
    }

    pub fn scenario(&self, name: &str) -> Option<&ScenarioConfig> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Keep only the named scenario
    pub fn select(&mut self, name: &str) -> Result<(), ConfigError> {
        if self.scenario(name).is_none() {
            return Err(ConfigError::UnknownScenario(name.to_string()));
        }
        self.scenarios.retain(|s| s.name == name);
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        use ScenarioGroup::{Baseline, Character};

        let akiyama = || AgentConfig::new("Akiyama").declared(Vote::Yes);
        let fukunaga = || AgentConfig::new("Fukunaga");
        let eto = || AgentConfig::new("Eto");
        let ishida = || AgentConfig::new("Ishida");
        let plain = || vec![akiyama(), fukunaga(), eto(), ishida()];
        let combined = |fukunaga_overconfidence: f32| {
            vec![
                akiyama(),
                fukunaga().overconfidence(fukunaga_overconfidence),
                eto().hesitancy(0.25),
                ishida().bias(Vote::Yes),
            ]
        };

        let scenarios = vec![
            ScenarioConfig::new(
                "basic",
                "Basic (simultaneous, random voting)",
                Baseline,
                Regime::Basic,
            )
            .with_agents(plain()),
            ScenarioConfig::new(
                "info",
                "Perfect info (100% rational, always minority)",
                Baseline,
                Regime::Info,
            )
            .with_agents(plain()),
            ScenarioConfig::new(
                "reliable",
                "Reliable info (80% trust, 20% doubt)",
                Baseline,
                Regime::Reliable,
            )
            .with_agents(plain()),
            ScenarioConfig::new(
                "unreliable",
                "Unreliable info (30% trust, 70% doubt)",
                Baseline,
                Regime::Unreliable,
            )
            .with_agents(plain()),
            ScenarioConfig::new(
                "fukunaga_overconfident",
                "Fukunaga is sly & overconfident (reliable info, 40% overconfidence)",
                Character,
                Regime::Reliable,
            )
            .with_note(
                "(Fukunaga thinks they're smarter and often does opposite of 'correct' choice)",
            )
            .with_agents(vec![akiyama(), fukunaga().overconfidence(0.4), eto(), ishida()]),
            ScenarioConfig::new(
                "eto_hesitant",
                "Eto is cautious & analytical (reliable info, 25% hesitancy)",
                Character,
                Regime::Reliable,
            )
            .with_note("(Eto overthinks and second-guesses decisions)")
            .with_agents(vec![akiyama(), fukunaga(), eto().hesitancy(0.25), ishida()]),
            ScenarioConfig::new(
                "ishida_biased",
                "Ishida is impulsive with Yes bias (reliable info)",
                Character,
                Regime::Reliable,
            )
            .with_note("(Ishida tends to vote Yes when uncertain)")
            .with_agents(vec![akiyama(), fukunaga(), eto(), ishida().bias(Vote::Yes)]),
            ScenarioConfig::new(
                "combined_reliable",
                "All characters combined (reliable info 80% trust)",
                Character,
                Regime::Reliable,
            )
            .with_note("Akiyama declares Yes, Fukunaga overconfident, Eto hesitant, Ishida biased")
            .with_agents(combined(0.4)),
            ScenarioConfig::new(
                "combined_unreliable",
                "All characters combined (unreliable info 30% trust)",
                Character,
                Regime::Unreliable,
            )
            .with_note("Same setup but with lower trust in information")
            .with_agents(combined(0.4)),
            ScenarioConfig::new(
                "extreme_overconfidence",
                "Extreme overconfidence (Fukunaga 60% overconfident, reliable info)",
                Character,
                Regime::Reliable,
            )
            .with_note("Testing if very high overconfidence helps Akiyama")
            .with_agents(combined(0.6)),
        ];

        Self {
            simulation: SimulationConfig::default(),
            scenarios,
        }
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("trials must be greater than zero")]
    ZeroTrials,
    #[error("scenario '{0}' has no agents")]
    EmptyRoster(String),
    #[error("scenario '{0}' is defined more than once")]
    DuplicateScenario(String),
    #[error("scenario '{scenario}' lists agent '{agent}' more than once")]
    DuplicateAgent { scenario: String, agent: String },
    #[error("scenario '{scenario}': {field} for '{agent}' must be within 0.0..=1.0, got {value}")]
    InvalidProbability {
        scenario: String,
        agent: String,
        field: &'static str,
        value: f32,
    },
    #[error("no scenario named '{0}'")]
    UnknownScenario(String),
}
