//! Agent
//!
//! An agent's identity and behavioural parameters, plus one vote-decision
//! operation per regime. Parameters are fixed at construction; the vote for a
//! round is returned rather than stored.

use minority_events::{Regime, Vote};
use rand::Rng;

use crate::decision::{self, TrustBranch, TrustThresholds};

/// A player in the minority game
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    name: String,
    /// Fixed vote that overrides all decision logic
    declared: Option<Vote>,
    /// Fallback preference when there is no clear signal
    bias: Option<Vote>,
    /// Chance to second-guess and flip a determined vote (0.0 to 1.0)
    hesitancy: f32,
    /// Chance to think they're smarter and flip a determined vote (0.0 to 1.0)
    overconfidence: f32,
}

impl Agent {
    /// An undeclared, unbiased agent with no hesitancy or overconfidence
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared: None,
            bias: None,
            hesitancy: 0.0,
            overconfidence: 0.0,
        }
    }

    pub fn with_declared(mut self, vote: Vote) -> Self {
        self.declared = Some(vote);
        self
    }

    pub fn with_bias(mut self, vote: Vote) -> Self {
        self.bias = Some(vote);
        self
    }

    /// Clamped to 0.0..=1.0
    pub fn with_hesitancy(mut self, hesitancy: f32) -> Self {
        self.hesitancy = hesitancy.clamp(0.0, 1.0);
        self
    }

    /// Clamped to 0.0..=1.0
    pub fn with_overconfidence(mut self, overconfidence: f32) -> Self {
        self.overconfidence = overconfidence.clamp(0.0, 1.0);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared(&self) -> Option<Vote> {
        self.declared
    }

    pub fn bias(&self) -> Option<Vote> {
        self.bias
    }

    pub fn hesitancy(&self) -> f32 {
        self.hesitancy
    }

    pub fn overconfidence(&self) -> f32 {
        self.overconfidence
    }

    /// Decide under `regime`, given the votes already cast this round.
    pub fn vote<R: Rng>(&self, regime: Regime, votes_so_far: &[Vote], rng: &mut R) -> Vote {
        match regime {
            Regime::Basic => self.vote_basic(rng),
            Regime::Info => self.vote_info(votes_so_far, rng),
            Regime::Reliable => self.vote_reliable(votes_so_far, rng),
            Regime::Unreliable => self.vote_unreliable(votes_so_far, rng),
        }
    }

    /// No information: a bias-weighted coin.
    pub fn vote_basic<R: Rng>(&self, rng: &mut R) -> Vote {
        if let Some(declared) = self.declared {
            return declared;
        }
        decision::bias_weighted(self.bias, rng)
    }

    /// Full trust in the votes so far: aim for the current minority, then
    /// apply overconfidence and hesitancy.
    pub fn vote_info<R: Rng>(&self, votes_so_far: &[Vote], rng: &mut R) -> Vote {
        if let Some(declared) = self.declared {
            return declared;
        }
        let target = decision::minority_so_far(votes_so_far, self.bias, rng);
        self.apply_overrides(target, rng)
    }

    /// Information trusted 80% of the time.
    pub fn vote_reliable<R: Rng>(&self, votes_so_far: &[Vote], rng: &mut R) -> Vote {
        self.vote_with_doubt(TrustThresholds::RELIABLE, votes_so_far, rng)
    }

    /// Information trusted 30% of the time.
    pub fn vote_unreliable<R: Rng>(&self, votes_so_far: &[Vote], rng: &mut R) -> Vote {
        self.vote_with_doubt(TrustThresholds::UNRELIABLE, votes_so_far, rng)
    }

    fn vote_with_doubt<R: Rng>(
        &self,
        thresholds: TrustThresholds,
        votes_so_far: &[Vote],
        rng: &mut R,
    ) -> Vote {
        if let Some(declared) = self.declared {
            return declared;
        }
        let target = decision::minority_so_far(votes_so_far, self.bias, rng);

        match thresholds.classify(rng.gen::<f32>()) {
            TrustBranch::Trust => self.apply_overrides(target, rng),
            TrustBranch::RandomDoubt => decision::bias_weighted(self.bias, rng),
            TrustBranch::OppositeDoubt => target.opposite(),
        }
    }

    fn apply_overrides<R: Rng>(&self, target: Vote, rng: &mut R) -> Vote {
        decision::apply_overrides(target, self.overconfidence, self.hesitancy, rng)
    }
}
