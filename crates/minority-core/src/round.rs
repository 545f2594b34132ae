//! Round Evaluator
//!
//! Runs one round of the minority game: every agent votes in the caller's
//! order, each seeing the ballots cast before it, then the strict minority
//! side wins. Equal counts produce no winners.

use minority_events::{Regime, Tally, Vote};
use rand::Rng;
use tracing::trace;

use crate::agent::Agent;
use crate::error::GameError;

/// Result of a single round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub regime: Regime,
    /// Ballots in voting order, one per agent
    pub votes: Vec<Vote>,
    pub tally: Tally,
    /// The strictly smaller side, `None` on a tie
    pub minority: Option<Vote>,
    /// Indices of winning agents, in voting order
    pub winners: Vec<usize>,
}

impl RoundOutcome {
    fn from_votes(regime: Regime, votes: Vec<Vote>) -> Self {
        let tally = Tally::of(&votes);
        let minority = tally.minority();
        let winners = match minority {
            Some(side) => votes
                .iter()
                .enumerate()
                .filter(|(_, vote)| **vote == side)
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        };

        Self {
            regime,
            votes,
            tally,
            minority,
            winners,
        }
    }

    pub fn is_tie(&self) -> bool {
        self.minority.is_none()
    }

    /// The winning agents, resolved against the slice the round was run on.
    pub fn winning_agents<'a>(
        &'a self,
        agents: &'a [Agent],
    ) -> impl Iterator<Item = &'a Agent> + 'a {
        self.winners.iter().filter_map(move |&i| agents.get(i))
    }

    pub fn winner_names<'a>(&'a self, agents: &'a [Agent]) -> Vec<&'a str> {
        self.winning_agents(agents).map(Agent::name).collect()
    }
}

/// Run one round under `regime`.
pub fn minority_rule<R: Rng>(agents: &[Agent], regime: Regime, rng: &mut R) -> RoundOutcome {
    let mut votes = Vec::with_capacity(agents.len());

    for agent in agents {
        let vote = agent.vote(regime, &votes, rng);
        trace!(agent = agent.name(), %vote, "vote cast");
        votes.push(vote);
    }

    let outcome = RoundOutcome::from_votes(regime, votes);
    trace!(
        yes = outcome.tally.yes,
        no = outcome.tally.no,
        winners = outcome.winners.len(),
        "round complete"
    );
    outcome
}

/// Run one round with a regime given by name.
///
/// The name is checked before any agent decides, so an unknown regime leaves
/// the random source untouched.
pub fn minority_rule_named<R: Rng>(
    agents: &[Agent],
    regime: &str,
    rng: &mut R,
) -> Result<RoundOutcome, GameError> {
    let regime: Regime = regime.parse()?;
    Ok(minority_rule(agents, regime, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn free_agents(n: usize) -> Vec<Agent> {
        (0..n).map(|i| Agent::new(format!("agent_{}", i))).collect()
    }

    #[test]
    fn test_declared_minority_wins() {
        let mut rng = SmallRng::seed_from_u64(1);
        let agents = vec![
            Agent::new("a").with_declared(Vote::Yes),
            Agent::new("b").with_declared(Vote::Yes),
            Agent::new("c").with_declared(Vote::No),
        ];

        let outcome = minority_rule(&agents, Regime::Basic, &mut rng);
        assert_eq!(outcome.votes, vec![Vote::Yes, Vote::Yes, Vote::No]);
        assert_eq!(outcome.minority, Some(Vote::No));
        assert_eq!(outcome.winners, vec![2]);
        assert_eq!(outcome.winner_names(&agents), vec!["c"]);
    }

    #[test]
    fn test_tie_has_no_winners() {
        let mut rng = SmallRng::seed_from_u64(2);
        for regime in Regime::all() {
            for n in [2usize, 4, 6, 10] {
                for _ in 0..200 {
                    let outcome = minority_rule(&free_agents(n), *regime, &mut rng);
                    if outcome.tally.yes == outcome.tally.no {
                        assert!(outcome.is_tie());
                        assert!(outcome.winners.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_unanimous_round_has_no_winners() {
        // The minority side exists but nobody is on it
        let mut rng = SmallRng::seed_from_u64(8);
        let agents = vec![
            Agent::new("a").with_declared(Vote::No),
            Agent::new("b").with_declared(Vote::No),
        ];
        let outcome = minority_rule(&agents, Regime::Basic, &mut rng);
        assert_eq!(outcome.minority, Some(Vote::Yes));
        assert!(outcome.winners.is_empty());
    }

    #[test]
    fn test_empty_round_is_a_tie() {
        let mut rng = SmallRng::seed_from_u64(3);
        let outcome = minority_rule(&[], Regime::Info, &mut rng);
        assert!(outcome.votes.is_empty());
        assert!(outcome.is_tie());
    }

    #[test]
    fn test_winners_all_share_minority_vote() {
        let mut rng = SmallRng::seed_from_u64(4);
        let agents = free_agents(7);
        for _ in 0..500 {
            let outcome = minority_rule(&agents, Regime::Reliable, &mut rng);
            // Odd agent count never ties
            let side = outcome.minority.expect("odd count has a minority");
            assert!(outcome.winners.len() * 2 < agents.len());
            for &i in &outcome.winners {
                assert_eq!(outcome.votes[i], side);
            }
        }
    }

    #[test]
    fn test_later_agents_see_earlier_votes() {
        // A noiseless info agent always opposes a lone earlier vote
        let mut rng = SmallRng::seed_from_u64(5);
        let agents = vec![
            Agent::new("leader").with_declared(Vote::No),
            Agent::new("follower"),
        ];
        for _ in 0..100 {
            let outcome = minority_rule(&agents, Regime::Info, &mut rng);
            assert_eq!(outcome.votes, vec![Vote::No, Vote::Yes]);
        }
    }

    #[test]
    fn test_unknown_regime_runs_no_decisions() {
        let mut rng = SmallRng::seed_from_u64(6);
        let untouched = rng.clone();

        let err = minority_rule_named(&free_agents(3), "mystery", &mut rng).unwrap_err();
        assert!(matches!(err, GameError::UnknownRegime(_)));
        assert_eq!(rng.gen::<u64>(), untouched.clone().gen::<u64>());
    }

    #[test]
    fn test_named_regime_matches_enum() {
        let agents = free_agents(5);
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);

        let named = minority_rule_named(&agents, "unreliable", &mut a).unwrap();
        let typed = minority_rule(&agents, Regime::Unreliable, &mut b);
        assert_eq!(named, typed);
    }
}
