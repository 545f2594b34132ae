//! Decision Primitives
//!
//! The building blocks every regime composes: a bias-weighted coin, the
//! minority-so-far target, the overconfidence/hesitancy override chain and the
//! trust/doubt split used by the reliable and unreliable regimes.

use minority_events::{Tally, Vote};
use rand::Rng;

/// Probability constants shared by the regimes
pub mod thresholds {
    /// Chance a biased agent follows its bias when it has no clear signal
    pub const BIAS_PULL: f32 = 0.6;
    /// Reliable info: 80% trust, 10% random, 10% opposite
    pub const RELIABLE_TRUST: f32 = 0.8;
    pub const RELIABLE_RANDOM_DOUBT: f32 = 0.9;
    /// Unreliable info: 30% trust, 35% random, 35% opposite
    pub const UNRELIABLE_TRUST: f32 = 0.3;
    pub const UNRELIABLE_RANDOM_DOUBT: f32 = 0.65;
}

/// Where a trust draw lands for the reliable/unreliable regimes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustBranch {
    /// Accept the target, subject to overconfidence and hesitancy
    Trust,
    /// Ignore the target and fall back to a bias-weighted coin
    RandomDoubt,
    /// Vote the exact opposite of the target
    OppositeDoubt,
}

/// Cut points splitting one uniform draw into trust, random doubt and
/// opposite doubt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrustThresholds {
    /// Draws below this value trust the information
    pub trust: f32,
    /// Draws below this value (and at or above `trust`) vote randomly
    pub random_doubt: f32,
}

impl TrustThresholds {
    pub const RELIABLE: Self = Self {
        trust: thresholds::RELIABLE_TRUST,
        random_doubt: thresholds::RELIABLE_RANDOM_DOUBT,
    };
    pub const UNRELIABLE: Self = Self {
        trust: thresholds::UNRELIABLE_TRUST,
        random_doubt: thresholds::UNRELIABLE_RANDOM_DOUBT,
    };

    pub fn classify(&self, r: f32) -> TrustBranch {
        if r < self.trust {
            TrustBranch::Trust
        } else if r < self.random_doubt {
            TrustBranch::RandomDoubt
        } else {
            TrustBranch::OppositeDoubt
        }
    }
}

/// Uniformly random vote
pub fn random_vote<R: Rng>(rng: &mut R) -> Vote {
    if rng.gen_bool(0.5) {
        Vote::Yes
    } else {
        Vote::No
    }
}

/// Follow `bias` with probability 0.6, otherwise flip a fair coin.
///
/// The bias draw is only taken when a bias is set.
pub fn bias_weighted<R: Rng>(bias: Option<Vote>, rng: &mut R) -> Vote {
    if let Some(preferred) = bias {
        if rng.gen::<f32>() < thresholds::BIAS_PULL {
            return preferred;
        }
    }
    random_vote(rng)
}

/// The side with strictly fewer votes so far; ties fall back to
/// [`bias_weighted`].
pub fn minority_so_far<R: Rng>(votes_so_far: &[Vote], bias: Option<Vote>, rng: &mut R) -> Vote {
    Tally::of(votes_so_far)
        .minority()
        .unwrap_or_else(|| bias_weighted(bias, rng))
}

/// Overconfidence is checked first; hesitancy is only drawn when the
/// overconfidence draw fails. Either one flips the target exactly once.
pub fn apply_overrides<R: Rng>(
    target: Vote,
    overconfidence: f32,
    hesitancy: f32,
    rng: &mut R,
) -> Vote {
    if rng.gen::<f32>() < overconfidence {
        target.opposite()
    } else if rng.gen::<f32>() < hesitancy {
        target.opposite()
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_classify_reliable() {
        let t = TrustThresholds::RELIABLE;
        assert_eq!(t.classify(0.0), TrustBranch::Trust);
        assert_eq!(t.classify(0.79), TrustBranch::Trust);
        assert_eq!(t.classify(0.8), TrustBranch::RandomDoubt);
        assert_eq!(t.classify(0.89), TrustBranch::RandomDoubt);
        assert_eq!(t.classify(0.9), TrustBranch::OppositeDoubt);
        assert_eq!(t.classify(0.999), TrustBranch::OppositeDoubt);
    }

    #[test]
    fn test_classify_unreliable() {
        let t = TrustThresholds::UNRELIABLE;
        assert_eq!(t.classify(0.29), TrustBranch::Trust);
        assert_eq!(t.classify(0.3), TrustBranch::RandomDoubt);
        assert_eq!(t.classify(0.64), TrustBranch::RandomDoubt);
        assert_eq!(t.classify(0.65), TrustBranch::OppositeDoubt);
    }

    #[test]
    fn test_minority_so_far_is_deterministic_without_tie() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(
                minority_so_far(&[Vote::No, Vote::No, Vote::Yes], Some(Vote::No), &mut rng),
                Vote::Yes
            );
            assert_eq!(minority_so_far(&[Vote::Yes], None, &mut rng), Vote::No);
        }
    }

    #[test]
    fn test_minority_so_far_tie_consumes_randomness() {
        // Empty history is a 0-0 tie
        let mut rng = SmallRng::seed_from_u64(7);
        let yes = (0..2000)
            .filter(|_| minority_so_far(&[], None, &mut rng) == Vote::Yes)
            .count();
        assert!((900..1100).contains(&yes), "yes count {}", yes);
    }

    #[test]
    fn test_minority_so_far_biased_tie() {
        // 0.6 bias pull + 0.4 * 0.5 coin landing on the bias
        let mut rng = SmallRng::seed_from_u64(13);
        let tied = [Vote::Yes, Vote::No];
        let yes = (0..20_000)
            .filter(|_| minority_so_far(&tied, Some(Vote::Yes), &mut rng) == Vote::Yes)
            .count() as f64
            / 20_000.0;
        assert!((yes - 0.8).abs() < 0.02, "yes share {}", yes);
    }

    #[test]
    fn test_overrides_certain_flip() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(apply_overrides(Vote::Yes, 1.0, 0.0, &mut rng), Vote::No);
            assert_eq!(apply_overrides(Vote::Yes, 0.0, 1.0, &mut rng), Vote::No);
            // Both certain: flipped once, not twice
            assert_eq!(apply_overrides(Vote::Yes, 1.0, 1.0, &mut rng), Vote::No);
            assert_eq!(apply_overrides(Vote::No, 0.0, 0.0, &mut rng), Vote::No);
        }
    }

    #[test]
    fn test_overconfidence_skips_hesitancy_draw() {
        // A firing overconfidence check consumes exactly one draw
        let mut a = SmallRng::seed_from_u64(11);
        let mut b = a.clone();

        apply_overrides(Vote::Yes, 1.0, 0.5, &mut a);
        let _: f32 = b.gen();

        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }

    #[test]
    fn test_unbiased_coin_skips_bias_draw() {
        let mut a = SmallRng::seed_from_u64(5);
        let mut b = a.clone();

        let vote = bias_weighted(None, &mut a);
        assert_eq!(vote, random_vote(&mut b));
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}
