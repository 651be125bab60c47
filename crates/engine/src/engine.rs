//! Game engine - a generator bundled with the round logic
//!
//! Callers that don't want to thread a generator through every call can
//! hold a `GameEngine` instead. It owns its generator and counts the rounds
//! it has played.

use crate::game::play_one_trial;
use monty_core::{GameResult, TrialResult};
use monty_rng::{SeedSource, SimRng, rng_from_source, seeded_rng};
use rand::Rng;

/// Plays rounds from an owned generator
pub struct GameEngine<R = SimRng> {
    rng: R,
    games_played: u64,
}

impl GameEngine<SimRng> {
    /// Engine whose rounds are fully determined by `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(seeded_rng(seed))
    }

    /// Engine seeded from a seed source
    pub fn from_source(source: &dyn SeedSource) -> Self {
        Self::new(rng_from_source(source))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine around an existing generator
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            games_played: 0,
        }
    }

    /// Play one round
    pub fn play(&mut self) -> GameResult<TrialResult> {
        let trial = play_one_trial(&mut self.rng)?;
        self.games_played += 1;
        Ok(trial)
    }

    /// Number of rounds played so far
    pub fn games_played(&self) -> u64 {
        self.games_played
    }

    /// Borrow the generator, e.g. to drive the individual steps by hand
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Give the generator back
    pub fn into_rng(self) -> R {
        self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monty_rng::FixedSeed;

    #[test]
    fn test_engine_counts_games() {
        let mut engine = GameEngine::seeded(42);
        for _ in 0..10 {
            engine.play().unwrap();
        }
        assert_eq!(engine.games_played(), 10);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = GameEngine::seeded(42);
        let mut b = GameEngine::from_source(&FixedSeed::new(42));
        for _ in 0..50 {
            assert_eq!(a.play().unwrap(), b.play().unwrap());
        }
    }
}
