//! Defines a collection of standard heuristics for ordering the unresolved
//! pairs the search will guess on after propagation stalls.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::solver::knowledge::Pair;

/// A trait for guess-ordering heuristics.
///
/// When propagation stalls, the engine collects every pair whose truth is
/// still unknown and asks the heuristic for the order to try them in. The
/// choice never affects whether a solution is found, only how quickly.
pub trait GuessOrdering {
    /// Reorders the candidate pairs; `candidates` arrive in universe
    /// enumeration order.
    fn order(&self, candidates: Vec<Pair>) -> Vec<Pair>;
}

/// Tries pairs in universe enumeration order.
///
/// This provides a basic, deterministic way to pick guesses.
pub struct FirstUnknownGuess;

impl GuessOrdering for FirstUnknownGuess {
    fn order(&self, candidates: Vec<Pair>) -> Vec<Pair> {
        candidates
    }
}

/// Shuffles the candidates, which can help escape pathological orderings.
pub struct RandomGuess;

impl GuessOrdering for RandomGuess {
    fn order(&self, mut candidates: Vec<Pair>) -> Vec<Pair> {
        candidates.shuffle(&mut rand::thread_rng());
        candidates
    }
}

/// Shuffles the candidates with a fixed seed, so runs are reproducible.
pub struct SeededGuess {
    seed: u64,
}

impl SeededGuess {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GuessOrdering for SeededGuess {
    fn order(&self, mut candidates: Vec<Pair>) -> Vec<Pair> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        candidates.shuffle(&mut rng);
        candidates
    }
}
