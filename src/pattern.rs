use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Scripted adversary behaviours for simulation and benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Pattern {
    /// Always the same move.
    Constant,
    /// Rock, Paper, Scissors, Rock, ...
    Cycle,
    /// Rock, Scissors, Paper, Rock, ...
    Reverse,
    /// Independent uniform draws; nothing to learn.
    Random,
}

/// A [`Pattern`] with its own state and random source.
#[derive(Debug, Clone)]
pub struct Adversary {
    pattern: Pattern,
    last: Option<Move>,
    rng: SmallRng,
}

impl Adversary {
    pub fn new(pattern: Pattern, seed: u64) -> Self {
        Self {
            pattern,
            last: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }
    pub fn play(&mut self) -> Move {
        let next = match (self.pattern, self.last) {
            (Pattern::Constant, _) => Move::Rock,
            (Pattern::Cycle, None) => Move::Rock,
            (Pattern::Cycle, Some(last)) => Move::ALL[(last.index() + 1) % N_MOVES],
            (Pattern::Reverse, None) => Move::Rock,
            (Pattern::Reverse, Some(last)) => last.victim(),
            (Pattern::Random, _) => Move::ALL[self.rng.random_range(0..N_MOVES)],
        };
        self.last = Some(next);
        next
    }
}

impl Iterator for Adversary {
    type Item = Move;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.play())
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Pattern::Constant => "constant",
                Pattern::Cycle => "cycle",
                Pattern::Reverse => "reverse",
                Pattern::Random => "random",
            }
        )
    }
}
