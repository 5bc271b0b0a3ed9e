use crate::*;

/// One of the three symmetric choices.
///
/// The discriminant is the class index used by the encoder and the network
/// output. The beats-relation is cyclic: class `i` is beaten by `(i + 1) % 3`
/// and beats `(i + 2) % 3`.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    /// All classes in index order.
    pub const ALL: [Self; N_MOVES] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Class index in `0..3`.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// The move that beats this one.
    pub const fn counter(&self) -> Self {
        Self::ALL[(self.index() + 1) % N_MOVES]
    }
    /// The move this one beats.
    pub const fn victim(&self) -> Self {
        Self::ALL[(self.index() + 2) % N_MOVES]
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.victim() == *other
    }
    /// Round result from `self`'s point of view.
    pub fn versus(&self, other: &Self) -> Outcome {
        if self == other {
            Outcome::Tie
        } else if self.beats(other) {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

impl TryFrom<usize> for Move {
    type Error = anyhow::Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(n)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("invalid move index {}", n))
    }
}

/// Accepts `r`/`p`/`s`, full names in any case, and the keyboard
/// shortcuts `1`/`2`/`3`.
impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" | "1" => Ok(Move::Rock),
            "p" | "paper" | "2" => Ok(Move::Paper),
            "s" | "scissors" | "3" => Ok(Move::Scissors),
            other => Err(anyhow::anyhow!("unrecognized move {:?}", other)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Move::Rock => "Rock",
                Move::Paper => "Paper",
                Move::Scissors => "Scissors",
            }
        )
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::ALL.choose(rng).copied().expect("ALL is empty")
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Outcome::Win => "WIN",
                Outcome::Loss => "LOSS",
                Outcome::Tie => "TIE",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The beats-table matches the classic rules.
    #[test]
    fn beats_table() {
        assert_eq!(Move::Rock.counter(), Move::Paper);
        assert_eq!(Move::Paper.counter(), Move::Scissors);
        assert_eq!(Move::Scissors.counter(), Move::Rock);
        assert!(Move::Rock.beats(&Move::Scissors));
        assert!(Move::Paper.beats(&Move::Rock));
        assert!(Move::Scissors.beats(&Move::Paper));
    }
    /// Every counter beats its target and is never the target itself.
    #[test]
    fn counter_beats_and_differs() {
        for m in Move::ALL {
            assert!(m.counter().beats(&m));
            assert_ne!(m.counter(), m);
            assert!(!m.beats(&m.counter()));
            assert_eq!(m.victim().counter(), m);
        }
    }
    #[test]
    fn versus_is_antisymmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                let mirrored = match b.versus(&a) {
                    Outcome::Win => Outcome::Loss,
                    Outcome::Loss => Outcome::Win,
                    Outcome::Tie => Outcome::Tie,
                };
                assert_eq!(a.versus(&b), mirrored);
            }
            assert_eq!(a.versus(&a), Outcome::Tie);
            assert_eq!(a.counter().versus(&a), Outcome::Win);
        }
    }
    /// Indices outside `0..3` are rejected, never coerced.
    #[test]
    fn invalid_index_fails() {
        assert!(Move::try_from(3usize).is_err());
        assert!(Move::try_from(usize::MAX).is_err());
        for m in Move::ALL {
            assert_eq!(Move::try_from(m.index()).unwrap(), m);
        }
    }
    #[test]
    fn random_is_a_valid_class() {
        for _ in 0..32 {
            assert!(Move::ALL.contains(&Move::random()));
        }
    }
    #[test]
    fn parse_text() {
        assert_eq!(Move::try_from("r").unwrap(), Move::Rock);
        assert_eq!(Move::try_from(" Paper ").unwrap(), Move::Paper);
        assert_eq!(Move::try_from("3").unwrap(), Move::Scissors);
        assert!(Move::try_from("lizard").is_err());
        assert!(Move::try_from("").is_err());
    }
}
