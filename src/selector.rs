use crate::*;

/// Estimated probability of the adversary playing each class next,
/// indexed by [`Move::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution([Probability; N_MOVES]);

impl Distribution {
    /// The no-information prior.
    pub const fn uniform() -> Self {
        Self([1. / N_MOVES as Probability; N_MOVES])
    }
    pub fn values(&self) -> [Probability; N_MOVES] {
        self.0
    }
    pub fn get(&self, m: Move) -> Probability {
        self.0[m.index()]
    }
    /// Most likely class. Scans in index order keeping the first strictly
    /// greater value, so ties go to the lowest index.
    pub fn argmax(&self) -> Move {
        Move::ALL[argmax_index(&self.0)]
    }
    /// The move that beats the most likely class.
    pub fn counter(&self) -> Move {
        self.argmax().counter()
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self::uniform()
    }
}

impl From<[Probability; N_MOVES]> for Distribution {
    fn from(values: [Probability; N_MOVES]) -> Self {
        Self(values)
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let parts = Move::ALL
            .iter()
            .map(|m| format!("{} {:>5.1}%", m, 100. * self.get(*m)))
            .collect::<Vec<_>>()
            .join("  ");
        write!(f, "{}", parts)
    }
}

/// Index of the first strictly-maximal entry.
pub fn argmax_index(values: &[Probability; N_MOVES]) -> usize {
    let mut best = 0;
    let mut max = Probability::NEG_INFINITY;
    for (i, v) in values.iter().enumerate() {
        if *v > max {
            max = *v;
            best = i;
        }
    }
    best
}

/// The move that defeats class `index` under the beats-table.
pub fn counter_for(index: usize) -> anyhow::Result<Move> {
    Move::try_from(index).map(|m| m.counter())
}

pub fn select_counter(distribution: &Distribution) -> Move {
    distribution.counter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_picks_largest() {
        assert_eq!(argmax_index(&[0.1, 0.7, 0.2]), 1);
        assert_eq!(argmax_index(&[0.1, 0.2, 0.7]), 2);
        assert_eq!(argmax_index(&[0.5, 0.2, 0.3]), 0);
    }
    /// Exact ties resolve to the lowest index.
    #[test]
    fn argmax_ties_favor_lowest_index() {
        assert_eq!(argmax_index(&[0.4, 0.4, 0.2]), 0);
        assert_eq!(argmax_index(&[0.2, 0.4, 0.4]), 1);
        assert_eq!(Distribution::uniform().argmax(), Move::Rock);
        assert_eq!(Distribution::uniform().counter(), Move::Paper);
    }
    #[test]
    fn counter_for_every_class() {
        for m in Move::ALL {
            let counter = counter_for(m.index()).unwrap();
            assert!(counter.beats(&m));
            assert_ne!(counter, m);
        }
        assert!(counter_for(N_MOVES).is_err());
    }
    #[test]
    fn select_counter_composes() {
        let distribution = Distribution::from([0.1, 0.1, 0.8]);
        assert_eq!(distribution.argmax(), Move::Scissors);
        assert_eq!(select_counter(&distribution), Move::Rock);
    }
    #[test]
    fn uniform_is_a_third() {
        let uniform = Distribution::uniform();
        assert!(uniform.values().iter().all(|p| *p == 1. / 3.));
        assert_eq!(uniform, Distribution::default());
    }
}
