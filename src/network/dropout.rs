use crate::*;
use rand::Rng;

/// Inverted dropout: kept units are scaled by `1 / (1 - rate)` so that
/// inference needs no rescaling and simply skips this transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dropout {
    rate: Probability,
}

impl Dropout {
    pub fn new(rate: Probability) -> Self {
        assert!((0. ..1.).contains(&rate), "dropout rate in [0, 1)");
        Self { rate }
    }
    /// Samples a multiplicative mask of `0` or `1 / (1 - rate)` per unit.
    pub fn mask<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Weight> {
        let keep = 1. / (1. - self.rate);
        (0..n)
            .map(|_| match rng.random::<Probability>() < self.rate {
                true => 0.,
                false => keep,
            })
            .collect()
    }
    /// Applies a mask in place; used for both activations and gradients.
    pub fn apply(x: &mut [Weight], mask: &[Weight]) {
        x.iter_mut().zip(mask).for_each(|(x, m)| *x *= m);
    }
}

impl Default for Dropout {
    fn default() -> Self {
        Self::new(DROPOUT_RATE)
    }
}
