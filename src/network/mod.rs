//! Feed-forward classifier over encoded move windows.
//!
//! `FEATURE_DIM → dense(HIDDEN_1, relu) → dropout → dense(HIDDEN_2, relu) →
//! dense(N_MOVES, softmax)`, trained one sample at a time with Adam on
//! categorical cross-entropy.
mod activation;
mod adam;
mod dense;
mod dropout;

pub use activation::*;
pub use adam::*;
pub use dense::*;
pub use dropout::*;

use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Debug, Clone)]
pub struct Network {
    layers: [Dense; 3],
    dropout: Dropout,
    adam: Adam,
    rng: SmallRng,
}

/// Intermediate values of a training-mode forward pass.
struct Trace {
    z1: Vec<Weight>,
    mask: Vec<Weight>,
    h1: Vec<Weight>,
    z2: Vec<Weight>,
    a2: Vec<Weight>,
    p: [Probability; N_MOVES],
}

impl Network {
    /// Fresh Glorot-initialized weights. The same seed also drives the
    /// dropout masks sampled during training.
    pub fn new(seed: u64) -> Self {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let layers = [
            Dense::glorot(FEATURE_DIM, HIDDEN_1, rng),
            Dense::glorot(HIDDEN_1, HIDDEN_2, rng),
            Dense::glorot(HIDDEN_2, N_MOVES, rng),
        ];
        Self {
            adam: Adam::new(&layers),
            dropout: Dropout::default(),
            rng: rng.clone(),
            layers,
        }
    }

    /// Inference pass, dropout disabled.
    pub fn predict(&self, features: &Features) -> [Probability; N_MOVES] {
        let mut h = self.layers[0].forward(features.as_slice());
        relu(&mut h);
        let mut h = self.layers[1].forward(&h);
        relu(&mut h);
        softmax(&self.layers[2].forward(&h))
    }

    /// One Adam step on a single `(features, target)` pair.
    ///
    /// The update is committed only if the loss and every resulting
    /// parameter are finite; otherwise weights and optimizer state are left
    /// exactly as they were.
    pub fn train(&mut self, features: &Features, target: &Indicator) -> Training {
        let x = features.as_slice();
        let trace = self.forward(x);
        let loss = cross_entropy(&trace.p, target);
        if !loss.is_finite() {
            return Training::Diverged { loss };
        }
        let gradients = self.backward(x, target, &trace);
        if !gradients.iter().all(Gradient::is_finite) {
            return Training::Diverged { loss };
        }
        let layers = self.layers.clone();
        let adam = self.adam.clone();
        self.adam.step(&mut self.layers, &gradients);
        if self.layers.iter().all(Dense::is_finite) {
            Training::Applied { loss }
        } else {
            self.layers = layers;
            self.adam = adam;
            Training::Diverged { loss }
        }
    }

    /// Number of committed optimizer steps.
    pub fn steps(&self) -> usize {
        self.adam.steps() as usize
    }

    pub fn parameters(&self) -> usize {
        self.layers.iter().map(Dense::parameters).sum()
    }

    fn forward(&mut self, x: &[Weight]) -> Trace {
        let z1 = self.layers[0].forward(x);
        let mut h1 = z1.clone();
        relu(&mut h1);
        let mask = self.dropout.mask(h1.len(), &mut self.rng);
        Dropout::apply(&mut h1, &mask);
        let z2 = self.layers[1].forward(&h1);
        let mut a2 = z2.clone();
        relu(&mut a2);
        let p = softmax(&self.layers[2].forward(&a2));
        Trace {
            z1,
            mask,
            h1,
            z2,
            a2,
            p,
        }
    }

    fn backward(&self, x: &[Weight], target: &Indicator, trace: &Trace) -> [Gradient; 3] {
        // softmax + cross-entropy collapses to p - y at the logits
        let delta = trace
            .p
            .iter()
            .zip(target)
            .map(|(p, y)| p - y)
            .collect::<Vec<_>>();
        let (g3, mut delta) = self.layers[2].backward(&trace.a2, &delta);
        relu_backward(&trace.z2, &mut delta);
        let (g2, mut delta) = self.layers[1].backward(&trace.h1, &delta);
        Dropout::apply(&mut delta, &trace.mask);
        relu_backward(&trace.z1, &mut delta);
        let (g1, _) = self.layers[0].backward(x, &delta);
        [g1, g2, g3]
    }

    #[cfg(test)]
    pub(crate) fn poison(&mut self) {
        self.layers[0].weights[0] = Weight::NAN;
    }
}
