use super::dense::Dense;
use super::dense::Gradient;
use crate::*;

/// First and second moment estimates for one parameter buffer.
#[derive(Debug, Clone, PartialEq)]
struct Moments {
    m: Vec<Weight>,
    v: Vec<Weight>,
}

impl Moments {
    fn zeros(n: usize) -> Self {
        Self {
            m: vec![0.; n],
            v: vec![0.; n],
        }
    }
    fn update(&mut self, params: &mut [Weight], grads: &[Weight], t: i32) {
        let b1t = 1. - ADAM_BETA1.powi(t);
        let b2t = 1. - ADAM_BETA2.powi(t);
        for (((p, g), m), v) in params
            .iter_mut()
            .zip(grads)
            .zip(self.m.iter_mut())
            .zip(self.v.iter_mut())
        {
            *m = ADAM_BETA1 * *m + (1. - ADAM_BETA1) * g;
            *v = ADAM_BETA2 * *v + (1. - ADAM_BETA2) * g * g;
            let m_hat = *m / b1t;
            let v_hat = *v / b2t;
            *p -= LEARNING_RATE * m_hat / (v_hat.sqrt() + ADAM_EPSILON);
        }
    }
}

/// Adam optimizer state for a stack of dense layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Adam {
    t: i32,
    slots: Vec<(Moments, Moments)>,
}

impl Adam {
    pub fn new(layers: &[Dense]) -> Self {
        Self {
            t: 0,
            slots: layers
                .iter()
                .map(|l| (Moments::zeros(l.weights.len()), Moments::zeros(l.biases.len())))
                .collect(),
        }
    }
    /// Number of updates applied so far.
    pub fn steps(&self) -> i32 {
        self.t
    }
    /// One bias-corrected update across all layers.
    pub fn step(&mut self, layers: &mut [Dense], gradients: &[Gradient]) {
        assert_eq!(layers.len(), self.slots.len());
        assert_eq!(layers.len(), gradients.len());
        self.t += 1;
        for ((layer, gradient), (mw, mb)) in layers
            .iter_mut()
            .zip(gradients)
            .zip(self.slots.iter_mut())
        {
            mw.update(&mut layer.weights, &gradient.weights, self.t);
            mb.update(&mut layer.biases, &gradient.biases, self.t);
        }
    }
}
