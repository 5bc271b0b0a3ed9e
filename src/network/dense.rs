use crate::*;
use rand::Rng;

/// Fully connected layer `y = W·x + b`.
///
/// Weights are stored row-major as `[outputs, inputs]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense {
    pub(super) inputs: usize,
    pub(super) outputs: usize,
    pub(super) weights: Vec<Weight>,
    pub(super) biases: Vec<Weight>,
}

/// Parameter gradients for one [`Dense`] layer, same layout as the layer.
#[derive(Debug, Clone)]
pub struct Gradient {
    pub(super) weights: Vec<Weight>,
    pub(super) biases: Vec<Weight>,
}

impl Dense {
    /// Glorot-uniform weights in `±sqrt(6 / (fan_in + fan_out))`, zero biases.
    pub fn glorot<R: Rng>(inputs: usize, outputs: usize, rng: &mut R) -> Self {
        let limit = (6. / (inputs + outputs) as Weight).sqrt();
        Self {
            inputs,
            outputs,
            weights: (0..inputs * outputs)
                .map(|_| rng.random_range(-limit..limit))
                .collect(),
            biases: vec![0.; outputs],
        }
    }
    pub fn forward(&self, x: &[Weight]) -> Vec<Weight> {
        assert_eq!(x.len(), self.inputs, "dense input width");
        self.weights
            .chunks_exact(self.inputs)
            .zip(&self.biases)
            .map(|(row, b)| b + row.iter().zip(x).map(|(w, x)| w * x).sum::<Weight>())
            .collect()
    }
    /// Given the layer input and the loss gradient w.r.t. the layer output,
    /// returns the parameter gradient and the gradient w.r.t. the input.
    pub fn backward(&self, x: &[Weight], delta: &[Weight]) -> (Gradient, Vec<Weight>) {
        assert_eq!(delta.len(), self.outputs, "dense delta width");
        let weights = delta
            .iter()
            .flat_map(|d| x.iter().map(move |x| d * x))
            .collect();
        let mut upstream = vec![0.; self.inputs];
        for (row, d) in self.weights.chunks_exact(self.inputs).zip(delta) {
            for (u, w) in upstream.iter_mut().zip(row) {
                *u += w * d;
            }
        }
        let gradient = Gradient {
            weights,
            biases: delta.to_vec(),
        };
        (gradient, upstream)
    }
    pub fn is_finite(&self) -> bool {
        self.weights.iter().chain(&self.biases).all(|w| w.is_finite())
    }
    pub fn parameters(&self) -> usize {
        self.weights.len() + self.biases.len()
    }
}

impl Gradient {
    pub fn is_finite(&self) -> bool {
        self.weights.iter().chain(&self.biases).all(|w| w.is_finite())
    }
}
