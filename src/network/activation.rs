use crate::*;

/// Clamps negatives to zero. NaN passes through unchanged so that a
/// corrupted activation surfaces in the loss.
pub fn relu(x: &mut [Weight]) {
    x.iter_mut().filter(|v| **v < 0.).for_each(|v| *v = 0.);
}

/// Zeroes gradient entries whose pre-activation was not positive.
pub fn relu_backward(pre: &[Weight], delta: &mut [Weight]) {
    delta
        .iter_mut()
        .zip(pre)
        .filter(|(_, z)| **z <= 0.)
        .for_each(|(d, _)| *d = 0.);
}

/// Numerically stable softmax.
pub fn softmax(logits: &[Weight]) -> [Probability; N_MOVES] {
    assert_eq!(logits.len(), N_MOVES);
    let max = logits.iter().copied().fold(Weight::NEG_INFINITY, Weight::max);
    let mut exps = [0.; N_MOVES];
    for (e, z) in exps.iter_mut().zip(logits) {
        *e = (z - max).exp();
    }
    let sum = exps.iter().sum::<Probability>();
    exps.map(|e| e / sum)
}

/// Categorical cross-entropy against a one-hot target.
pub fn cross_entropy(p: &[Probability; N_MOVES], target: &Indicator) -> Probability {
    -p.iter()
        .zip(target)
        .map(|(p, t)| t * p.clamp(LOSS_EPSILON, 1. - LOSS_EPSILON).ln())
        .sum::<Probability>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_sums_to_one() {
        let p = softmax(&[2., -1., 0.5]);
        assert!((p.iter().sum::<Probability>() - 1.).abs() < 1e-6);
        assert!(p[0] > p[2] && p[2] > p[1]);
    }
    /// Large logits do not overflow.
    #[test]
    fn softmax_is_stable() {
        let p = softmax(&[1000., 1000., -1000.]);
        assert!(p.iter().all(|x| x.is_finite()));
        assert!((p[0] - 0.5).abs() < 1e-6);
    }
    #[test]
    fn relu_gates_gradient() {
        let pre = [-1., 0., 2.];
        let mut x = pre;
        relu(&mut x);
        assert_eq!(x, [0., 0., 2.]);
        let mut delta = [1., 1., 1.];
        relu_backward(&pre, &mut delta);
        assert_eq!(delta, [0., 0., 1.]);
    }
    /// Non-finite activations are not masked by the rectifier.
    #[test]
    fn relu_propagates_nan() {
        let mut x = [Weight::NAN, -1., Weight::INFINITY];
        relu(&mut x);
        assert!(x[0].is_nan());
        assert_eq!(x[1], 0.);
        assert_eq!(x[2], Weight::INFINITY);
        let p = softmax(&[Weight::NAN, 0., 0.]);
        assert!(!cross_entropy(&p, &indicator(Move::Rock)).is_finite());
    }
    #[test]
    fn cross_entropy_of_uniform() {
        let loss = cross_entropy(&[1. / 3.; N_MOVES], &indicator(Move::Paper));
        assert!((loss - (3. as Probability).ln()).abs() < 1e-5);
    }
}
