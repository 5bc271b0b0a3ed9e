use crate::*;

/// Lifecycle of the predictive model within a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Untrained,
    Trained,
}

/// What happened to the model when a move was recorded.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    /// History was too short to form an input window; no step was taken.
    Skipped,
    /// One gradient step was committed.
    Applied { loss: Probability },
    /// The step produced non-finite values and was thrown away.
    Diverged { loss: Probability },
}

impl Training {
    pub fn is_applied(&self) -> bool {
        matches!(self, Training::Applied { .. })
    }
    pub fn loss(&self) -> Option<Probability> {
        match self {
            Training::Skipped => None,
            Training::Applied { loss } | Training::Diverged { loss } => Some(*loss),
        }
    }
}

/// The network plus its trained flag. Only the first committed training
/// step moves it out of [`Phase::Untrained`]; nothing moves it back.
#[derive(Debug, Clone)]
pub struct Model {
    network: Network,
    phase: Phase,
}

impl Model {
    pub fn new(seed: u64) -> Self {
        let network = Network::new(seed);
        log::debug!("initialized network with {} parameters", network.parameters());
        Self {
            network,
            phase: Phase::Untrained,
        }
    }
    pub fn is_trained(&self) -> bool {
        self.phase == Phase::Trained
    }
    /// Committed training steps so far.
    pub fn steps(&self) -> usize {
        self.network.steps()
    }
    pub fn predict(&self, features: &Features) -> Distribution {
        Distribution::from(self.network.predict(features))
    }
    pub fn train_step(&mut self, features: &Features, target: Move) -> Training {
        let training = self.network.train(features, &indicator(target));
        match training {
            Training::Applied { loss } => {
                if self.phase == Phase::Untrained {
                    log::info!("model trained on first window (loss {:.4})", loss);
                }
                self.phase = Phase::Trained;
                log::debug!("step {} target {} loss {:.4}", self.steps(), target, loss);
            }
            Training::Diverged { loss } => {
                log::warn!("discarding non-finite update (loss {})", loss);
            }
            Training::Skipped => {}
        }
        training
    }

    #[cfg(test)]
    pub(crate) fn poison(&mut self) {
        self.network.poison();
    }
}
