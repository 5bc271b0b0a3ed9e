//! The prediction service the game loop talks to.
//!
//! Each round the caller asks [`Predictor::predict_counter_move`] for the
//! agent's move, resolves the round, and then reports the adversary's actual
//! move through [`Predictor::record_move_and_train`]. Recording trains on the
//! window that *preceded* the move, then appends the move to history, so the
//! label is always the move that followed the input window.
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Where a prediction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Forward pass through the trained model.
    Model,
    /// Uniform random draw; history too short or model untrained.
    Fallback,
}

/// One round's decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Adversary move the agent expects.
    pub predicted: Move,
    /// Agent move that beats `predicted`.
    pub counter: Move,
    pub confidence: Distribution,
    pub source: Source,
}

/// Session-scoped predictor owning the adversary history and the model.
///
/// Two independent random sources are injectable: one for fallback draws and
/// one that seeds every model (initial weights and dropout masks), including
/// models rebuilt by [`Predictor::reset`].
#[derive(Debug, Clone)]
pub struct Predictor {
    history: History,
    model: Model,
    moves: SmallRng,
    weights: SmallRng,
}

impl Predictor {
    pub fn new(seed: u64) -> Self {
        Self::with_seeds(seed, seed.rotate_left(32) ^ 0x9E37_79B9_7F4A_7C15)
    }
    pub fn with_seeds(moves: u64, weights: u64) -> Self {
        let mut weights = SmallRng::seed_from_u64(weights);
        Self {
            history: History::default(),
            model: Model::new(weights.random()),
            moves: SmallRng::seed_from_u64(moves),
            weights,
        }
    }

    /// The model is consulted only once the window is full and at least one
    /// training step has been committed. Re-evaluated on every call.
    fn ready(&self) -> Option<Features> {
        match self.model.is_trained() {
            true => self.history.features(),
            false => None,
        }
    }

    /// Distribution over the adversary's next move; uniform while the model
    /// is not ready.
    pub fn confidence(&self) -> Distribution {
        self.ready()
            .map(|ref features| self.model.predict(features))
            .unwrap_or_default()
    }

    /// Full decision for the coming round.
    pub fn predict(&mut self) -> Prediction {
        match self.ready() {
            Some(ref features) => {
                let confidence = self.model.predict(features);
                Prediction {
                    predicted: confidence.argmax(),
                    counter: confidence.counter(),
                    confidence,
                    source: Source::Model,
                }
            }
            None => {
                let predicted = Move::ALL[self.moves.random_range(0..N_MOVES)];
                Prediction {
                    predicted,
                    counter: predicted.counter(),
                    confidence: Distribution::uniform(),
                    source: Source::Fallback,
                }
            }
        }
    }

    /// The move the agent should play this round.
    pub fn predict_counter_move(&mut self) -> Move {
        self.predict().counter
    }

    /// Learns from the adversary's revealed move, then appends it.
    ///
    /// Training fires only when history already held a full window before
    /// this move; the input is that window and the target is `actual`.
    pub fn record_move_and_train(&mut self, actual: Move) -> Training {
        let training = match self.history.features() {
            Some(ref features) => self.model.train_step(features, actual),
            None => Training::Skipped,
        };
        self.history.push(actual);
        training
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn is_trained(&self) -> bool {
        self.model.is_trained()
    }
    /// Committed training steps this session.
    pub fn training_steps(&self) -> usize {
        self.model.steps()
    }

    /// Forgets everything: fresh weights from the weight source, empty
    /// history, untrained model.
    pub fn reset(&mut self) {
        log::info!(
            "resetting predictor after {} rounds and {} training steps",
            self.history_len(),
            self.training_steps()
        );
        self.model = Model::new(self.weights.random());
        self.history.clear();
    }
}

impl Default for Predictor {
    /// Seeds both random sources from the thread RNG.
    fn default() -> Self {
        let ref mut rng = rand::rng();
        Self::with_seeds(rng.random(), rng.random())
    }
}
