//! Online-learning Rock-Paper-Scissors opponent.
//!
//! The crate predicts an adversary's next move from a rolling window of its
//! previous moves and plays the move that beats the prediction. The model
//! learns online: every revealed move becomes one gradient step.
//!
//! # Module Structure
//!
//! - `moves` — The three move classes, the beats-table, round outcomes
//! - `encoder` — Indicator vectors and flattened window features
//! - `history` — Append-only log of the adversary's moves
//! - `network` — Feed-forward classifier (dense layers, dropout, Adam)
//! - `model` — Trained/untrained state machine around the network
//! - `selector` — Confidence distributions, argmax, counter selection
//! - `predictor` — The prediction service composing all of the above
//! - `pattern` — Scripted adversaries for simulation and testing
//! - `cli` — Interactive terminal front-end
#![allow(dead_code)]

mod encoder;
mod history;
mod model;
mod moves;
mod network;
mod pattern;
mod predictor;
mod selector;

#[cfg(feature = "cli")]
mod cli;

pub use encoder::*;
pub use history::*;
pub use model::*;
pub use moves::*;
pub use network::*;
pub use pattern::*;
pub use predictor::*;
pub use selector::*;

#[cfg(feature = "cli")]
pub use cli::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Confidence values, softmax outputs, dropout rates.
pub type Probability = f32;
/// Network parameters, activations, and gradients.
pub type Weight = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// PROBLEM SHAPE
// ============================================================================
/// Number of move classes (Rock, Paper, Scissors).
pub const N_MOVES: usize = 3;
/// Most-recent history entries fed to the model.
pub const WINDOW_SIZE: usize = 5;
/// Length of a flattened window of indicator vectors.
pub const FEATURE_DIM: usize = WINDOW_SIZE * N_MOVES;

// ============================================================================
// NETWORK ARCHITECTURE
// 15 → dense(32, relu) → dropout(0.2) → dense(16, relu) → dense(3, softmax)
// ============================================================================
/// Width of the first hidden layer.
pub const HIDDEN_1: usize = 32;
/// Width of the second hidden layer.
pub const HIDDEN_2: usize = 16;
/// Fraction of first-layer activations zeroed during training.
pub const DROPOUT_RATE: Probability = 0.2;

// ============================================================================
// ADAM OPTIMIZER
// ============================================================================
/// Step size.
pub const LEARNING_RATE: Weight = 0.01;
/// Exponential decay for the first moment estimate.
pub const ADAM_BETA1: Weight = 0.9;
/// Exponential decay for the second moment estimate.
pub const ADAM_BETA2: Weight = 0.999;
/// Denominator smoothing term.
pub const ADAM_EPSILON: Weight = 1e-7;
/// Probability floor inside the cross-entropy logarithm.
pub const LOSS_EPSILON: Probability = 1e-7;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
