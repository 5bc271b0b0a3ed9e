use crate::*;

/// One-hot vector marking a single move class.
pub type Indicator = [Weight; N_MOVES];

/// Flattened concatenation of `WINDOW_SIZE` indicator vectors.
///
/// Oldest move first, so entries `3k..3k+3` encode the `k`-th move of the
/// window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features([Weight; FEATURE_DIM]);

impl Features {
    pub fn as_slice(&self) -> &[Weight] {
        &self.0
    }
}

/// Encodes a window of exactly `WINDOW_SIZE` moves. Any other length is a
/// programming error upstream of the encoder.
impl From<&[Move]> for Features {
    fn from(window: &[Move]) -> Self {
        assert_eq!(
            window.len(),
            WINDOW_SIZE,
            "feature window must hold exactly {} moves",
            WINDOW_SIZE
        );
        let mut features = [0.; FEATURE_DIM];
        for (chunk, m) in features.chunks_exact_mut(N_MOVES).zip(window) {
            chunk.copy_from_slice(&indicator(*m));
        }
        Self(features)
    }
}

impl From<[Move; WINDOW_SIZE]> for Features {
    fn from(window: [Move; WINDOW_SIZE]) -> Self {
        Self::from(&window[..])
    }
}

/// Flattens a full window of moves, oldest first.
pub fn encode_window(moves: &[Move]) -> Features {
    Features::from(moves)
}

pub fn indicator(m: Move) -> Indicator {
    let mut encoded = [0.; N_MOVES];
    encoded[m.index()] = 1.;
    encoded
}
