use crate::*;

/// Append-only log of the adversary's moves for the current session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History(Vec<Move>);

impl History {
    pub fn push(&mut self, m: Move) {
        self.0.push(m);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// The last `WINDOW_SIZE` moves, oldest first. `None` until the window
    /// can be filled entirely from observed rounds.
    pub fn window(&self) -> Option<&[Move]> {
        self.0
            .len()
            .checked_sub(WINDOW_SIZE)
            .map(|start| &self.0[start..])
    }
    /// Encoded window, if available.
    pub fn features(&self) -> Option<Features> {
        self.window().map(encode_window)
    }
    /// Observed frequency of each class over the whole session.
    pub fn frequencies(&self) -> [usize; N_MOVES] {
        self.0.iter().fold([0; N_MOVES], |mut counts, m| {
            counts[m.index()] += 1;
            counts
        })
    }
    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<Vec<Move>> for History {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let recent = self
            .window()
            .unwrap_or(&self.0)
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}] ({} rounds)", recent, self.len())
    }
}
