//! Best-score record
//!
//! A single scalar, read once at startup and written the moment a run
//! beats it.

use crate::persistence::Persistence;

/// Best score seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    /// Read the stored value (0 if missing)
    pub fn load<P: Persistence + ?Sized>(store: &P) -> Self {
        let best = store.load_high_score();
        log::info!("Loaded high score {}", best);
        Self { best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Check if a score would replace the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished run's score, persisting it if it is a new best
    ///
    /// Returns whether the stored value changed.
    pub fn submit<P: Persistence + ?Sized>(&mut self, score: u64, store: &mut P) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        store.save_high_score(score);
        true
    }
}
