//! Save/load of the few values that outlive a run
//!
//! Features:
//! - `KeyValueStore`: string storage (LocalStorage on web, JSON file on native)
//! - `Persistence`: the high score scalar on top of any key-value store
//! - Missing or corrupt values read back as defaults, write failures are logged
//!   and otherwise ignored

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key for the best score
pub const HIGH_SCORE_KEY: &str = "stump_runner_high_score";

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
}

/// High score storage used by the session
pub trait Persistence {
    /// Stored high score, 0 when absent or unreadable
    fn load_high_score(&self) -> u64;
    fn save_high_score(&mut self, score: u64);
}

impl<S: KeyValueStore> Persistence for S {
    fn load_high_score(&self) -> u64 {
        self.get_item(HIGH_SCORE_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save_high_score(&mut self, score: u64) {
        self.set_item(HIGH_SCORE_KEY, &score.to_string());
        log::info!("High score saved ({})", score);
    }
}
