//! Player preferences
//!
//! Persisted as one JSON blob, separately from the high score.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effects on/off
    pub sound_enabled: bool,
    /// Background melody on/off
    pub music_enabled: bool,
    /// Display name; input stays gated until one is set
    pub nickname: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_enabled: true,
            nickname: None,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "stump_runner_settings";

    /// Set the nickname from raw user input
    ///
    /// Surrounding whitespace is trimmed; blank input is rejected and leaves
    /// the current nickname untouched.
    pub fn set_nickname(&mut self, raw: &str) -> bool {
        let name = raw.trim();
        if name.is_empty() {
            return false;
        }
        self.nickname = Some(name.to_string());
        true
    }

    pub fn has_nickname(&self) -> bool {
        self.nickname.is_some()
    }

    /// Flip sound effects, returning the new value
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Flip background music, returning the new value
    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        self.music_enabled
    }

    /// Load settings, falling back to defaults
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        if let Some(json) = store.get_item(Self::STORAGE_KEY) {
            if let Ok(settings) = serde_json::from_str(&json) {
                log::info!("Loaded settings");
                return settings;
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        if let Ok(json) = serde_json::to_string(self) {
            store.set_item(Self::STORAGE_KEY, &json);
            log::info!("Settings saved");
        }
    }
}
