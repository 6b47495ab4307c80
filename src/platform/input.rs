//! Raw input to game intents
//!
//! Every device funnels into the same discrete jump intent. Delivery is
//! edge-triggered: a held key produces one intent until it is released.

use std::collections::HashSet;

/// Intents understood by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Start, restart or jump depending on phase
    Jump,
    /// Restart button after game over
    Restart,
    /// Toggle demo-mode autopilot
    ToggleAutopilot,
}

/// Key codes (`KeyboardEvent.code`) that mean jump
pub const JUMP_KEYS: [&str; 2] = ["Space", "ArrowUp"];

/// Tracks held keys so auto-repeat never re-triggers an intent
#[derive(Debug, Default)]
pub struct InputMapper {
    held: HashSet<String>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a key press; `None` for unbound keys and repeats of a held key
    pub fn key_down(&mut self, code: &str, repeat: bool) -> Option<InputAction> {
        let action = action_for_key(code)?;
        if repeat || !self.held.insert(code.to_string()) {
            return None;
        }
        Some(action)
    }

    pub fn key_up(&mut self, code: &str) {
        self.held.remove(code);
    }

    /// Pointer press or touch start
    pub fn pointer_down(&mut self) -> InputAction {
        InputAction::Jump
    }

    /// Forget held keys (window lost focus, key-up events will never arrive)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Binding table for keyboard codes
pub fn action_for_key(code: &str) -> Option<InputAction> {
    match code {
        c if JUMP_KEYS.contains(&c) => Some(InputAction::Jump),
        "KeyI" => Some(InputAction::ToggleAutopilot),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_keys() {
        assert_eq!(action_for_key("Space"), Some(InputAction::Jump));
        assert_eq!(action_for_key("ArrowUp"), Some(InputAction::Jump));
        assert_eq!(action_for_key("KeyI"), Some(InputAction::ToggleAutopilot));
        assert_eq!(action_for_key("KeyW"), None);
    }

    #[test]
    fn test_held_key_fires_once() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.key_down("Space", false), Some(InputAction::Jump));
        // Browser auto-repeat
        assert_eq!(mapper.key_down("Space", true), None);
        // Missing repeat flag, still held
        assert_eq!(mapper.key_down("Space", false), None);

        mapper.key_up("Space");
        assert_eq!(mapper.key_down("Space", false), Some(InputAction::Jump));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.key_down("Space", false), Some(InputAction::Jump));
        assert_eq!(mapper.key_down("ArrowUp", false), Some(InputAction::Jump));
    }

    #[test]
    fn test_clear_releases_held_keys() {
        let mut mapper = InputMapper::new();
        mapper.key_down("ArrowUp", false);
        mapper.clear();
        assert_eq!(mapper.key_down("ArrowUp", false), Some(InputAction::Jump));
    }

    #[test]
    fn test_pointer_always_jumps() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.pointer_down(), InputAction::Jump);
        assert_eq!(mapper.pointer_down(), InputAction::Jump);
    }

    #[test]
    fn test_unbound_key_not_tracked() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.key_down("KeyQ", false), None);
        assert!(mapper.held.is_empty());
    }
}
