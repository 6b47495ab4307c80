//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keyboard, pointer, touch -> jump intent)
//! - Storage (LocalStorage on web)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod storage;

pub use input::{InputAction, InputMapper};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
