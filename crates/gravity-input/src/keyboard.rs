//! Held-key tracker keyed by physical key code.
//!
//! The sandbox reads movement as held state every tick, so the tracker only
//! answers "is this key down right now". Physical codes keep `A`/`D` in the
//! same place on every layout.

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Minimal key event, constructible without a window.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    pub key: PhysicalKey,
    pub state: ElementState,
    /// OS auto-repeat. Ignored.
    pub repeat: bool,
}

impl RawKeyEvent {
    pub fn pressed(key: PhysicalKey) -> Self {
        Self {
            key,
            state: ElementState::Pressed,
            repeat: false,
        }
    }

    pub fn released(key: PhysicalKey) -> Self {
        Self {
            key,
            state: ElementState::Released,
            repeat: false,
        }
    }
}

/// Set of physical keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<PhysicalKey>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a winit keyboard event.
    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        });
    }

    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                self.held.insert(event.key);
            }
            ElementState::Released => {
                self.held.remove(&event.key);
            }
        }
    }

    #[must_use]
    pub fn is_held(&self, key: PhysicalKey) -> bool {
        self.held.contains(&key)
    }

    /// True if any of `keys` is held.
    #[must_use]
    pub fn any_held(&self, keys: &[PhysicalKey]) -> bool {
        keys.iter().any(|key| self.held.contains(key))
    }

    /// Drops every held key. Call when the window loses focus, since the
    /// matching release events will never arrive.
    pub fn release_all(&mut self) {
        if !self.held.is_empty() {
            tracing::debug!(count = self.held.len(), "releasing held keys");
        }
        self.held.clear();
    }

    #[must_use]
    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}
