//! Keyboard input
//!
//! Movement keys are tracked as a held set and sampled by the player every
//! tick. Fire and the debug toggle act immediately when pressed.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Logical keys understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Fire,
    DebugToggle,
}

impl Key {
    /// Default keyboard layout
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Key::Up),
            's' => Some(Key::Down),
            ' ' => Some(Key::Fire),
            'd' => Some(Key::DebugToggle),
            _ => None,
        }
    }

    /// Whether the key is tracked while held (as opposed to a one-shot action)
    pub fn is_movement(self) -> bool {
        self.held_bit().is_some()
    }

    /// Bit in [`HeldKeys`]; only movement keys have one
    fn held_bit(self) -> Option<u8> {
        match self {
            Key::Up => Some(1 << 0),
            Key::Down => Some(1 << 1),
            Key::Fire | Key::DebugToggle => None,
        }
    }
}

/// Set of currently held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys(u8);

impl HeldKeys {
    /// Record a press. Only movement keys are held.
    pub fn press(&mut self, key: Key) {
        if let Some(bit) = key.held_bit() {
            self.0 |= bit;
        }
    }

    pub fn release(&mut self, key: Key) {
        if let Some(bit) = key.held_bit() {
            self.0 &= !bit;
        }
    }

    pub fn contains(&self, key: Key) -> bool {
        key.held_bit().is_some_and(|bit| self.0 & bit != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

/// A discrete key transition from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Apply a key event to the session.
///
/// Fire shoots right away (not queued for the next tick), and the debug key
/// flips the overlay flag. Auto-repeated presses of held keys are harmless.
pub fn handle_key_event(state: &mut GameState, event: KeyEvent) {
    match event {
        KeyEvent::Pressed(key) if key.is_movement() => state.keys.press(key),
        KeyEvent::Pressed(Key::Fire) => state.shoot(),
        KeyEvent::Pressed(Key::DebugToggle) => {
            state.debug = !state.debug;
            log::debug!("Debug overlay: {}", state.debug);
        }
        KeyEvent::Pressed(_) => {}
        KeyEvent::Released(key) => state.keys.release(key),
    }
}
