//! A running game: state, its seeded RNG and the per-frame entry point

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::input::{KeyEvent, handle_key_event};
use crate::renderer::{self, DrawCommand};
use crate::settings::Settings;
use crate::sim::{GameState, tick};

/// One play session driven by a host frame loop
pub struct Session {
    pub state: GameState,
    rng: Pcg32,
    seed: u64,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// New session with the overlay preference from `settings`
    pub fn with_settings(seed: u64, settings: &Settings) -> Self {
        let mut session = Self::new(seed);
        session.state.debug = settings.debug_overlay;
        session
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        handle_key_event(&mut self.state, event);
    }

    /// Advance one tick by `dt` milliseconds and return the frame's draw list
    pub fn frame(&mut self, dt: f32) -> Vec<DrawCommand> {
        tick(&mut self.state, dt, &mut self.rng);
        renderer::draw(&self.state)
    }

    /// Start over with a new seed. The debug overlay choice carries over.
    pub fn restart(&mut self, seed: u64) {
        let debug = self.state.debug;
        *self = Self::new(seed);
        self.state.debug = debug;
        log::info!("Game restarted with seed: {}", seed);
    }

    /// Current state as JSON, for debugging dumps
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.state)
    }
}
