//! Game state and core simulation types
//!
//! Everything a session needs between ticks lives in [`GameState`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::background::Background;
use super::enemy::{Enemy, EnemyKind};
use super::explosion::{Explosion, ExplosionKind};
use super::player::Player;
use crate::consts::*;
use crate::input::HeldKeys;

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

/// Shared ammunition pool
///
/// Fractional counts are normal: power-ups add a tenth of a round per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ammo {
    pub count: f32,
    /// Milliseconds accumulated toward the next regenerated round
    pub timer: f32,
}

impl Default for Ammo {
    fn default() -> Self {
        Self {
            count: START_AMMO,
            timer: 0.0,
        }
    }
}

impl Ammo {
    /// Remove one round, never dropping below zero
    pub fn spend_one(&mut self) {
        self.count = (self.count - 1.0).max(0.0);
    }

    /// Raise the count to at least `MAX_AMMO`
    pub fn top_up(&mut self) {
        if self.count < MAX_AMMO {
            self.count = MAX_AMMO;
        }
    }

    /// Timed regeneration: one round per elapsed interval while below max
    pub fn regenerate(&mut self, dt: f32) {
        if self.timer > AMMO_INTERVAL_MS {
            if self.count < MAX_AMMO {
                self.count = (self.count + 1.0).min(MAX_AMMO);
            }
            self.timer = 0.0;
        } else {
            self.timer += dt;
        }
    }

    /// Whole rounds shown on the HUD
    pub fn display_rounds(&self) -> usize {
        self.count.max(0.0).ceil() as usize
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub score: i32,
    /// Elapsed play time in milliseconds (frozen once the game is over)
    pub game_time: f32,
    pub ammo: Ammo,
    /// Milliseconds accumulated toward the next enemy spawn
    pub enemy_timer: f32,
    pub game_over: bool,
    /// Draw hitboxes and enemy lives
    pub debug: bool,
    /// Movement keys currently held
    pub keys: HeldKeys,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub background: Background,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            game_time: 0.0,
            ammo: Ammo::default(),
            enemy_timer: 0.0,
            game_over: false,
            debug: true,
            keys: HeldKeys::default(),
            time_ticks: 0,
            background: Background::default(),
            player: Player::default(),
            enemies: Vec::new(),
            explosions: Vec::new(),
        }
    }

    /// Result of a finished session, decided by the score at the time of asking
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            None
        } else if self.score > WINNING_SCORE {
            Some(Outcome::Win)
        } else {
            Some(Outcome::Lose)
        }
    }

    /// Fire the player's weapon
    pub fn shoot(&mut self) {
        self.player.shoot_top(&mut self.ammo);
    }

    /// Enter the finished state, logging the first transition only
    pub fn end_game(&mut self) {
        if !self.game_over {
            self.game_over = true;
            log::info!(
                "Game over after {:.1}s with score {} ({:?})",
                self.game_time * 0.001,
                self.score,
                self.outcome().unwrap_or(Outcome::Lose)
            );
        }
    }

    /// Spawn a randomly chosen enemy at the right edge
    pub fn spawn_enemy<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let kind = EnemyKind::choose(rng);
        let enemy = Enemy::spawn(kind, rng);
        log::debug!(
            "Spawned {:?} at y={:.0} speed={:.2}",
            kind,
            enemy.pos.y,
            enemy.speed_x
        );
        self.enemies.push(enemy);
    }

    /// Add an explosion of random kind centered on `center`
    pub fn add_explosion<R: Rng + ?Sized>(&mut self, center: Vec2, rng: &mut R) {
        let kind = if rng.random::<f32>() < 0.5 {
            ExplosionKind::Smoke
        } else {
            ExplosionKind::Fire
        };
        self.explosions.push(Explosion::centered(kind, center));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.score, 0);
        assert_eq!(state.ammo.count, START_AMMO);
        assert!(!state.game_over);
        assert!(state.debug);
        assert_eq!(state.outcome(), None);
        assert_eq!(state.background.layers.len(), 8);
    }

    #[test]
    fn test_outcome_follows_score() {
        let mut state = GameState::new();
        state.game_over = true;
        state.score = WINNING_SCORE;
        assert_eq!(state.outcome(), Some(Outcome::Lose));
        state.score = WINNING_SCORE + 1;
        assert_eq!(state.outcome(), Some(Outcome::Win));
    }

    #[test]
    fn test_ammo_regenerates_on_interval() {
        let mut ammo = Ammo::default();
        // Timer must exceed the interval before a round is added
        for _ in 0..22 {
            ammo.regenerate(16.0);
        }
        assert_eq!(ammo.count, START_AMMO);
        ammo.regenerate(16.0);
        assert_eq!(ammo.count, START_AMMO + 1.0);
        assert_eq!(ammo.timer, 0.0);
    }

    #[test]
    fn test_ammo_regen_stops_at_max() {
        let mut ammo = Ammo {
            count: MAX_AMMO - 0.5,
            timer: AMMO_INTERVAL_MS + 1.0,
        };
        ammo.regenerate(16.0);
        assert_eq!(ammo.count, MAX_AMMO);
        ammo.timer = AMMO_INTERVAL_MS + 1.0;
        ammo.regenerate(16.0);
        assert_eq!(ammo.count, MAX_AMMO);
    }

    #[test]
    fn test_display_rounds_rounds_up() {
        let ammo = Ammo {
            count: 3.2,
            timer: 0.0,
        };
        assert_eq!(ammo.display_rounds(), 4);
        let empty = Ammo {
            count: 0.0,
            timer: 0.0,
        };
        assert_eq!(empty.display_rounds(), 0);
    }

    #[test]
    fn test_add_explosion_centered() {
        let mut state = GameState::new();
        let mut rng = Pcg32::seed_from_u64(1);
        state.add_explosion(Vec2::new(300.0, 300.0), &mut rng);
        assert_eq!(state.explosions.len(), 1);
        assert_eq!(state.explosions[0].center(), Vec2::new(300.0, 300.0));
    }

    #[test]
    fn test_end_game_is_idempotent() {
        let mut state = GameState::new();
        state.end_game();
        state.end_game();
        assert!(state.game_over);
    }
}
