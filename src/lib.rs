//! Parallax Shooter - a side-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `input`: Key events to held-key flags and immediate actions
//! - `renderer`: Draw-command scene builder, HUD and terminal rasterizer
//! - `settings`: Runtime preferences
//! - `session`: Seeded simulation plus draw list, one call per display frame

pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use input::{HeldKeys, Key, KeyEvent};
pub use session::Session;
pub use settings::Settings;
pub use sim::{GameState, Outcome, tick};

/// Game configuration constants
pub mod consts {
    /// Logical playfield dimensions
    pub const GAME_WIDTH: f32 = 1920.0;
    pub const GAME_HEIGHT: f32 = 1080.0;

    /// World scroll speed (units per tick), shared by background, enemies and explosions
    pub const SCROLL_SPEED: f32 = 1.0;

    /// Session limits (milliseconds / points)
    pub const TIME_LIMIT_MS: f32 = 40_000.0;
    pub const WINNING_SCORE: i32 = 150;

    /// Ammo economy
    pub const START_AMMO: f32 = 20.0;
    pub const MAX_AMMO: f32 = 50.0;
    pub const AMMO_INTERVAL_MS: f32 = 350.0;

    /// Enemy spawn cadence
    pub const ENEMY_INTERVAL_MS: f32 = 2_000.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 104.0;
    pub const PLAYER_HEIGHT: f32 = 142.0;
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 500.0;
    pub const PLAYER_MAX_SPEED: f32 = 10.0;
    pub const PLAYER_MAX_FRAME: u32 = 29;
    pub const POWER_UP_LIMIT_MS: f32 = 10_000.0;
    /// Ammo gained per tick while powered up
    pub const POWER_UP_AMMO_PER_TICK: f32 = 0.1;

    /// Muzzle offsets relative to the player's top-left corner
    pub const MUZZLE_X: f32 = 80.0;
    pub const MUZZLE_TOP_Y: f32 = 30.0;
    pub const MUZZLE_LOW_Y: f32 = 60.0;

    /// Projectile defaults (speed is per tick, not scaled by delta time)
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 3.0;
    pub const PROJECTILE_SPEED: f32 = 15.0;
    /// Projectiles expire past this fraction of the playfield width
    pub const PROJECTILE_RANGE: f32 = 0.8;

    /// Explosion sprite sheet
    pub const EXPLOSION_SIZE: f32 = 200.0;
    pub const EXPLOSION_MAX_FRAME: u32 = 8;
    pub const EXPLOSION_FPS: f32 = 50.0;

    /// Enemies spawn within this fraction of the playfield height
    pub const ENEMY_SPAWN_BAND: f32 = 0.9;
    /// Per-enemy horizontal speed range (units per tick)
    pub const ENEMY_SPEED_MIN: f32 = -6.0;
    pub const ENEMY_SPEED_MAX: f32 = -0.5;

    /// Background layer image size
    pub const LAYER_WIDTH: f32 = 1920.0;
    pub const LAYER_HEIGHT: f32 = 1080.0;
}
