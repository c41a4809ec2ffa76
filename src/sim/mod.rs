//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Time only advances through the `dt` passed to [`tick`]
//! - Randomness only comes from the injected RNG
//! - Stable iteration order (insertion order of each collection)
//! - No rendering or platform dependencies

pub mod background;
pub mod collision;
pub mod enemy;
pub mod explosion;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;

pub use background::{Background, LAYER_SPEEDS, Layer};
pub use collision::{Bounds, Rect, collides};
pub use enemy::{Enemy, EnemyKind, EnemyProfile};
pub use explosion::{Explosion, ExplosionKind};
pub use player::Player;
pub use projectile::Projectile;
pub use state::{Ammo, GameState, Outcome};
pub use tick::tick;
