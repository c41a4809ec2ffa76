//! Player projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, Rect};
use crate::consts::*;

/// A bullet fired by the player, travelling right at a fixed per-tick speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub marked_for_deletion: bool,
}

impl Projectile {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            marked_for_deletion: false,
        }
    }

    /// Move one step. Not scaled by delta time.
    pub fn update(&mut self) {
        self.pos.x += PROJECTILE_SPEED;
        if self.pos.x > GAME_WIDTH * PROJECTILE_RANGE {
            self.marked_for_deletion = true;
        }
    }
}

impl Bounds for Projectile {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }
}
