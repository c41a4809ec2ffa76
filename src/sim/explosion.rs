//! Explosion effects
//!
//! The only entity animated on wall-clock time: frames advance every
//! `1000 / EXPLOSION_FPS` ms regardless of display refresh rate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, Rect};
use crate::consts::*;

/// Sprite sheet used by an explosion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionKind {
    Smoke,
    Fire,
}

/// A short-lived explosion, drifting with the world scroll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub kind: ExplosionKind,
    /// Top-left corner of the sprite
    pub pos: Vec2,
    pub frame: u32,
    /// Milliseconds accumulated toward the next frame
    pub timer: f32,
    pub marked_for_deletion: bool,
}

impl Explosion {
    /// Frame duration in milliseconds
    pub const INTERVAL_MS: f32 = 1000.0 / EXPLOSION_FPS;

    /// Create an explosion whose sprite is centered on `center`
    pub fn centered(kind: ExplosionKind, center: Vec2) -> Self {
        Self {
            kind,
            pos: center - Vec2::splat(EXPLOSION_SIZE * 0.5),
            frame: 0,
            timer: 0.0,
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.x -= SCROLL_SPEED;
        if self.timer > Self::INTERVAL_MS {
            self.frame += 1;
            self.timer = 0.0;
        } else {
            self.timer += dt;
        }
        if self.frame > EXPLOSION_MAX_FRAME {
            self.marked_for_deletion = true;
        }
    }

    /// Center of the sprite
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

impl Bounds for Explosion {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, EXPLOSION_SIZE, EXPLOSION_SIZE)
    }
}
