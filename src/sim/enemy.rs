//! Enemies
//!
//! All variants share movement and animation; they differ only in the
//! constants of [`EnemyKind::profile`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, Rect};
use crate::consts::*;

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Sandalien,
    Bee,
    Ghost,
}

/// Per-variant constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub size: Vec2,
    pub max_frame: u32,
    pub lives: i32,
    pub score: i32,
    /// Touching a lucky enemy powers the player up instead of costing score
    pub lucky: bool,
    /// Relative spawn weight (weights sum to 1)
    pub spawn_weight: f32,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Sandalien, EnemyKind::Bee, EnemyKind::Ghost];

    pub fn profile(self) -> EnemyProfile {
        match self {
            EnemyKind::Sandalien => EnemyProfile {
                size: Vec2::new(205.0, 176.0),
                max_frame: 19,
                lives: 5,
                score: 5,
                lucky: false,
                spawn_weight: 0.3,
            },
            EnemyKind::Bee => EnemyProfile {
                size: Vec2::new(273.0, 282.0),
                max_frame: 12,
                lives: 2,
                score: 2,
                lucky: false,
                spawn_weight: 0.3,
            },
            EnemyKind::Ghost => EnemyProfile {
                size: Vec2::new(396.0, 582.0),
                max_frame: 10,
                lives: 15,
                score: 15,
                lucky: true,
                spawn_weight: 0.4,
            },
        }
    }

    /// Pick a variant by weight
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let roll: f32 = rng.random();
        Self::from_roll(roll)
    }

    /// Map a roll in [0, 1) onto the cumulative spawn weights
    pub fn from_roll(roll: f32) -> Self {
        let mut cumulative = 0.0;
        for kind in Self::ALL {
            cumulative += kind.profile().spawn_weight;
            if roll < cumulative {
                return kind;
            }
        }
        EnemyKind::Ghost
    }

    /// Highest valid spawn y for this variant
    pub fn max_spawn_y(self) -> f32 {
        (GAME_HEIGHT * ENEMY_SPAWN_BAND - self.profile().size.y).max(0.0)
    }
}

/// An enemy drifting left across the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    /// Own horizontal speed, added to the world scroll each tick
    pub speed_x: f32,
    pub lives: i32,
    pub frame: u32,
    pub marked_for_deletion: bool,
}

impl Enemy {
    pub fn new(kind: EnemyKind, pos: Vec2, speed_x: f32) -> Self {
        Self {
            kind,
            pos,
            speed_x,
            lives: kind.profile().lives,
            frame: 0,
            marked_for_deletion: false,
        }
    }

    /// Spawn at the right edge with a random height and speed
    pub fn spawn<R: Rng + ?Sized>(kind: EnemyKind, rng: &mut R) -> Self {
        let speed_x = ENEMY_SPEED_MAX - rng.random::<f32>() * (ENEMY_SPEED_MAX - ENEMY_SPEED_MIN);
        let y = rng.random::<f32>() * kind.max_spawn_y();
        Self::new(kind, Vec2::new(GAME_WIDTH, y), speed_x)
    }

    pub fn profile(&self) -> EnemyProfile {
        self.kind.profile()
    }

    pub fn is_lucky(&self) -> bool {
        self.profile().lucky
    }

    /// Points awarded when destroyed
    pub fn score(&self) -> i32 {
        self.profile().score
    }

    pub fn update(&mut self) {
        self.pos.x += self.speed_x - SCROLL_SPEED;
        if self.pos.x + self.profile().size.x < 0.0 {
            self.marked_for_deletion = true;
        }

        self.frame = if self.frame < self.profile().max_frame {
            self.frame + 1
        } else {
            0
        };
    }
}

impl Bounds for Enemy {
    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.profile().size)
    }
}
