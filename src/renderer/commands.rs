//! Draw commands handed to a rendering backend

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{EnemyKind, ExplosionKind, Rect};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const HUD_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const HUD_SHADOW: Color = [0.0, 0.0, 0.0, 1.0];
    pub const AMMO: Color = [1.0, 1.0, 1.0, 1.0];
    pub const AMMO_POWERED: Color = [1.0, 1.0, 0.0, 1.0];
    pub const DEBUG_OUTLINE: Color = [0.0, 0.0, 0.0, 1.0];
    pub const DEBUG_TEXT: Color = [0.0, 0.0, 0.0, 1.0];
}

/// Named image resources. The core never loads these, it only refers to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetId {
    Player,
    Projectile,
    Sandalien,
    Bee,
    Ghost,
    SmokeExplosion,
    FireExplosion,
    /// Background layer, 0-based
    Layer(u8),
}

const LAYER_NAMES: [&str; 8] = [
    "layer1", "layer2", "layer3", "layer4", "layer5", "layer6", "layer7", "layer8",
];

impl AssetId {
    /// Stable identifier used by asset collaborators
    pub fn name(&self) -> &'static str {
        match self {
            AssetId::Player => "player",
            AssetId::Projectile => "projectile",
            AssetId::Sandalien => "sandalien",
            AssetId::Bee => "bee",
            AssetId::Ghost => "ghost",
            AssetId::SmokeExplosion => "smokeExplosion",
            AssetId::FireExplosion => "fireExplosion",
            AssetId::Layer(i) => LAYER_NAMES.get(*i as usize).copied().unwrap_or("layer"),
        }
    }

    pub fn enemy(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Sandalien => AssetId::Sandalien,
            EnemyKind::Bee => AssetId::Bee,
            EnemyKind::Ghost => AssetId::Ghost,
        }
    }

    pub fn explosion(kind: ExplosionKind) -> Self {
        match kind {
            ExplosionKind::Smoke => AssetId::SmokeExplosion,
            ExplosionKind::Fire => AssetId::FireExplosion,
        }
    }
}

/// Horizontal anchoring of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Font request: family name and pixel size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub family: &'static str,
    pub size: f32,
}

/// A single drawing operation in playfield coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Blit a frame of a sprite sheet. `src` is in sheet pixels.
    Sprite { asset: AssetId, src: Rect, dest: Rect },
    /// Outline a rectangle
    StrokeRect { rect: Rect, color: Color },
    /// Fill a rectangle
    FillRect { rect: Rect, color: Color },
    /// Draw text with its baseline at `pos`
    Text {
        text: String,
        pos: Vec2,
        font: Font,
        align: TextAlign,
        color: Color,
        /// Drop shadow offset and color
        shadow: Option<(Vec2, Color)>,
    },
}

impl DrawCommand {
    /// Blit frame (`frame_x`, `frame_y`) of a sheet laid out in cells the size of `dest`
    pub fn sprite_frame(asset: AssetId, frame_x: u32, frame_y: u32, dest: Rect) -> Self {
        DrawCommand::Sprite {
            asset,
            src: Rect::new(
                frame_x as f32 * dest.width,
                frame_y as f32 * dest.height,
                dest.width,
                dest.height,
            ),
            dest,
        }
    }
}
