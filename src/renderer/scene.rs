//! Builds the frame's draw list from the game state
//!
//! Order is fixed: background, player (with its projectiles), HUD, enemies,
//! explosions. Enemies and explosions therefore draw over the HUD.

use glam::Vec2;

use super::commands::{AssetId, DrawCommand, Font, TextAlign, colors};
use super::hud;
use crate::consts::*;
use crate::sim::{Bounds, Enemy, Explosion, GameState, Player, Rect, background::Layer};

/// Font used for the debug lives counter
pub const DEBUG_FONT: &str = "Helvetica";
const DEBUG_FONT_SIZE: f32 = 20.0;

/// Produce the complete draw list for the current state
pub fn draw(state: &GameState) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(
        state.background.layers.len() * 2
            + state.player.projectiles.len()
            + state.enemies.len() * 3
            + state.explosions.len()
            + 64,
    );

    for layer in &state.background.layers {
        draw_layer(layer, &mut out);
    }
    draw_player(&state.player, state.debug, &mut out);
    hud::draw(state, &mut out);
    for enemy in &state.enemies {
        draw_enemy(enemy, state.debug, &mut out);
    }
    for explosion in &state.explosions {
        draw_explosion(explosion, &mut out);
    }

    out
}

fn draw_layer(layer: &Layer, out: &mut Vec<DrawCommand>) {
    let asset = AssetId::Layer(layer.index as u8);
    let src = Rect::new(0.0, 0.0, LAYER_WIDTH, LAYER_HEIGHT);
    for x in layer.tile_positions() {
        out.push(DrawCommand::Sprite {
            asset,
            src,
            dest: Rect::new(x, 0.0, LAYER_WIDTH, LAYER_HEIGHT),
        });
    }
}

fn draw_player(player: &Player, debug: bool, out: &mut Vec<DrawCommand>) {
    let bounds = player.bounds();
    if debug {
        out.push(DrawCommand::StrokeRect {
            rect: bounds,
            color: colors::DEBUG_OUTLINE,
        });
    }
    for projectile in &player.projectiles {
        let dest = projectile.bounds();
        out.push(DrawCommand::Sprite {
            asset: AssetId::Projectile,
            src: Rect::new(0.0, 0.0, dest.width, dest.height),
            dest,
        });
    }
    out.push(DrawCommand::sprite_frame(
        AssetId::Player,
        player.frame,
        0,
        bounds,
    ));
}

fn draw_enemy(enemy: &Enemy, debug: bool, out: &mut Vec<DrawCommand>) {
    let bounds = enemy.bounds();
    if debug {
        out.push(DrawCommand::StrokeRect {
            rect: bounds,
            color: colors::DEBUG_OUTLINE,
        });
    }
    out.push(DrawCommand::sprite_frame(
        AssetId::enemy(enemy.kind),
        enemy.frame,
        0,
        bounds,
    ));
    if debug {
        out.push(DrawCommand::Text {
            text: enemy.lives.to_string(),
            pos: Vec2::new(bounds.x, bounds.y),
            font: Font {
                family: DEBUG_FONT,
                size: DEBUG_FONT_SIZE,
            },
            align: TextAlign::Left,
            color: colors::DEBUG_TEXT,
            shadow: None,
        });
    }
}

fn draw_explosion(explosion: &Explosion, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::sprite_frame(
        AssetId::explosion(explosion.kind),
        explosion.frame,
        0,
        explosion.bounds(),
    ));
}
