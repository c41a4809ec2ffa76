//! Head-up display: score, timer, ammo bar and the game-over banner

use glam::Vec2;

use super::commands::{DrawCommand, Font, TextAlign, colors};
use crate::consts::*;
use crate::sim::{GameState, Outcome, Rect};

/// Display font family for all HUD text
pub const HUD_FONT: &str = "Bangers";
pub const HUD_FONT_SIZE: f32 = 60.0;
const BANNER_SIZE: f32 = 200.0;
const SUBTITLE_SIZE: f32 = 100.0;
const BANNER_OFFSET_Y: f32 = 70.0;
const SHADOW_OFFSET: Vec2 = Vec2::new(2.0, 2.0);

/// Two-line banner text for a finished game
pub fn banner(outcome: Outcome) -> (&'static str, &'static str) {
    match outcome {
        Outcome::Win => ("You Win", "Well done"),
        Outcome::Lose => ("You lose", "Try again next time!"),
    }
}

/// Elapsed milliseconds as seconds with one decimal
pub fn format_timer(game_time_ms: f32) -> String {
    format!("{:.1}", game_time_ms * 0.001)
}

fn hud_text(text: String, pos: Vec2, size: f32, align: TextAlign) -> DrawCommand {
    DrawCommand::Text {
        text,
        pos,
        font: Font {
            family: HUD_FONT,
            size,
        },
        align,
        color: colors::HUD_TEXT,
        shadow: Some((SHADOW_OFFSET, colors::HUD_SHADOW)),
    }
}

/// Append the HUD to `out`
pub fn draw(state: &GameState, out: &mut Vec<DrawCommand>) {
    out.push(hud_text(
        format!("Score: {}", state.score),
        Vec2::new(30.0, 80.0),
        HUD_FONT_SIZE,
        TextAlign::Left,
    ));
    out.push(hud_text(
        format!("Timer: {}", format_timer(state.game_time)),
        Vec2::new(30.0, 185.0),
        HUD_FONT_SIZE,
        TextAlign::Left,
    ));

    if let Some(outcome) = state.outcome() {
        let (headline, subtitle) = banner(outcome);
        let center = Vec2::new(GAME_WIDTH * 0.5, GAME_HEIGHT * 0.5);
        out.push(hud_text(
            headline.to_string(),
            center - Vec2::new(0.0, BANNER_OFFSET_Y),
            BANNER_SIZE,
            TextAlign::Center,
        ));
        out.push(hud_text(
            subtitle.to_string(),
            center + Vec2::new(0.0, BANNER_OFFSET_Y),
            SUBTITLE_SIZE,
            TextAlign::Center,
        ));
    }

    let color = if state.player.power_up {
        colors::AMMO_POWERED
    } else {
        colors::AMMO
    };
    for i in 0..state.ammo.display_rounds() {
        out.push(DrawCommand::FillRect {
            rect: Rect::new(30.0 + 5.0 * i as f32, 100.0, 3.0, 20.0),
            color,
        });
    }
}
