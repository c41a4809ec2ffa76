//! Character-cell backend
//!
//! Rasterizes a draw list onto a grid of terminal cells. The playfield is
//! scaled to the grid; sprites become blocks of a per-asset glyph and
//! background layers become sparse star patterns anchored to their tiles,
//! so the parallax scroll stays visible at terminal resolution.

use glam::Vec2;

use super::commands::{AssetId, Color, DrawCommand, TextAlign, colors};
use crate::consts::{GAME_HEIGHT, GAME_WIDTH};
use crate::sim::Rect;

const DEBUG_INK: Color = [0.5, 0.5, 0.5, 1.0];

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        color: [1.0, 1.0, 1.0, 1.0],
    };
}

/// Glyph and color used for an asset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetStyle {
    pub glyph: char,
    pub color: Color,
}

/// Color scheme for the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Full,
    /// Monochrome, for high-contrast settings
    Mono,
}

impl Palette {
    pub fn style(&self, asset: AssetId) -> AssetStyle {
        let (glyph, color) = match asset {
            AssetId::Player => ('@', [0.3, 0.9, 0.4, 1.0]),
            AssetId::Projectile => ('-', [1.0, 1.0, 0.6, 1.0]),
            AssetId::Sandalien => ('S', [0.9, 0.7, 0.3, 1.0]),
            AssetId::Bee => ('B', [1.0, 0.85, 0.1, 1.0]),
            AssetId::Ghost => ('G', [0.7, 0.8, 1.0, 1.0]),
            AssetId::SmokeExplosion => ('%', [0.6, 0.6, 0.6, 1.0]),
            AssetId::FireExplosion => ('*', [1.0, 0.45, 0.1, 1.0]),
            AssetId::Layer(i) => {
                let shade = 0.25 + 0.08 * i as f32;
                (
                    if i < 4 { '.' } else { '\'' },
                    [shade * 0.6, shade * 0.7, shade, 1.0],
                )
            }
        };
        let color = match self {
            Palette::Full => color,
            Palette::Mono => colors::HUD_TEXT,
        };
        AssetStyle { glyph, color }
    }

    /// Map a draw color onto the terminal. Pure black (debug ink) would
    /// vanish on a dark terminal, so it is lifted to grey.
    fn tint(&self, color: Color) -> Color {
        match self {
            Palette::Full if color == colors::DEBUG_OUTLINE => DEBUG_INK,
            Palette::Full => color,
            Palette::Mono => colors::HUD_TEXT,
        }
    }
}

/// A grid of cells covering the whole playfield
#[derive(Debug, Clone)]
pub struct Canvas {
    pub cols: u16,
    pub rows: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::BLANK; cols as usize * rows as usize],
        }
    }

    #[cfg(test)]
    fn get(&self, col: u16, row: u16) -> Option<Cell> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row as usize * self.cols as usize + col as usize])
        } else {
            None
        }
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: u16) -> &[Cell] {
        let start = row as usize * self.cols as usize;
        self.cells
            .get(start..start + self.cols as usize)
            .unwrap_or(&[])
    }

    /// Text content of one row, for tests and logging
    pub fn row_text(&self, row: u16) -> String {
        self.row(row).iter().map(|c| c.glyph).collect()
    }

    fn put(&mut self, col: i32, row: i32, glyph: char, color: Color) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        self.cells[row as usize * self.cols as usize + col as usize] = Cell { glyph, color };
    }

    /// Playfield x to fractional column
    fn to_col(&self, x: f32) -> f32 {
        x * self.cols as f32 / GAME_WIDTH
    }

    /// Playfield y to fractional row
    fn to_row(&self, y: f32) -> f32 {
        y * self.rows as f32 / GAME_HEIGHT
    }

    /// Cell range covered by a playfield rect; empty rects still cover one cell
    fn cell_span(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        let c0 = self.to_col(rect.x).floor() as i32;
        let r0 = self.to_row(rect.y).floor() as i32;
        let c1 = (self.to_col(rect.right()).ceil() as i32).max(c0 + 1);
        let r1 = (self.to_row(rect.bottom()).ceil() as i32).max(r0 + 1);
        (c0, r0, c1, r1)
    }

    fn fill(&mut self, rect: &Rect, glyph: char, color: Color) {
        let (c0, r0, c1, r1) = self.cell_span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, glyph, color);
            }
        }
    }

    fn stroke(&mut self, rect: &Rect, color: Color) {
        let (c0, r0, c1, r1) = self.cell_span(rect);
        for col in c0..c1 {
            self.put(col, r0, '-', color);
            self.put(col, r1 - 1, '-', color);
        }
        for row in r0..r1 {
            self.put(c0, row, '|', color);
            self.put(c1 - 1, row, '|', color);
        }
    }

    /// Sparse pattern anchored at the tile's left edge
    fn stars(&mut self, rect: &Rect, layer: u8, style: AssetStyle) {
        let (c0, r0, c1, r1) = self.cell_span(rect);
        let period = 17 + 6 * layer as i32;
        for row in r0..r1 {
            for col in c0..c1 {
                let local = col - c0;
                if (local * 7 + row * 13 + layer as i32 * 5).rem_euclid(period) == 0 {
                    self.put(col, row, style.glyph, style.color);
                }
            }
        }
    }

    fn text(&mut self, text: &str, pos: Vec2, align: TextAlign, color: Color) {
        let len = text.chars().count() as i32;
        let anchor = self.to_col(pos.x).floor() as i32;
        let start = match align {
            TextAlign::Left => anchor,
            TextAlign::Center => anchor - len / 2,
        };
        // Baseline sits on the row above the position
        let row = (self.to_row(pos.y).floor() as i32 - 1).max(0);
        for (i, glyph) in text.chars().enumerate() {
            self.put(start + i as i32, row, glyph, color);
        }
    }
}

/// Rasterize a draw list onto a `cols` x `rows` grid
pub fn rasterize(commands: &[DrawCommand], cols: u16, rows: u16, palette: Palette) -> Canvas {
    let mut canvas = Canvas::new(cols, rows);
    for command in commands {
        match command {
            DrawCommand::Sprite { asset, dest, .. } => {
                let style = palette.style(*asset);
                match asset {
                    AssetId::Layer(i) => canvas.stars(dest, *i, style),
                    _ => canvas.fill(dest, style.glyph, style.color),
                }
            }
            DrawCommand::StrokeRect { rect, color } => {
                canvas.stroke(rect, palette.tint(*color));
            }
            DrawCommand::FillRect { rect, color } => {
                canvas.fill(rect, '|', palette.tint(*color));
            }
            DrawCommand::Text {
                text, pos, align, color, ..
            } => {
                canvas.text(text, *pos, *align, palette.tint(*color));
            }
        }
    }
    canvas
}
