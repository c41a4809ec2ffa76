//! Parallax background

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Speed multipliers of the eight layers, back to front
pub const LAYER_SPEEDS: [f32; 8] = [2.0, 2.4, 2.8, 3.2, 2.4, 2.8, 3.2, 3.6];

/// One horizontally wrapping background strip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Index into the layer assets (0-based)
    pub index: usize,
    pub x: f32,
    pub speed_modifier: f32,
}

impl Layer {
    pub fn new(index: usize, speed_modifier: f32) -> Self {
        Self {
            index,
            x: 0.0,
            speed_modifier,
        }
    }

    /// Wraps first, then scrolls, so `x` may dip just past `-LAYER_WIDTH` for one tick
    pub fn update(&mut self) {
        if self.x <= -LAYER_WIDTH {
            self.x = 0.0;
        }
        self.x -= SCROLL_SPEED * self.speed_modifier;
    }

    /// Left edges of the two tiles covering the screen
    pub fn tile_positions(&self) -> [f32; 2] {
        [self.x, self.x + LAYER_WIDTH]
    }
}

/// All parallax layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    pub layers: Vec<Layer>,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            layers: LAYER_SPEEDS
                .iter()
                .enumerate()
                .map(|(i, &speed)| Layer::new(i, speed))
                .collect(),
        }
    }
}

impl Background {
    pub fn update(&mut self) {
        for layer in &mut self.layers {
            layer.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_layers_in_order() {
        let bg = Background::default();
        assert_eq!(bg.layers.len(), 8);
        let speeds: Vec<f32> = bg.layers.iter().map(|l| l.speed_modifier).collect();
        assert_eq!(speeds, LAYER_SPEEDS.to_vec());
        assert!(bg.layers.iter().all(|l| l.x == 0.0));
    }

    #[test]
    fn test_scrolls_by_modifier() {
        let mut bg = Background::default();
        bg.update();
        assert_eq!(bg.layers[0].x, -2.0 * SCROLL_SPEED);
        assert_eq!(bg.layers[7].x, -3.6 * SCROLL_SPEED);
    }

    #[test]
    fn test_wraps_after_full_width() {
        let mut layer = Layer::new(0, 2.0);
        // 960 ticks at 2 units reaches exactly -1920
        for _ in 0..960 {
            layer.update();
        }
        assert_eq!(layer.x, -LAYER_WIDTH);
        layer.update();
        assert_eq!(layer.x, -2.0);
    }

    #[test]
    fn test_tiles_are_adjacent() {
        let mut layer = Layer::new(3, 3.2);
        layer.x = -500.0;
        assert_eq!(layer.tile_positions(), [-500.0, 1420.0]);
    }
}
