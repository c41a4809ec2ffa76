//! Axis-aligned bounding box collision
//!
//! Every entity in the playfield is a rectangle anchored at its top-left
//! corner. Edges are exclusive on both axes and the vertical test is written
//! `a.h + a.y > b.y`. Callers always pass the attacker first (player or
//! projectile) and the enemy second; nothing relies on argument order being
//! interchangeable.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangle in playfield units, anchored at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Center point of the box
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Anything with a bounding box in the playfield
pub trait Bounds {
    fn bounds(&self) -> Rect;
}

impl Bounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Check whether `a` overlaps `b`
#[inline]
pub fn collides(a: &impl Bounds, b: &impl Bounds) -> bool {
    let a = a.bounds();
    let b = b.bounds();
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.height + a.y > b.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(collides(&a, &b));
        assert!(collides(&b, &a));
    }

    #[test]
    fn test_separated_boxes_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!collides(&a, &b));
        let c = Rect::new(0.0, 20.0, 10.0, 10.0);
        assert!(!collides(&a, &c));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the vertical edge x = 10
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!collides(&a, &right));
        assert!(!collides(&right, &a));
        // Shares the horizontal edge y = 10
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!collides(&a, &below));
        assert!(!collides(&below, &a));
    }

    #[test]
    fn test_zero_height_box_on_top_edge() {
        // A flat box lying exactly on b's top edge: a.y < b.bottom holds but
        // a.h + a.y > b.y does not.
        let flat = Rect::new(2.0, 0.0, 4.0, 0.0);
        let b = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!collides(&flat, &b));
        assert!(!collides(&b, &flat));
        // Moved inside b, both orders see the overlap.
        let inside = Rect::new(2.0, 5.0, 4.0, 0.0);
        assert!(collides(&inside, &b));
        assert!(collides(&b, &inside));
    }

    #[test]
    fn test_negative_size_is_clamped() {
        let r = Rect::new(1.0, 2.0, -5.0, -1.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
    }

    #[test]
    fn test_center() {
        let r = Rect::new(100.0, 50.0, 200.0, 100.0);
        assert_eq!(r.center(), Vec2::new(200.0, 100.0));
    }

    proptest! {
        #[test]
        fn prop_box_collides_with_itself(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            w in 0.5f32..500.0,
            h in 0.5f32..500.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(collides(&r, &r));
        }

        #[test]
        fn prop_disjoint_on_x_never_collide(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            w in 0.5f32..500.0,
            h in 0.5f32..500.0,
            gap in 0.0f32..100.0,
        ) {
            let a = Rect::new(x, y, w, h);
            let b = Rect::new(x + w + gap, y, w, h);
            prop_assert!(!collides(&a, &b));
            prop_assert!(!collides(&b, &a));
        }
    }
}
