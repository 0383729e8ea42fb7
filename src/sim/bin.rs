//! Player-movable collection bins

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Brick, BrickColor};
use crate::consts::{BIN_HEIGHT, BIN_WIDTH, BIN_Y, FIELD_HALF_EXTENT};

/// What a captured brick did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capture {
    /// Color matched the bin: one point
    Scored,
    /// Wrong color: consumed, no points
    Wasted,
    /// A bomb reached the bin: round over
    Bomb,
}

/// A capture zone, anchored at the center of its top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Color that scores when caught
    pub color: BrickColor,
}

impl Bin {
    pub fn new(x: f32, color: BrickColor) -> Self {
        Self {
            x,
            y: BIN_Y,
            width: BIN_WIDTH,
            height: BIN_HEIGHT,
            color,
        }
    }

    /// Green bin at the center, red bin to its right
    pub fn default_pair() -> [Bin; 2] {
        [
            Bin::new(0.0, BrickColor::Green),
            Bin::new(1.0, BrickColor::Red),
        ]
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y - self.height
    }

    /// A live brick is caught when its vertical span overlaps the bin's and
    /// its horizontal span lies fully inside the bin.
    pub fn captures(&self, brick: &Brick) -> bool {
        let overlaps_vertically = brick.bottom() <= self.y && brick.pos.y >= self.bottom();
        let half = brick.width / 2.0;
        let inside_horizontally =
            brick.pos.x - half >= self.left() && brick.pos.x + half <= self.right();
        overlaps_vertically && inside_horizontally
    }

    /// Scoring rule for a caught brick of `color`
    pub fn outcome(&self, color: BrickColor) -> Capture {
        if color.is_bomb() {
            Capture::Bomb
        } else if color == self.color {
            Capture::Scored
        } else {
            Capture::Wasted
        }
    }

    /// Pointer hit test (edges included)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y <= self.y && p.y >= self.bottom()
    }

    /// Drag to `x`, kept inside the field
    pub fn set_x(&mut self, x: f32) {
        self.x = x.clamp(-FIELD_HALF_EXTENT, FIELD_HALF_EXTENT);
    }

    pub fn nudge(&mut self, dx: f32) {
        self.set_x(self.x + dx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick_at(x: f32, y: f32) -> Brick {
        Brick::new(Vec2::new(x, y), BrickColor::Green)
    }

    #[test]
    fn test_captures_overlapping_brick() {
        let bin = Bin::new(0.0, BrickColor::Green);
        // Bottom edge just dipped into the bin's top
        assert!(bin.captures(&brick_at(0.0, -2.2)));
        // Fully inside
        assert!(bin.captures(&brick_at(0.2, -2.6)));
    }

    #[test]
    fn test_no_capture_above_bin() {
        let bin = Bin::new(0.0, BrickColor::Green);
        assert!(!bin.captures(&brick_at(0.0, -2.0)));
    }

    #[test]
    fn test_no_capture_when_straddling_edge() {
        let bin = Bin::new(0.0, BrickColor::Green);
        // x + 0.1 = 0.45 > 0.4
        assert!(!bin.captures(&brick_at(0.35, -2.6)));
        assert!(!bin.captures(&brick_at(-0.35, -2.6)));
    }

    #[test]
    fn test_outcomes() {
        let bin = Bin::new(0.0, BrickColor::Green);
        assert_eq!(bin.outcome(BrickColor::Green), Capture::Scored);
        assert_eq!(bin.outcome(BrickColor::Red), Capture::Wasted);
        assert_eq!(bin.outcome(BrickColor::Bomb), Capture::Bomb);
    }

    #[test]
    fn test_contains_point() {
        let bin = Bin::new(1.0, BrickColor::Red);
        assert!(bin.contains_point(Vec2::new(1.0, -3.0)));
        assert!(bin.contains_point(Vec2::new(0.6, -2.5)));
        assert!(!bin.contains_point(Vec2::new(1.0, -3.6)));
        assert!(!bin.contains_point(Vec2::new(1.5, -3.0)));
    }

    #[test]
    fn test_drag_clamped_to_field() {
        let mut bin = Bin::new(0.0, BrickColor::Green);
        bin.set_x(9.0);
        assert_eq!(bin.x, FIELD_HALF_EXTENT);
        bin.nudge(-0.2);
        assert!((bin.x - 3.8).abs() < 1e-6);
    }
}
