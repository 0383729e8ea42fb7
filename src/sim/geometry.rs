//! Orientation and segment intersection primitives
//!
//! Every collision in the game reduces to "do these two line segments
//! touch?". The test is deliberately boundary-inclusive: touching endpoints
//! and collinear near-misses count as hits.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Signed side of `q` relative to the line through `p1` and `p2`.
///
/// Computes `(y1 - y2)(qx - x1) - (x1 - x2)(qy - y1)`. Zero means collinear;
/// swapping `p1` and `p2` flips the sign.
#[inline]
pub fn orientation(p1: Vec2, p2: Vec2, q: Vec2) -> f32 {
    (p1.y - p2.y) * (q.x - p1.x) - (p1.x - p2.x) * (q.y - p1.y)
}

/// Returns true if segment `ab` and segment `cd` touch or cross.
///
/// No separate collinear-overlap case: collinear segments always pass.
#[inline]
pub fn segments_intersect(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);
    o1 * o2 <= 0.0 && o3 * o4 <= 0.0
}

/// A directed line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Segment starting at `origin` and running `length` along `dir`
    pub fn from_ray(origin: Vec2, dir: Vec2, length: f32) -> Self {
        Self::new(origin, origin + dir * length)
    }

    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect(self.start, self.end, other.start, other.end)
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }
}
