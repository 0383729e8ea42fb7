//! Static mirrors that redirect projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Segment;
use super::state::Projectile;
use crate::consts::{MIRROR_LENGTH, MIRROR_THICKNESS};
use crate::heading;

/// Reflect a travel angle off a mirror line (both in degrees)
#[inline]
pub fn reflect_angle(mirror_angle: f32, angle: f32) -> f32 {
    2.0 * mirror_angle - angle
}

/// A fixed, oriented mirror segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reflector {
    pub center: Vec2,
    /// Orientation in degrees
    pub angle: f32,
    pub length: f32,
    pub thickness: f32,
}

impl Reflector {
    pub fn new(center: Vec2, angle: f32) -> Self {
        Self {
            center,
            angle,
            length: MIRROR_LENGTH,
            thickness: MIRROR_THICKNESS,
        }
    }

    /// The three mirrors on the right side of the field
    pub fn default_set() -> [Reflector; 3] {
        [
            Reflector::new(Vec2::new(3.0, -1.5), -135.0),
            Reflector::new(Vec2::new(3.0, 1.5), 135.0),
            Reflector::new(Vec2::new(3.5, 0.0), 90.0),
        ]
    }

    /// `center ∓ (length/2)·(cos θ, sin θ)`
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        let half = heading(self.angle) * (self.length / 2.0);
        (self.center - half, self.center + half)
    }

    pub fn segment(&self) -> Segment {
        let (p1, p2) = self.endpoints();
        Segment::new(p1, p2)
    }

    /// Bounce a projectile whose forward probe touches this mirror.
    ///
    /// The probe is taken along the old angle; on a hit the angle is
    /// reflected first, then the projectile jumps to the probe's far end.
    /// Returns true if the projectile was deflected.
    pub fn deflect(&self, projectile: &mut Projectile) -> bool {
        let probe = projectile.probe();
        if !probe.intersects(&self.segment()) {
            return false;
        }
        projectile.angle = reflect_angle(self.angle, projectile.angle);
        projectile.pos = probe.end;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_vertical_mirror() {
        let mirror = Reflector::new(Vec2::new(3.5, 0.0), 90.0);
        let (p1, p2) = mirror.endpoints();
        assert!((p1 - Vec2::new(3.5, -0.6)).length() < 1e-5);
        assert!((p2 - Vec2::new(3.5, 0.6)).length() < 1e-5);
    }

    #[test]
    fn test_reflect_twice_restores_angle() {
        for mirror in [-135.0, 135.0, 90.0, 12.5] {
            for angle in [-80.0, -15.0, 0.0, 33.0, 80.0] {
                let back = reflect_angle(mirror, reflect_angle(mirror, angle));
                assert!((back - angle).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_deflect_head_on() {
        let mirror = Reflector::new(Vec2::new(3.5, 0.0), 90.0);
        let mut projectile = Projectile::new(Vec2::new(2.8, 0.0), 0.0);

        assert!(mirror.deflect(&mut projectile));
        assert!((projectile.angle - 180.0).abs() < 1e-5);
        // Snapped to the far end of the old forward probe
        assert!((projectile.pos - Vec2::new(3.6, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_deflect_out_of_reach() {
        let mirror = Reflector::new(Vec2::new(3.5, 0.0), 90.0);
        let mut projectile = Projectile::new(Vec2::new(2.5, 0.0), 0.0);

        assert!(!mirror.deflect(&mut projectile));
        assert_eq!(projectile.angle, 0.0);
        assert_eq!(projectile.pos, Vec2::new(2.5, 0.0));
    }

    #[test]
    fn test_diagonal_mirror_turns_upward() {
        // The lower mirror runs SW-NE; a shot travelling east leaves heading north
        let mirror = Reflector::new(Vec2::new(3.0, -1.5), -135.0);
        let mut projectile = Projectile::new(Vec2::new(2.5, -1.5), 0.0);

        assert!(mirror.deflect(&mut projectile));
        let dir = projectile.direction();
        assert!(dir.x.abs() < 1e-4);
        assert!((dir.y - 1.0).abs() < 1e-4);
    }
}
