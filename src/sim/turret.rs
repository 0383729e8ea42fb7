//! The player's turret

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Projectile;
use crate::consts::*;
use crate::heading;

/// Turret on the left edge of the field.
///
/// `(x, y)` is the top-center of the breech; the barrel pivots around the
/// breech center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Turret {
    pub x: f32,
    pub y: f32,
    /// Aim angle in degrees (0 = straight right)
    pub aim: f32,
    /// Time of the last shot, `None` before the first one
    pub last_fired: Option<f64>,
}

impl Default for Turret {
    fn default() -> Self {
        Self {
            x: TURRET_X,
            y: 0.0,
            aim: 0.0,
            last_fired: None,
        }
    }
}

impl Turret {
    /// Total body length, breech plus barrel
    pub fn reach() -> f32 {
        TURRET_BREECH_LENGTH + TURRET_BARREL_LENGTH
    }

    /// Rotation and firing origin
    pub fn pivot(&self) -> Vec2 {
        Vec2::new(
            self.x - TURRET_BREECH_LENGTH / 2.0,
            self.y - TURRET_BREECH_BREADTH / 2.0,
        )
    }

    /// Where new projectiles appear
    pub fn muzzle(&self) -> Vec2 {
        self.pivot() + heading(self.aim) * Self::reach()
    }

    pub fn adjust_aim(&mut self, delta: f32, limit: f32) {
        self.set_aim(self.aim + delta, limit);
    }

    pub fn set_aim(&mut self, aim: f32, limit: f32) {
        self.aim = aim.clamp(-limit, limit);
    }

    /// Point the barrel at a world position. Ignored if the target sits on
    /// the pivot. Returns true if the aim was updated.
    ///
    /// Measured from the pivot, the point shots are fired along, so an
    /// unclamped aim puts the cursor on the flight line.
    pub fn aim_at(&mut self, target: Vec2, limit: f32) -> bool {
        let d = target - self.pivot();
        if d == Vec2::ZERO {
            return false;
        }
        // Slope angle, so targets behind the turret mirror to the front
        self.set_aim((d.y / d.x).atan().to_degrees(), limit);
        true
    }

    pub fn move_by(&mut self, dy: f32, travel: f32) {
        self.set_y(self.y + dy, travel);
    }

    pub fn set_y(&mut self, y: f32, travel: f32) {
        self.y = y.clamp(-travel, travel);
    }

    /// Pointer hit test against the breech
    pub fn contains_point(&self, p: Vec2) -> bool {
        let half = TURRET_BREECH_LENGTH / 2.0;
        p.x >= self.x - half
            && p.x <= self.x + half
            && p.y <= self.y
            && p.y >= self.y - TURRET_BREECH_BREADTH
    }

    /// True once `cooldown` seconds have passed since the last shot
    pub fn ready(&self, now: f64, cooldown: f64) -> bool {
        self.last_fired.is_none_or(|t| now - t >= cooldown)
    }

    /// Fire if the cooldown allows, recording the shot time
    pub fn try_fire(&mut self, now: f64, cooldown: f64) -> Option<Projectile> {
        if !self.ready(now, cooldown) {
            return None;
        }
        self.last_fired = Some(now);
        Some(Projectile::new(self.muzzle(), self.aim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muzzle_straight_ahead() {
        let turret = Turret::default();
        let muzzle = turret.muzzle();
        // pivot (-3.7, -0.2) plus reach 1.0 to the right
        assert!((muzzle - Vec2::new(-2.7, -0.2)).length() < 1e-5);
    }

    #[test]
    fn test_muzzle_follows_aim() {
        let mut turret = Turret::default();
        turret.set_aim(90.0, 90.0);
        let muzzle = turret.muzzle();
        assert!((muzzle - Vec2::new(-3.7, 0.8)).length() < 1e-5);
    }

    #[test]
    fn test_aim_clamped() {
        let mut turret = Turret::default();
        for _ in 0..30 {
            turret.adjust_aim(5.0, 80.0);
        }
        assert_eq!(turret.aim, 80.0);
        for _ in 0..40 {
            turret.adjust_aim(-5.0, 80.0);
        }
        assert_eq!(turret.aim, -80.0);
    }

    #[test]
    fn test_vertical_travel_clamped() {
        let mut turret = Turret::default();
        for _ in 0..30 {
            turret.move_by(0.2, 3.5);
        }
        assert!((turret.y - 3.5).abs() < 1e-6);
        turret.set_y(-10.0, 3.5);
        assert_eq!(turret.y, -3.5);
    }

    #[test]
    fn test_aim_at_target() {
        let mut turret = Turret::default();
        let target = turret.pivot() + Vec2::new(1.0, 1.0);
        assert!(turret.aim_at(target, 80.0));
        assert!((turret.aim - 45.0).abs() < 1e-4);

        // Straight above the pivot: clamps to the limit
        let above = turret.pivot() + Vec2::new(0.0, 2.0);
        assert!(turret.aim_at(above, 80.0));
        assert_eq!(turret.aim, 80.0);

        assert!(!turret.aim_at(turret.pivot(), 80.0));
    }

    #[test]
    fn test_aimed_shot_passes_through_target() {
        let mut turret = Turret {
            y: 1.3,
            ..Turret::default()
        };
        let target = Vec2::new(1.5, -0.6);
        assert!(turret.aim_at(target, 80.0));

        let shot = turret.try_fire(0.0, 0.5);
        let Some(shot) = shot else {
            panic!("first shot should fire");
        };
        let to_target = target - shot.pos;
        assert!(shot.direction().perp_dot(to_target).abs() < 1e-4);
        assert!(shot.direction().dot(to_target) > 0.0);
    }

    #[test]
    fn test_cooldown() {
        let mut turret = Turret::default();
        assert!(turret.try_fire(1.0, 0.5).is_some());
        assert!(turret.try_fire(1.2, 0.5).is_none());
        assert_eq!(turret.last_fired, Some(1.0));
        let shot = turret.try_fire(1.5, 0.5);
        assert!(shot.is_some_and(|p| !p.spent));
    }

    #[test]
    fn test_contains_point() {
        let turret = Turret::default();
        assert!(turret.contains_point(Vec2::new(-3.5, -0.2)));
        assert!(!turret.contains_point(Vec2::new(-3.5, 0.1)));
        assert!(!turret.contains_point(Vec2::new(-3.0, -0.2)));
    }
}
