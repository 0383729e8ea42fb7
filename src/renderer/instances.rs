//! Per-entity instance records

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::digits::score_instances;
use crate::consts::*;
use crate::heading;
use crate::sim::{BrickColor, SimulationState};

/// Shape a renderer should draw for an instance
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect = 0,
    Circle = 1,
}

/// One oriented rectangle or circle, ready for an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub center: [f32; 2],
    /// Width and height (rects) or diameter twice (circles)
    pub size: [f32; 2],
    /// Rotation in degrees, counter-clockwise
    pub angle: f32,
    pub kind: u32,
    pub color: [f32; 4],
}

impl Instance {
    pub fn rect(center: Vec2, size: Vec2, angle: f32, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            size: size.to_array(),
            angle,
            kind: ShapeKind::Rect as u32,
            color,
        }
    }

    pub fn circle(center: Vec2, radius: f32, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            size: [radius * 2.0; 2],
            angle: 0.0,
            kind: ShapeKind::Circle as u32,
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    /// Bombs, projectiles, mirrors and the turret share the neutral tag
    pub const NEUTRAL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

/// Render color for a tag. Removed slots are never drawn.
pub fn tag_color(color: BrickColor) -> Option<[f32; 4]> {
    match color {
        BrickColor::Red => Some(colors::RED),
        BrickColor::Green => Some(colors::GREEN),
        BrickColor::Blue => Some(colors::BLUE),
        BrickColor::Bomb => Some(colors::NEUTRAL),
        BrickColor::Removed => None,
    }
}

/// Instances for every drawable entity, back to front
pub fn build_instances(state: &SimulationState) -> Vec<Instance> {
    let mut out = Vec::with_capacity(
        state.bricks.count() + state.projectiles.count() + state.reflectors.len() + 24,
    );

    for mirror in state.reflectors() {
        out.push(Instance::rect(
            mirror.center,
            Vec2::new(mirror.length, mirror.thickness),
            mirror.angle,
            colors::NEUTRAL,
        ));
    }

    for bin in state.bins() {
        let color = tag_color(bin.color).unwrap_or(colors::NEUTRAL);
        out.push(Instance::rect(
            Vec2::new(bin.x, bin.y - bin.height / 2.0),
            Vec2::new(bin.width, bin.height),
            0.0,
            color,
        ));
        // Rims at the mouth and base
        out.push(Instance::circle(Vec2::new(bin.x, bin.y), bin.width / 2.0, color));
        out.push(Instance::circle(Vec2::new(bin.x, bin.bottom()), bin.width / 2.0, color));
    }

    for brick in state.bricks() {
        if let Some(color) = tag_color(brick.color) {
            out.push(Instance::rect(
                Vec2::new(brick.pos.x, brick.pos.y - brick.height / 2.0),
                Vec2::new(brick.width, brick.height),
                0.0,
                color,
            ));
        }
    }

    for projectile in state.projectiles() {
        let mid = projectile.pos + projectile.direction() * (projectile.length / 2.0);
        out.push(Instance::rect(
            mid,
            Vec2::new(projectile.length, projectile.width),
            projectile.angle,
            colors::NEUTRAL,
        ));
    }

    let turret = state.turret();
    let pivot = turret.pivot();
    let dir = heading(turret.aim);
    out.push(Instance::rect(
        pivot + dir * (TURRET_BREECH_LENGTH / 2.0),
        Vec2::new(TURRET_BREECH_LENGTH, TURRET_BREECH_BREADTH),
        turret.aim,
        colors::NEUTRAL,
    ));
    out.push(Instance::rect(
        pivot + dir * (TURRET_BREECH_LENGTH + TURRET_BARREL_LENGTH / 2.0),
        Vec2::new(TURRET_BARREL_LENGTH, TURRET_BARREL_BREADTH),
        turret.aim,
        colors::NEUTRAL,
    ));
    out.push(Instance::circle(pivot, TURRET_HUB_RADIUS, colors::NEUTRAL));
    out.push(Instance::circle(turret.muzzle(), TURRET_MUZZLE_RADIUS, colors::NEUTRAL));

    out.extend(score_instances(state.score()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Instance>(), 40);
        let bytes = bytemuck::cast_slice::<Instance, u8>(&[Instance::zeroed()]).len();
        assert_eq!(bytes, 40);
    }

    #[test]
    fn test_fresh_round_instances() {
        let state = SimulationState::new(3, 0.0);
        let instances = build_instances(&state);
        // 3 mirrors, 2 bins x 3 parts, 4 turret parts, a six-segment 0
        assert_eq!(instances.len(), 19);
    }

    #[test]
    fn test_tombstoned_bricks_not_drawn() {
        let mut state = SimulationState::new(3, 0.0);
        state.spawn_brick_at(Vec2::new(0.0, 4.0), BrickColor::Red);
        state.spawn_brick_at(Vec2::new(0.4, 4.0), BrickColor::Bomb);
        assert_eq!(build_instances(&state).len(), 21);

        if let Some(brick) = state.bricks.iter_mut().next() {
            brick.tombstone();
        }
        let instances = build_instances(&state);
        assert_eq!(instances.len(), 20);
        assert!(!instances.iter().any(|i| i.color == colors::RED && i.size == [0.2, 0.4]));
    }

    #[test]
    fn test_removed_has_no_color() {
        assert!(tag_color(BrickColor::Removed).is_none());
        assert_eq!(tag_color(BrickColor::Bomb), Some(colors::NEUTRAL));
    }
}
