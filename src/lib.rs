//! Mirror Bricks - turret vs falling bricks, with mirrors and color bins
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (pools, collisions, scoring, timers)
//! - `platform`: Clock source and semantic input translation
//! - `renderer`: Read-only draw snapshots for an external renderer
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Idle/demo controller

pub mod autopilot;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Pool capacities (fixed ring sizes)
    pub const BRICK_CAPACITY: usize = 100;
    pub const PROJECTILE_CAPACITY: usize = 10;

    /// The playfield is the square [-FIELD_HALF_EXTENT, FIELD_HALF_EXTENT]²
    pub const FIELD_HALF_EXTENT: f32 = 4.0;

    /// Brick geometry (full width, height measured down from the top edge)
    pub const BRICK_WIDTH: f32 = 0.2;
    pub const BRICK_HEIGHT: f32 = 0.4;
    /// Bricks appear at the top edge of the field
    pub const BRICK_SPAWN_Y: f32 = 4.0;
    /// Lateral spawn slots: x = (k - 5) / 2.5 for k in 0..=10
    pub const BRICK_SPAWN_SLOTS: u32 = 11;
    pub const BRICK_SPAWN_GRANULARITY: f32 = 2.5;

    /// Turret body: breech (square) and barrel
    pub const TURRET_BREECH_LENGTH: f32 = 0.4;
    pub const TURRET_BREECH_BREADTH: f32 = 0.4;
    pub const TURRET_BARREL_LENGTH: f32 = 0.6;
    pub const TURRET_BARREL_BREADTH: f32 = 0.2;
    /// Joint radii (muzzle cap and breech hub)
    pub const TURRET_MUZZLE_RADIUS: f32 = 0.05;
    pub const TURRET_HUB_RADIUS: f32 = 0.25;
    pub const TURRET_X: f32 = -3.5;

    /// Projectile geometry
    pub const PROJECTILE_WIDTH: f32 = TURRET_BARREL_BREADTH / 3.0;
    pub const PROJECTILE_LENGTH: f32 = 0.8;

    /// Mirror geometry
    pub const MIRROR_LENGTH: f32 = 1.2;
    pub const MIRROR_THICKNESS: f32 = 0.05;

    /// Bin geometry
    pub const BIN_WIDTH: f32 = 0.8;
    pub const BIN_HEIGHT: f32 = 1.0;
    pub const BIN_Y: f32 = -2.5;
}

/// Unit direction for an angle given in degrees
#[inline]
pub fn heading(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Returns true if the point lies inside the playfield (edges included)
#[inline]
pub fn in_field(p: Vec2) -> bool {
    p.x.abs() <= consts::FIELD_HALF_EXTENT && p.y.abs() <= consts::FIELD_HALF_EXTENT
}
