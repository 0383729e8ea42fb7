//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - Fixed-capacity ring pools, tombstone then recycle at the head
//! - Boundary-inclusive segment intersection for every collision
//! - Wall-clock accumulators for descent and spawning
//! - No rendering or platform dependencies beyond the input command type

pub mod bin;
pub mod geometry;
pub mod mirror;
pub mod pool;
pub mod state;
pub mod tick;
pub mod turret;

pub use bin::{Bin, Capture};
pub use geometry::{Segment, orientation, segments_intersect};
pub use mirror::{Reflector, reflect_angle};
pub use pool::{PoolEntry, RingPool};
pub use state::{
    Brick, BrickColor, BrickPool, GameEvent, GamePhase, Projectile, ProjectilePool,
    SimulationState, Snapshot, Timers,
};
pub use tick::{TickInput, tick};
pub use turret::Turret;
