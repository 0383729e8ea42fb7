//! Game state and core simulation types
//!
//! Everything the scheduler mutates lives in one `SimulationState` value.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bin::{Bin, Capture};
use super::geometry::Segment;
use super::mirror::Reflector;
use super::pool::{PoolEntry, RingPool};
use super::turret::Turret;
use crate::consts::*;
use crate::heading;
use crate::tuning::Tuning;

/// Color tag shared by bricks, bins and render records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickColor {
    Red,
    Green,
    Blue,
    Bomb,
    /// Tombstone: the slot is still in the ring but out of play
    #[default]
    Removed,
}

impl BrickColor {
    /// Numeric tag as used by renderers (-1 for removed)
    pub fn tag(self) -> i8 {
        match self {
            BrickColor::Red => 0,
            BrickColor::Green => 1,
            BrickColor::Blue => 2,
            BrickColor::Bomb => 3,
            BrickColor::Removed => -1,
        }
    }

    pub fn from_tag(tag: i8) -> Option<Self> {
        match tag {
            0 => Some(BrickColor::Red),
            1 => Some(BrickColor::Green),
            2 => Some(BrickColor::Blue),
            3 => Some(BrickColor::Bomb),
            -1 => Some(BrickColor::Removed),
            _ => None,
        }
    }

    /// Color for a spawn roll in 0..3. Roll 2 becomes a bomb, so Blue bricks
    /// are never spawned.
    pub fn from_spawn_roll(roll: u32) -> Self {
        match roll {
            0 => BrickColor::Red,
            1 => BrickColor::Green,
            _ => BrickColor::Bomb,
        }
    }

    pub fn is_bomb(self) -> bool {
        self == BrickColor::Bomb
    }
}

/// A falling brick, anchored at the center of its top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: BrickColor,
}

impl Default for Brick {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            color: BrickColor::Removed,
        }
    }
}

impl Brick {
    pub fn new(pos: Vec2, color: BrickColor) -> Self {
        Self {
            pos,
            color,
            ..Default::default()
        }
    }

    /// Y of the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.height
    }

    /// Vertical center line, top to bottom (the brick's hit target)
    pub fn center_line(&self) -> Segment {
        Segment::new(self.pos, Vec2::new(self.pos.x, self.bottom()))
    }

    pub fn tombstone(&mut self) {
        self.color = BrickColor::Removed;
    }
}

impl PoolEntry for Brick {
    fn is_live(&self) -> bool {
        self.color != BrickColor::Removed
    }
}

/// A projectile fired from the turret
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Travel angle in degrees
    pub angle: f32,
    pub width: f32,
    pub length: f32,
    /// Render tag only, never used for gameplay
    pub color: BrickColor,
    /// Tombstone: destroyed a brick or left the field
    pub spent: bool,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            angle: 0.0,
            width: PROJECTILE_WIDTH,
            length: PROJECTILE_LENGTH,
            color: BrickColor::Bomb,
            spent: true,
        }
    }
}

impl Projectile {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            angle,
            spent: false,
            ..Default::default()
        }
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        heading(self.angle)
    }

    /// Forward segment from the current position, one body length long
    pub fn probe(&self) -> Segment {
        Segment::from_ray(self.pos, self.direction(), self.length)
    }

    /// Padded probe used against bricks: starts a tenth of a length behind
    /// the position and ends a tenth past the nose.
    pub fn hit_probe(&self) -> Segment {
        let dir = self.direction();
        Segment::new(
            self.pos - dir * (0.1 * self.length),
            self.pos + dir * (1.1 * self.length),
        )
    }

    pub fn advance(&mut self, step: f32) {
        self.pos += self.direction() * step;
    }
}

impl PoolEntry for Projectile {
    fn is_live(&self) -> bool {
        !self.spent
    }
}

pub type BrickPool = RingPool<Brick, BRICK_CAPACITY>;
pub type ProjectilePool = RingPool<Projectile, PROJECTILE_CAPACITY>;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// A bomb reached a bin; the round is frozen
    GameOver,
}

/// Notable transitions, drained by the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickSpawned { slot: usize, x: f32, color: BrickColor },
    ProjectileFired { slot: usize, angle: f32 },
    ProjectileReflected { mirror: usize, angle: f32 },
    BrickShot { color: BrickColor, scored: bool },
    BrickCaptured { bin: usize, color: BrickColor, outcome: Capture },
    GameOver { score: u64 },
    QuitRequested,
}

/// Wall-clock accumulator timestamps (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timers {
    pub last_descent: f64,
    pub last_spawn: f64,
}

/// Read-only copy of everything a renderer or debugger needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u64,
    pub phase: GamePhase,
    pub descent_speed: f32,
    pub bricks: Vec<Brick>,
    pub projectiles: Vec<Projectile>,
    pub bins: Vec<Bin>,
    pub turret: Turret,
    pub reflectors: Vec<Reflector>,
}

/// Complete simulation state for one round
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub score: u64,
    pub phase: GamePhase,
    /// Shared distance every live brick drops per descent step
    pub descent_speed: f32,
    pub bricks: BrickPool,
    pub projectiles: ProjectilePool,
    pub reflectors: [Reflector; 3],
    pub bins: [Bin; 2],
    pub turret: Turret,
    pub timers: Timers,
    /// Host should close down after this frame
    pub quit_requested: bool,
    /// Scheduler invocations so far
    pub frames: u64,
    pub(crate) events: Vec<GameEvent>,
}

impl SimulationState {
    /// Start a round at time `now` with default tuning
    pub fn new(seed: u64, now: f64) -> Self {
        Self::with_tuning(seed, Tuning::default(), now)
    }

    pub fn with_tuning(seed: u64, mut tuning: Tuning, now: f64) -> Self {
        log::info!("Starting round (seed {seed})");
        tuning.sanitize();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            descent_speed: tuning.descent_speed,
            tuning,
            score: 0,
            phase: GamePhase::Playing,
            bricks: BrickPool::new(),
            projectiles: ProjectilePool::new(),
            reflectors: Reflector::default_set(),
            bins: Bin::default_pair(),
            turret: Turret::default(),
            timers: Timers {
                last_descent: now,
                last_spawn: now,
            },
            quit_requested: false,
            frames: 0,
            events: Vec::new(),
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Live bricks, oldest first
    pub fn bricks(&self) -> impl Iterator<Item = &Brick> + '_ {
        self.bricks.live()
    }

    /// Live projectiles, oldest first
    pub fn projectiles(&self) -> impl Iterator<Item = &Projectile> + '_ {
        self.projectiles.live()
    }

    pub fn bins(&self) -> &[Bin; 2] {
        &self.bins
    }

    pub fn turret(&self) -> &Turret {
        &self.turret
    }

    pub fn reflectors(&self) -> &[Reflector; 3] {
        &self.reflectors
    }

    /// Spawn a brick at the top of the field in a random lateral slot
    pub fn spawn_brick(&mut self) -> usize {
        let k = self.rng.random_range(0..BRICK_SPAWN_SLOTS);
        let x = (k as f32 - (BRICK_SPAWN_SLOTS / 2) as f32) / BRICK_SPAWN_GRANULARITY;
        let color = BrickColor::from_spawn_roll(self.rng.random_range(0..3));
        self.spawn_brick_at(Vec2::new(x, BRICK_SPAWN_Y), color)
    }

    /// Spawn a brick with an explicit position and color
    pub fn spawn_brick_at(&mut self, pos: Vec2, color: BrickColor) -> usize {
        let slot = self.bricks.spawn(Brick::new(pos, color));
        log::debug!("brick {color:?} spawned at x={:.1} (slot {slot})", pos.x);
        self.events.push(GameEvent::BrickSpawned {
            slot,
            x: pos.x,
            color,
        });
        slot
    }

    /// Fire from the turret if the round is live and the cooldown has passed.
    /// Returns the projectile slot.
    pub fn fire(&mut self, now: f64) -> Option<usize> {
        if self.is_game_over() {
            return None;
        }
        let projectile = self.turret.try_fire(now, self.tuning.fire_cooldown)?;
        let slot = self.projectiles.spawn(projectile);
        log::debug!("fired at {:.0} deg (slot {slot})", projectile.angle);
        self.events.push(GameEvent::ProjectileFired {
            slot,
            angle: projectile.angle,
        });
        Some(slot)
    }

    /// Change the shared descent speed, clamped to the tuning range
    pub fn adjust_descent_speed(&mut self, delta: f32) {
        self.descent_speed = self.tuning.clamp_descent_speed(self.descent_speed + delta);
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            phase: self.phase,
            descent_speed: self.descent_speed,
            bricks: self.bricks.live().copied().collect(),
            projectiles: self.projectiles.live().copied().collect(),
            bins: self.bins.to_vec(),
            turret: self.turret,
            reflectors: self.reflectors.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tags_roundtrip() {
        for color in [
            BrickColor::Red,
            BrickColor::Green,
            BrickColor::Blue,
            BrickColor::Bomb,
            BrickColor::Removed,
        ] {
            assert_eq!(BrickColor::from_tag(color.tag()), Some(color));
        }
        assert_eq!(BrickColor::from_tag(7), None);
    }

    #[test]
    fn test_spawn_roll_never_blue() {
        assert_eq!(BrickColor::from_spawn_roll(0), BrickColor::Red);
        assert_eq!(BrickColor::from_spawn_roll(1), BrickColor::Green);
        assert_eq!(BrickColor::from_spawn_roll(2), BrickColor::Bomb);
    }

    #[test]
    fn test_spawned_bricks_use_lateral_slots() {
        let mut state = SimulationState::new(7, 0.0);
        for _ in 0..200 {
            state.spawn_brick();
        }
        assert_eq!(state.bricks.count(), BRICK_CAPACITY);
        for brick in state.bricks.iter() {
            assert_eq!(brick.pos.y, BRICK_SPAWN_Y);
            assert!(brick.pos.x >= -2.0 && brick.pos.x <= 2.0);
            let k = brick.pos.x * BRICK_SPAWN_GRANULARITY + 5.0;
            assert!((k - k.round()).abs() < 1e-4);
            assert_ne!(brick.color, BrickColor::Blue);
            assert_ne!(brick.color, BrickColor::Removed);
        }
    }

    #[test]
    fn test_same_seed_same_bricks() {
        let mut a = SimulationState::new(42, 0.0);
        let mut b = SimulationState::new(42, 0.0);
        for _ in 0..20 {
            a.spawn_brick();
            b.spawn_brick();
        }
        let a: Vec<Brick> = a.bricks.iter().copied().collect();
        let b: Vec<Brick> = b.bricks.iter().copied().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_brick_center_line() {
        let brick = Brick::new(Vec2::new(1.0, 2.0), BrickColor::Red);
        let line = brick.center_line();
        assert_eq!(line.start, Vec2::new(1.0, 2.0));
        assert!((line.end.y - 1.6).abs() < 1e-6);
    }

    #[test]
    fn test_projectile_hit_probe_padding() {
        let p = Projectile::new(Vec2::ZERO, 0.0);
        let probe = p.hit_probe();
        assert!((probe.start.x + 0.08).abs() < 1e-5);
        assert!((probe.end.x - 0.88).abs() < 1e-5);
    }

    #[test]
    fn test_descent_speed_clamped() {
        let mut state = SimulationState::new(1, 0.0);
        for _ in 0..20 {
            state.adjust_descent_speed(0.005);
        }
        assert!((state.descent_speed - 0.05).abs() < 1e-6);
        for _ in 0..20 {
            state.adjust_descent_speed(-0.005);
        }
        assert!((state.descent_speed - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_inverted_tuning_range_repaired() {
        let tuning = Tuning {
            descent_speed_min: 0.05,
            descent_speed_max: 0.01,
            descent_speed: 0.3,
            ..Tuning::default()
        };
        let mut state = SimulationState::with_tuning(1, tuning, 0.0);
        assert!(state.tuning.descent_speed_min <= state.tuning.descent_speed_max);
        assert!((state.descent_speed - 0.05).abs() < 1e-6);
        state.adjust_descent_speed(-1.0);
        assert!((state.descent_speed - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut state = SimulationState::new(1, 0.0);
        assert!(state.fire(0.0).is_some());
        assert!(state.fire(0.3).is_none());
        assert_eq!(state.projectiles.count(), 1);
        assert!(state.fire(0.5).is_some());
        assert_eq!(state.projectiles.count(), 2);
    }

    #[test]
    fn test_no_fire_after_game_over() {
        let mut state = SimulationState::new(1, 0.0);
        state.phase = GamePhase::GameOver;
        assert!(state.fire(10.0).is_none());
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_snapshot_skips_tombstones() {
        let mut state = SimulationState::new(1, 0.0);
        state.spawn_brick_at(Vec2::new(0.0, 4.0), BrickColor::Red);
        state.spawn_brick_at(Vec2::new(0.4, 4.0), BrickColor::Green);
        if let Some(first) = state.bricks.iter_mut().next() {
            first.tombstone();
        }
        let snapshot = state.snapshot();
        assert_eq!(snapshot.bricks.len(), 1);
        assert_eq!(snapshot.bricks[0].color, BrickColor::Green);
        assert_eq!(snapshot.reflectors.len(), 3);
        assert_eq!(snapshot.bins.len(), 2);
    }
}
