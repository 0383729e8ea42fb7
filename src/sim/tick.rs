//! Per-frame simulation step
//!
//! Core game loop. Collision, advance and reflection run once per call; brick
//! descent and spawning are driven by wall-clock accumulators, so the host
//! must call `tick` once per rendered frame.

use super::bin::Capture;
use super::state::{GameEvent, GamePhase, SimulationState};
use crate::consts::FIELD_HALF_EXTENT;
use crate::in_field;
use crate::platform::input::InputCommand;

/// Input commands gathered since the previous frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<InputCommand>,
}

impl TickInput {
    pub fn new(commands: Vec<InputCommand>) -> Self {
        Self { commands }
    }
}

/// Advance the simulation by one frame at wall time `now` (seconds)
pub fn tick(state: &mut SimulationState, input: &TickInput, now: f64) {
    for &command in &input.commands {
        command.apply(state, now);
    }

    // Round is frozen once a bomb got through
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.frames += 1;

    resolve_projectiles(state);
    resolve_reflections(state);
    resolve_bins(state);

    if state.phase == GamePhase::GameOver {
        log::info!("Game over! Final score: {}", state.score);
        state.events.push(GameEvent::GameOver { score: state.score });
        return;
    }

    if now - state.timers.last_descent >= state.tuning.descent_interval {
        let speed = state.descent_speed;
        for brick in state.bricks.live_mut() {
            brick.pos.y -= speed;
        }
        state.timers.last_descent = now;
    }

    if now - state.timers.last_spawn >= state.tuning.spawn_interval {
        state.spawn_brick();
        state.timers.last_spawn = now;
    }

    housekeeping(state);
}

/// Projectiles against bricks, then advance every live projectile
fn resolve_projectiles(state: &mut SimulationState) {
    let step = state.tuning.projectile_step;
    for projectile in state.projectiles.live_mut() {
        let probe = projectile.hit_probe();
        for brick in state.bricks.live_mut() {
            if !probe.intersects(&brick.center_line()) {
                continue;
            }
            // Shooting a bomb scores; catching one ends the round
            let color = brick.color;
            let scored = color.is_bomb();
            if scored {
                state.score += 1;
            }
            log::debug!("shot {color:?} brick at ({:.2}, {:.2})", brick.pos.x, brick.pos.y);
            brick.tombstone();
            projectile.spent = true;
            state.events.push(GameEvent::BrickShot { color, scored });
            break;
        }
        if !projectile.spent {
            projectile.advance(step);
        }
    }
}

/// Every mirror against every live projectile, one test per pair
fn resolve_reflections(state: &mut SimulationState) {
    for (index, mirror) in state.reflectors.iter().enumerate() {
        for projectile in state.projectiles.live_mut() {
            if mirror.deflect(projectile) {
                state.events.push(GameEvent::ProjectileReflected {
                    mirror: index,
                    angle: projectile.angle,
                });
            }
        }
    }
}

/// Each bin against all live bricks. A caught bomb ends the pass on the spot.
fn resolve_bins(state: &mut SimulationState) {
    for (index, bin) in state.bins.iter().enumerate() {
        for brick in state.bricks.live_mut() {
            if !bin.captures(brick) {
                continue;
            }
            let color = brick.color;
            let outcome = bin.outcome(color);
            match outcome {
                Capture::Scored => state.score += 1,
                Capture::Wasted => {}
                Capture::Bomb => state.phase = GamePhase::GameOver,
            }
            log::debug!("bin {index} caught {color:?}: {outcome:?}");
            brick.tombstone();
            state.events.push(GameEvent::BrickCaptured {
                bin: index,
                color,
                outcome,
            });
            if outcome == Capture::Bomb {
                return;
            }
        }
    }
}

/// Tombstone anything that left the field, then reclaim dead heads
fn housekeeping(state: &mut SimulationState) {
    for projectile in state.projectiles.live_mut() {
        if !in_field(projectile.pos) {
            projectile.spent = true;
        }
    }
    for brick in state.bricks.live_mut() {
        if brick.pos.y > FIELD_HALF_EXTENT || brick.pos.y < -FIELD_HALF_EXTENT {
            brick.tombstone();
        }
    }
    state.projectiles.recycle_dead_heads();
    state.bricks.recycle_dead_heads();
}
