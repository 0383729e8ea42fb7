//! Demo-mode player
//!
//! Plans the same commands a human would send: shoot bombs down before they
//! land, and slide each bin under the lowest brick of its color.

use glam::Vec2;

use crate::consts::{BIN_WIDTH, BRICK_WIDTH, FIELD_HALF_EXTENT};
use crate::platform::InputCommand;
use crate::sim::{Brick, SimulationState};

/// Simple rule-based controller for headless runs and attract mode
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Bombs below this height make bins step aside
    pub danger_height: f32,
    /// Bins closer than this to their target stay put
    pub dead_zone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            danger_height: 0.0,
            dead_zone: 0.05,
        }
    }
}

fn lowest<'a>(bricks: impl Iterator<Item = &'a Brick>) -> Option<&'a Brick> {
    bricks.min_by(|a, b| {
        a.pos
            .y
            .partial_cmp(&b.pos.y)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

impl Autopilot {
    /// Commands for the coming frame. Nothing once the round is over.
    pub fn plan(&self, state: &SimulationState, now: f64) -> Vec<InputCommand> {
        let mut commands = Vec::new();
        if state.is_game_over() {
            return commands;
        }

        let bombs = || state.bricks.live().filter(|b| b.color.is_bomb());

        // Shoot the bomb closest to the bins, aiming at its middle
        if state.turret.ready(now, state.tuning.fire_cooldown) {
            if let Some(bomb) = lowest(bombs()) {
                let target = Vec2::new(bomb.pos.x, bomb.pos.y - bomb.height / 2.0);
                commands.push(InputCommand::FireAt {
                    x: target.x,
                    y: target.y,
                });
            }
        }

        let reach = (BIN_WIDTH + BRICK_WIDTH) / 2.0;
        for (index, bin) in state.bins.iter().enumerate() {
            let Some(brick) = lowest(state.bricks.live().filter(|b| b.color == bin.color)) else {
                continue;
            };
            let mut x = brick.pos.x;

            // Step away from a low bomb falling into the same column
            if let Some(bomb) = lowest(bombs().filter(|b| b.pos.y < self.danger_height)) {
                if (bomb.pos.x - x).abs() < reach {
                    let away = if bomb.pos.x > x { -1.0 } else { 1.0 };
                    x = bomb.pos.x + away * reach;
                }
            }

            let x = x.clamp(-FIELD_HALF_EXTENT, FIELD_HALF_EXTENT);
            if (x - bin.x).abs() > self.dead_zone {
                commands.push(InputCommand::DragBin { bin: index, x });
            }
        }

        commands
    }
}
