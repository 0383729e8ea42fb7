//! Semantic input commands
//!
//! Hosts translate their key and button events into `InputCommand`s and queue
//! them on the next `TickInput`. Pointer drags go through `Pointer`, which
//! decides whether the cursor is moving a bin, moving the turret, or aiming.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::FIELD_HALF_EXTENT;
use crate::sim::{GameEvent, SimulationState};

/// One player action, already stripped of any device detail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputCommand {
    /// Rotate the barrel counter-clockwise by one aim step
    AimUp,
    AimDown,
    /// Move the turret by one vertical step
    TurretUp,
    TurretDown,
    /// Change the shared brick descent speed by one step
    SpeedUp,
    SpeedDown,
    /// Keyboard nudge of a bin by one step, rightwards or leftwards
    NudgeBin { bin: usize, right: bool },
    /// Pointer drag of a bin to an absolute x
    DragBin { bin: usize, x: f32 },
    /// Pointer drag of the turret to an absolute y
    DragTurret { y: f32 },
    /// Fire along the current aim
    Fire,
    /// Aim at a world point and fire, only once the cooldown has passed
    FireAt { x: f32, y: f32 },
    Quit,
}

impl InputCommand {
    /// Apply to the state. Out-of-range values are clamped, never rejected.
    pub fn apply(self, state: &mut SimulationState, now: f64) {
        let limit = state.tuning.aim_limit;
        let travel = state.tuning.turret_travel;
        let nudge = state.tuning.bin_nudge;
        match self {
            InputCommand::AimUp => state.turret.adjust_aim(state.tuning.aim_step, limit),
            InputCommand::AimDown => state.turret.adjust_aim(-state.tuning.aim_step, limit),
            InputCommand::TurretUp => state.turret.move_by(state.tuning.turret_step, travel),
            InputCommand::TurretDown => state.turret.move_by(-state.tuning.turret_step, travel),
            InputCommand::SpeedUp => state.adjust_descent_speed(state.tuning.descent_speed_step),
            InputCommand::SpeedDown => {
                state.adjust_descent_speed(-state.tuning.descent_speed_step)
            }
            InputCommand::NudgeBin { bin, right } => match state.bins.get_mut(bin) {
                Some(b) => b.nudge(if right { nudge } else { -nudge }),
                None => log::warn!("nudge for unknown bin {bin}"),
            },
            InputCommand::DragBin { bin, x } => match state.bins.get_mut(bin) {
                Some(b) => b.set_x(x),
                None => log::warn!("drag for unknown bin {bin}"),
            },
            InputCommand::DragTurret { y } => state.turret.set_y(y, travel),
            InputCommand::Fire => {
                state.fire(now);
            }
            InputCommand::FireAt { x, y } => {
                if !state.is_game_over() && state.turret.ready(now, state.tuning.fire_cooldown) {
                    state.turret.aim_at(Vec2::new(x, y), limit);
                    state.fire(now);
                }
            }
            InputCommand::Quit => {
                log::info!("Quit requested");
                state.quit_requested = true;
                state.events.push(GameEvent::QuitRequested);
            }
        }
    }
}

/// What a pointer press landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grab {
    Bin(usize),
    Turret,
}

/// Tracks one pointer between press and release
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    pressed: bool,
    grab: Option<Grab>,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press at a world position. Bins are picked before the turret, lower
    /// bin index first.
    pub fn press(&mut self, at: Vec2, state: &SimulationState) {
        self.pressed = true;
        self.grab = state
            .bins
            .iter()
            .position(|bin| bin.contains_point(at))
            .map(Grab::Bin)
            .or_else(|| state.turret.contains_point(at).then_some(Grab::Turret));
    }

    pub fn release(&mut self) {
        self.pressed = false;
        self.grab = None;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn grabbed(&self) -> Option<Grab> {
        self.grab
    }

    /// Command for the cursor position while the button is held
    pub fn hold(&self, at: Vec2) -> Option<InputCommand> {
        if !self.pressed {
            return None;
        }
        Some(match self.grab {
            Some(Grab::Bin(bin)) => InputCommand::DragBin { bin, x: at.x },
            Some(Grab::Turret) => InputCommand::DragTurret { y: at.y },
            None => InputCommand::FireAt { x: at.x, y: at.y },
        })
    }
}

/// Map a framebuffer pixel (origin top-left, y down) into field coordinates
pub fn screen_to_world(px: f64, py: f64, width: u32, height: u32) -> Vec2 {
    let span = 2.0 * FIELD_HALF_EXTENT as f64;
    let w = width.max(1) as f64;
    let h = height.max(1) as f64;
    let x = span * ((px - w / 2.0) / w);
    let y = -span * ((py - h / 2.0) / h);
    Vec2::new(x as f32, y as f32)
}
