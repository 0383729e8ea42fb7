//! Data-driven game balance
//!
//! Timer thresholds, control step sizes and clamps. Everything here can be
//! overridden from a JSON file; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

/// Balance values consumed by the simulation and input translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds between brick descent steps
    pub descent_interval: f64,
    /// Seconds between brick spawns (not player adjustable)
    pub spawn_interval: f64,
    /// Minimum seconds between two shots
    pub fire_cooldown: f64,

    /// Distance a projectile travels per frame
    pub projectile_step: f32,

    /// Descent speed (distance per descent step) and its adjustable range
    pub descent_speed: f32,
    pub descent_speed_min: f32,
    pub descent_speed_max: f32,
    pub descent_speed_step: f32,

    /// Turret aim step and symmetric limit (degrees)
    pub aim_step: f32,
    pub aim_limit: f32,
    /// Turret vertical step and symmetric travel limit
    pub turret_step: f32,
    pub turret_travel: f32,

    /// Keyboard bin nudge distance
    pub bin_nudge: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            descent_interval: 0.01,
            spawn_interval: 1.0,
            fire_cooldown: 0.5,

            projectile_step: 0.15,

            descent_speed: 0.01,
            descent_speed_min: 0.01,
            descent_speed_max: 0.05,
            descent_speed_step: 0.005,

            aim_step: 5.0,
            aim_limit: 80.0,
            turret_step: 0.2,
            turret_travel: 3.5,

            bin_nudge: 0.2,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut tuning: Self = serde_json::from_str(json)?;
        tuning.sanitize();
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starter file)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp a descent speed into the adjustable range
    pub fn clamp_descent_speed(&self, speed: f32) -> f32 {
        speed.clamp(self.descent_speed_min, self.descent_speed_max)
    }

    /// Keep ranges well-formed and the starting speed inside its range
    pub fn sanitize(&mut self) {
        if self.descent_speed_min > self.descent_speed_max {
            log::warn!(
                "descent speed range inverted ({} > {}), swapping",
                self.descent_speed_min,
                self.descent_speed_max
            );
            std::mem::swap(&mut self.descent_speed_min, &mut self.descent_speed_max);
        }
        self.descent_speed = self.clamp_descent_speed(self.descent_speed);
        self.aim_limit = self.aim_limit.abs();
        self.turret_travel = self.turret_travel.abs();
    }
}
