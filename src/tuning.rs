//! Data-driven game balance
//!
//! Every constant that shapes the chase lives here so a JSON file can
//! override it. Missing fields fall back to the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Balance constants for the chase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Chaser ===
    /// Chaser velocity at the start of a session (pixels/s)
    pub initial_chaser_velocity: f32,
    /// Upper bound of the chaser velocity (pixels/s)
    pub max_chaser_velocity: f32,
    /// Multiplier applied to the chaser velocity on every level advance
    pub chaser_level_speedup: f32,
    /// Seconds of chaser travel placed between the chaser and the left edge on a new level
    pub chaser_reentry_lag: f32,
    /// Seconds between chaser animation frames
    pub chaser_frame_interval: f64,

    // === Runaway ===
    /// Velocity added by one step gesture (pixels/s)
    pub runaway_step_velocity: f32,
    /// Upper bound of the runaway velocity (pixels/s)
    pub runaway_max_velocity: f32,
    /// Deceleration applied every tick (pixels/s²)
    pub runaway_friction: f32,
    /// Seconds between runaway animation frames
    pub runaway_frame_interval: f64,
    /// Horizontal head start of the runaway in the first level (pixels)
    pub runaway_start_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        let initial_chaser_velocity = 17.0;
        Self {
            initial_chaser_velocity,
            max_chaser_velocity: 40.0,
            chaser_level_speedup: 1.5,
            chaser_reentry_lag: 0.5,
            chaser_frame_interval: 0.1,

            runaway_step_velocity: 6.0,
            runaway_max_velocity: 45.0,
            runaway_friction: 20.0,
            runaway_frame_interval: 0.1,
            // Novice players get three seconds of chaser travel to understand what is going on
            runaway_start_x: 3.0 * initial_chaser_velocity,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Parse tuning from a JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot honor
    pub fn validate(&self) -> Result<(), TuningError> {
        let non_negative = [
            ("initial_chaser_velocity", self.initial_chaser_velocity),
            ("max_chaser_velocity", self.max_chaser_velocity),
            ("chaser_reentry_lag", self.chaser_reentry_lag),
            ("runaway_step_velocity", self.runaway_step_velocity),
            ("runaway_max_velocity", self.runaway_max_velocity),
            ("runaway_friction", self.runaway_friction),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("chaser_frame_interval", self.chaser_frame_interval),
            ("runaway_frame_interval", self.runaway_frame_interval),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(self.chaser_level_speedup >= 1.0 && self.chaser_level_speedup.is_finite()) {
            return Err(TuningError::Invalid(format!(
                "chaser_level_speedup must be at least 1, got {}",
                self.chaser_level_speedup
            )));
        }

        if self.initial_chaser_velocity > self.max_chaser_velocity {
            return Err(TuningError::Invalid(format!(
                "initial_chaser_velocity {} exceeds max_chaser_velocity {}",
                self.initial_chaser_velocity, self.max_chaser_velocity
            )));
        }

        if !self.runaway_start_x.is_finite() {
            return Err(TuningError::Invalid("runaway_start_x must be finite".into()));
        }

        Ok(())
    }
}
