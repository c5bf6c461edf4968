//! Sequencer configuration.

use serde::{Deserialize, Serialize};

use crate::error::SignError;

/// Default joint step applied per tick (radians for rotations).
pub const DEFAULT_ANIMATION_SPEED: f32 = 0.1;
/// Default rest between two signs, in milliseconds.
pub const DEFAULT_PAUSE_TIME_MS: f32 = 800.0;

/// Bounds used by the lesson page sliders.
pub const ANIMATION_SPEED_RANGE: (f32, f32) = (0.05, 0.5);
pub const ANIMATION_SPEED_STEP: f32 = 0.01;
pub const PAUSE_TIME_RANGE_MS: (f32, f32) = (0.0, 2000.0);
pub const PAUSE_TIME_STEP_MS: f32 = 100.0;

/// Live-tunable stepping parameters. Changes apply on the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Joint value increment per tick.
    #[serde(default = "default_animation_speed")]
    pub animation_speed: f32,
    /// Rest inserted after each batch completes.
    #[serde(default = "default_pause_time_ms")]
    pub pause_time_ms: f32,
}

fn default_animation_speed() -> f32 {
    DEFAULT_ANIMATION_SPEED
}

fn default_pause_time_ms() -> f32 {
    DEFAULT_PAUSE_TIME_MS
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            animation_speed: DEFAULT_ANIMATION_SPEED,
            pause_time_ms: DEFAULT_PAUSE_TIME_MS,
        }
    }
}

impl SequencerConfig {
    pub fn new(animation_speed: f32, pause_time_ms: f32) -> Self {
        Self {
            animation_speed,
            pause_time_ms,
        }
    }

    /// Reject values the stepping loop cannot make progress with.
    /// Values outside the slider ranges are accepted.
    pub fn validate(&self) -> Result<(), SignError> {
        if !self.animation_speed.is_finite() || self.animation_speed <= 0.0 {
            return Err(SignError::invalid_config(format!(
                "animation_speed must be a positive number, got {}",
                self.animation_speed
            )));
        }
        if !self.pause_time_ms.is_finite() || self.pause_time_ms < 0.0 {
            return Err(SignError::invalid_config(format!(
                "pause_time_ms must be zero or positive, got {}",
                self.pause_time_ms
            )));
        }
        Ok(())
    }
}
