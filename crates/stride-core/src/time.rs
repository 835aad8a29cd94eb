//! Frame time for the simulation loop
//!
//! The locomotion integrator never clamps long frames itself; the host feeds
//! raw frame deltas through [`GameTime`] and ticks with the clamped result.

use serde::{Deserialize, Serialize};

/// Configuration for game time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// How many in-game seconds pass per real second
    pub time_scale: f32,
    /// Maximum delta time to keep integration stable on long frames
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_delta_time: 0.25,
        }
    }
}

/// Game time tracking
#[derive(Debug, Clone, Default)]
pub struct GameTime {
    /// Configuration
    pub config: TimeConfig,
    /// Time since start in seconds (simulated, excludes paused frames)
    pub total_time: f64,
    /// Delta time for this frame (clamped, scaled, zero while paused)
    pub delta_time: f32,
    /// Clamped but unscaled delta time
    pub unscaled_delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Whether the simulation is paused
    pub paused: bool,
}

impl GameTime {
    /// Create a new game time with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Update with the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        // Negative deltas (clock skew) collapse to zero rather than rewinding
        self.unscaled_delta_time = raw_delta.max(0.0).min(self.config.max_delta_time);
        self.frame_count += 1;

        if self.paused {
            self.delta_time = 0.0;
            return;
        }

        self.delta_time = self.unscaled_delta_time * self.config.time_scale;
        self.total_time += self.delta_time as f64;
    }

    /// Pause the simulation
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the simulation
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Set the time scale (0.0 = frozen, 1.0 = normal, 2.0 = double speed)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_time() {
        let mut time = GameTime::default();
        time.update(0.016);

        assert!(time.delta_time > 0.0);
        assert_eq!(time.frame_count, 1);

        time.pause();
        time.update(0.016);
        assert_eq!(time.delta_time, 0.0);
        assert_eq!(time.frame_count, 2);

        time.resume();
        time.update(0.016);
        assert!(time.delta_time > 0.0);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut time = GameTime::default();
        time.update(3.0);
        assert_eq!(time.delta_time, 0.25);
        assert_eq!(time.unscaled_delta_time, 0.25);
    }

    #[test]
    fn test_negative_delta_is_zero() {
        let mut time = GameTime::default();
        time.update(-0.5);
        assert_eq!(time.delta_time, 0.0);
        assert_eq!(time.total_time, 0.0);
    }

    #[test]
    fn test_time_scale() {
        let mut time = GameTime::default();
        time.set_time_scale(0.5);
        time.update(0.1);
        assert!((time.delta_time - 0.05).abs() < 1e-6);

        time.set_time_scale(-2.0);
        assert_eq!(time.config.time_scale, 0.0);
    }
}
