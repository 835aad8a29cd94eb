//! Locomotion tuning parameters

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Locomotion configuration.
///
/// Units are world units and seconds. Defaults reproduce the classic
/// pointer-lock walker: eye height 10, fall acceleration 1000, jump 350.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Horizontal velocity decay rate per second
    pub damping: f32,
    /// Gravity constant, multiplied by `mass` for the fall acceleration
    pub gravity: f32,
    /// Mass factor applied to gravity
    pub mass: f32,
    /// Horizontal acceleration while a direction key is held
    pub acceleration: f32,
    /// Upward velocity granted by a jump
    pub jump_impulse: f32,
    /// How far below the eye the ground probe starts
    pub probe_offset: f32,
    /// Ground probe length
    pub probe_range: f32,
    /// Lowest eye height the actor can ever reach
    pub floor_height: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            damping: 7.0,
            gravity: 10.0,
            mass: 100.0,
            acceleration: 400.0,
            jump_impulse: 350.0,
            probe_offset: 10.0,
            probe_range: 10.0,
            floor_height: 10.0,
        }
    }
}

impl LocomotionConfig {
    /// Effective downward acceleration
    pub fn fall_acceleration(&self) -> f32 {
        self.gravity * self.mass
    }

    /// Check that every parameter is usable by the integrator
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("damping", self.damping),
            ("gravity", self.gravity),
            ("mass", self.mass),
            ("acceleration", self.acceleration),
            ("jump_impulse", self.jump_impulse),
            ("probe_offset", self.probe_offset),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }

        if !self.floor_height.is_finite() {
            return Err(ConfigError::FloorHeight(self.floor_height));
        }
        if !self.probe_range.is_finite() || self.probe_range <= 0.0 {
            return Err(ConfigError::ProbeRange(self.probe_range));
        }
        Ok(())
    }
}
