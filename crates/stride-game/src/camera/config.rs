//! Look configuration

use serde::{Deserialize, Serialize};

/// Look configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Mouse sensitivity (radians per pixel)
    pub sensitivity: f32,
    /// Minimum pitch angle in degrees
    pub pitch_min: f32,
    /// Maximum pitch angle in degrees
    pub pitch_max: f32,
    /// Invert Y axis
    pub invert_y: bool,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.002,
            pitch_min: -89.0,
            pitch_max: 89.0,
            invert_y: false,
        }
    }
}
