//! Yaw/pitch look angles

use glam::{EulerRot, Quat, Vec2};

use super::LookConfig;

/// View angles driven by mouse movement. Never touches position.
#[derive(Debug, Clone)]
pub struct LookAngles {
    /// Configuration
    pub config: LookConfig,
    /// Yaw rotation in radians (around +Y, positive turns left)
    pub yaw: f32,
    /// Pitch rotation in radians (positive looks up)
    pub pitch: f32,
}

impl LookAngles {
    /// Create look angles facing -Z
    pub fn new() -> Self {
        Self::with_config(LookConfig::default())
    }

    /// Create look angles with custom config
    pub fn with_config(config: LookConfig) -> Self {
        Self {
            config,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Apply a mouse movement in pixels (x right, y down)
    pub fn handle_mouse_look(&mut self, mouse_delta: Vec2) {
        let y_mult = if self.config.invert_y { -1.0 } else { 1.0 };
        self.yaw -= mouse_delta.x * self.config.sensitivity;
        self.set_pitch(self.pitch - mouse_delta.y * self.config.sensitivity * y_mult);
    }

    /// Set the yaw directly
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Set the pitch directly, clamped to the configured range
    pub fn set_pitch(&mut self, pitch: f32) {
        let pitch_min = self.config.pitch_min.to_radians();
        let pitch_max = self.config.pitch_max.to_radians();
        self.pitch = pitch.clamp(pitch_min, pitch_max);
    }

    /// View orientation
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

impl Default for LookAngles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use stride_core::Pose;

    use super::*;

    #[test]
    fn test_look_creation() {
        let look = LookAngles::new();
        assert_eq!(look.yaw, 0.0);
        assert_eq!(look.pitch, 0.0);
        assert_eq!(look.rotation(), Quat::IDENTITY);
    }

    #[test]
    fn test_pitch_clamping() {
        let mut look = LookAngles::new();
        look.set_pitch(100.0_f32.to_radians());
        assert!(look.pitch <= look.config.pitch_max.to_radians() + 0.01);

        look.handle_mouse_look(Vec2::new(0.0, 1.0e6));
        assert!(look.pitch >= look.config.pitch_min.to_radians() - 0.01);
    }

    #[test]
    fn test_mouse_right_turns_right() {
        let mut look = LookAngles::new();
        look.handle_mouse_look(Vec2::new(100.0, 0.0));
        let forward = Pose::new(Vec3::ZERO, look.rotation()).horizontal_forward();
        assert!(forward.x > 0.0);
        assert!(forward.z < 0.0);
    }

    #[test]
    fn test_pitch_keeps_horizontal_axes() {
        let mut look = LookAngles::new();
        look.set_pitch(-1.0);
        let pose = Pose::new(Vec3::ZERO, look.rotation());
        assert!((pose.horizontal_forward() - Vec3::NEG_Z).length() < 1e-5);
    }
}
