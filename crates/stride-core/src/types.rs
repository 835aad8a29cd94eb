//! Core types used throughout Stride

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Camera pose: eye position in world space plus view orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    /// Create a pose at the given position with identity orientation
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a pose with position and orientation
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// View-to-world matrix for this pose
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    /// Get the forward direction (negative Z in local space)
    pub fn forward(&self) -> Vec3 {
        self.orientation * -Vec3::Z
    }

    /// Get the right direction (positive X in local space)
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Right direction projected onto the horizontal plane.
    ///
    /// Zero when the view's right axis is vertical (rolled 90 degrees).
    pub fn horizontal_right(&self) -> Vec3 {
        let right = self.right();
        Vec3::new(right.x, 0.0, right.z).normalize_or_zero()
    }

    /// Forward direction on the horizontal plane, `up x right`.
    ///
    /// Unlike [`Pose::forward`] this ignores pitch, so looking at the floor
    /// still walks along the ground.
    pub fn horizontal_forward(&self) -> Vec3 {
        Vec3::Y.cross(self.horizontal_right())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_matrix() {
        let pose = Pose::from_position(Vec3::new(1.0, 2.0, 3.0));
        let matrix = pose.matrix();
        let translation = matrix.col(3).truncate();
        assert_eq!(translation, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_identity_axes() {
        let pose = Pose::default();
        assert!((pose.horizontal_right() - Vec3::X).length() < 1e-6);
        assert!((pose.horizontal_forward() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_horizontal_forward_ignores_pitch() {
        let pose = Pose::new(Vec3::ZERO, Quat::from_rotation_x(-1.2));
        let forward = pose.horizontal_forward();
        assert!(forward.y.abs() < 1e-6);
        assert!((forward - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_yawed_axes() {
        // Quarter turn to the left: forward becomes -X, right becomes -Z
        let pose = Pose::new(Vec3::ZERO, Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        assert!((pose.horizontal_forward() - Vec3::NEG_X).length() < 1e-5);
        assert!((pose.horizontal_right() - Vec3::NEG_Z).length() < 1e-5);
    }
}
