//! Camera frame snapshot for drag mapping
//!
//! The drag translator needs the camera's forward and right axes in world
//! space at the moment of each drag step. This module provides a small
//! snapshot type the scene backend fills in on demand; it is never cached
//! across pointer events because the camera may move between them.

use glam::{Quat, Vec3};

/// World-space camera orientation snapshot
///
/// Holds the camera's forward and right unit vectors. The vectors are taken
/// as supplied; no orthonormalization is applied. A camera pitched far from
/// level (e.g., looking straight down) yields a degenerate drag plane, which
/// is an accepted approximation of this mapping rather than an error.
///
/// # Coordinate System
///
/// OpenGL convention:
/// - +X is right
/// - +Y is up
/// - -Z is forward (into the screen)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Camera forward direction in world space
    pub forward: Vec3,
    /// Camera right direction in world space
    pub right: Vec3,
}

impl CameraFrame {
    /// Identity frame: camera level, looking down -Z
    pub const LEVEL: CameraFrame = CameraFrame {
        forward: Vec3::NEG_Z,
        right: Vec3::X,
    };

    /// Create a frame from explicit forward and right vectors
    pub fn new(forward: Vec3, right: Vec3) -> Self {
        Self { forward, right }
    }

    /// Extract the frame from a camera rotation quaternion
    ///
    /// Rotates the canonical basis: forward = `rotation * -Z`,
    /// right = `rotation * +X`.
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            forward: rotation * Vec3::NEG_Z,
            right: rotation * Vec3::X,
        }
    }
}

impl Default for CameraFrame {
    fn default() -> Self {
        Self::LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_level_frame() {
        let frame = CameraFrame::default();
        assert_eq!(frame.forward, Vec3::NEG_Z);
        assert_eq!(frame.right, Vec3::X);
    }

    #[test]
    fn test_identity_rotation_matches_level() {
        let frame = CameraFrame::from_rotation(Quat::IDENTITY);
        assert_eq!(frame, CameraFrame::LEVEL);
    }

    #[test]
    fn test_yaw_quarter_turn() {
        // 90 degrees around +Y: forward -Z becomes -X, right +X becomes -Z
        let frame = CameraFrame::from_rotation(Quat::from_rotation_y(FRAC_PI_2));
        assert!(frame.forward.abs_diff_eq(Vec3::NEG_X, 1e-6));
        assert!(frame.right.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }
}
