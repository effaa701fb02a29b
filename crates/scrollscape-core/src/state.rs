//! Camera state shared with the web frontend.
//!
//! These types avoid platform-specific APIs. The renderer consumes them to
//! build camera matrices; the scheduler eases them toward animator targets.

use crate::constants::{CAMERA_FOVY_DEG, CAMERA_LERP, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Desired camera pose produced by a scene animator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTarget {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraTarget {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.4),
            look_at: Vec3::ZERO,
        }
    }
}

/// Camera plus its smoothed look-at point.
#[derive(Clone, Debug, Default)]
pub struct CameraRig {
    pub camera: Camera,
    pub smooth_look_at: Vec3,
}

impl CameraRig {
    /// Ease position and look-at toward `target` by the fixed camera factor.
    pub fn ease_toward(&mut self, target: &CameraTarget) {
        self.camera.eye = self.camera.eye.lerp(target.position, CAMERA_LERP);
        self.smooth_look_at = self.smooth_look_at.lerp(target.look_at, CAMERA_LERP);
        self.camera.target = self.smooth_look_at;
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.camera.aspect = width / height.max(1.0);
    }
}
