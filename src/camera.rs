use glam::{Mat4, Vec3};

use crate::types::FrameUniform;

pub const DEFAULT_FOV_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Perspective camera fixed above and behind the vehicle, looking down -Z
///
/// Only the aspect ratio changes after construction (window resize).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 8.0),
            fov_y: DEFAULT_FOV_DEGREES.to_radians(),
            aspect,
            znear: NEAR_PLANE,
            zfar: FAR_PLANE,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.znear, self.zfar)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Fill in the camera part of the per-frame uniform
    pub fn write_uniform(&self, uniform: &mut FrameUniform) {
        uniform.view_proj = self.view_proj().to_cols_array_2d();
        uniform.camera_pos = self.position.extend(1.0).to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_defaults_match_showcase_setup() {
        let camera = PerspectiveCamera::new(16.0 / 9.0);

        assert_eq!(camera.position, Vec3::new(0.0, 2.0, 8.0));
        assert!((camera.fov_y - 75.0f32.to_radians()).abs() < 1e-6);
        assert_eq!(camera.znear, 0.1);
        assert_eq!(camera.zfar, 1000.0);
    }

    #[test]
    fn set_aspect_replaces_ratio() {
        let mut camera = PerspectiveCamera::new(1.0);
        camera.set_aspect(1920.0 / 1080.0);
        assert_eq!(camera.aspect, 1920.0 / 1080.0);
    }

    #[test]
    fn view_looks_down_negative_z() {
        let camera = PerspectiveCamera::new(1.0);
        let view = camera.view();

        // A point straight ahead of the camera lands on the view-space -Z axis
        let ahead = view.transform_point3(Vec3::new(0.0, 2.0, 0.0));
        assert!(ahead.x.abs() < 1e-6);
        assert!(ahead.y.abs() < 1e-6);
        assert!(ahead.z < 0.0);
    }

    #[test]
    fn view_proj_is_finite() {
        let camera = PerspectiveCamera::new(800.0 / 600.0);
        let clip = camera.view_proj().project_point3(Vec3::ZERO);
        assert!(clip.is_finite());
    }
}
