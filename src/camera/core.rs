use glam::{Mat4, Quat, Vec3};

/// The externally owned camera the controller steers.
///
/// The controller only reads and writes these fields inside
/// [`update`](crate::controller::DeviceOrientationController::update);
/// it never creates or drops the camera.
pub trait CameraHandle {
    /// Current world orientation.
    fn orientation(&self) -> Quat;

    /// Overwrite the world orientation.
    fn set_orientation(&mut self, orientation: Quat);

    /// Vertical field of view in degrees, if the camera has one.
    fn fov(&self) -> Option<f32> {
        None
    }

    /// Set the vertical field of view in degrees. Cameras without a field
    /// of view ignore this.
    fn set_fov(&mut self, _fov: f32) {}

    /// Recompute projection state after a field-of-view change.
    fn update_projection(&mut self) {}
}

/// Perspective camera fixed at a position, steered by orientation only.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// World orientation; the camera looks down its local -Z.
    pub orientation: Quat,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    /// Camera at the origin with identity orientation.
    #[must_use]
    pub fn new(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            aspect,
            fovy,
            znear,
            zfar,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    /// Projection matrix as of the last [`CameraHandle::update_projection`].
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation.conjugate())
            * Mat4::from_translation(-self.position)
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    /// Viewing direction in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Update the aspect ratio for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
        self.update_projection();
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(75.0, 1.5, 0.1, 1000.0)
    }
}

impl CameraHandle for PerspectiveCamera {
    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    fn fov(&self) -> Option<f32> {
        Some(self.fovy)
    }

    fn set_fov(&mut self, fov: f32) {
        self.fovy = fov;
    }

    fn update_projection(&mut self) {
        // Right-handed, [0, 1] depth
        self.projection = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_camera_looks_down_negative_z() {
        let camera = PerspectiveCamera::default();
        assert!(camera.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn view_matrix_undoes_orientation() {
        let mut camera = PerspectiveCamera::default();
        camera.set_orientation(Quat::from_rotation_y(0.9));
        let in_view = camera.view_matrix().transform_vector3(camera.forward());
        assert!(in_view.abs_diff_eq(Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn projection_follows_fov_only_after_update() {
        let mut camera = PerspectiveCamera::default();
        let before = camera.projection();
        camera.set_fov(40.0);
        assert_eq!(camera.projection(), before);
        camera.update_projection();
        assert_ne!(camera.projection(), before);
        assert_eq!(camera.fov(), Some(40.0));
    }

    #[test]
    fn resize_tolerates_zero_height() {
        let mut camera = PerspectiveCamera::default();
        camera.resize(800, 0);
        assert!(camera.aspect.is_finite());
    }
}
