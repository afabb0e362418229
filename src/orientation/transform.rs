//! Device-frame to camera-frame rotation.
//!
//! The W3C device frame has Z out of the screen, X to the right and Y up
//! the long edge, with angles applied as Z-X'-Y'' (alpha, beta, gamma).
//! The camera looks down -Z with Y up. Three rotations are composed:
//!
//! 1. `device = Ry(alpha) * Rx(beta) * Rz(-gamma)`, the sensor reading in
//!    camera axes (YXZ order built from `(beta, alpha, -gamma)`).
//! 2. `world = Rx(-π/2)`, so a device lying flat looks at the horizon
//!    instead of the sky.
//! 3. `screen = Rz(-orientation)`, undoing the viewport rotation.
//!
//! The result is `device * world * screen`.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat3, Quat};

use super::sample::{DeviceAngles, ScreenOrientation};
use crate::options::TransformOptions;

/// Transform switches that depend on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformConfig {
    /// Leave out the world correction when alpha is exactly zero.
    pub skip_world_correction_without_heading: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            skip_world_correction_without_heading: true,
        }
    }
}

impl From<&TransformOptions> for TransformConfig {
    fn from(options: &TransformOptions) -> Self {
        Self {
            skip_world_correction_without_heading: options
                .skip_world_correction_without_heading,
        }
    }
}

/// Sensor rotation expressed in camera axes, before any correction.
#[must_use]
pub fn device_rotation(angles: DeviceAngles) -> Quat {
    Quat::from_rotation_y(angles.alpha)
        * Quat::from_rotation_x(angles.beta)
        * Quat::from_rotation_z(-angles.gamma)
}

/// Fixed -90° turn about X from the sensor's "screen up" rest pose to the
/// camera's "look at the horizon" rest pose.
#[must_use]
pub fn world_correction() -> Quat {
    Quat::from_rotation_x(-FRAC_PI_2)
}

/// Counter-rotation for the viewport, a `-orientation` turn about Z.
#[must_use]
pub fn screen_correction(orientation: ScreenOrientation) -> Quat {
    let minus_half_angle = -orientation.radians() / 2.0;
    Quat::from_xyzw(0.0, 0.0, minus_half_angle.sin(), minus_half_angle.cos())
}

/// Map device angles (radians) and screen orientation to the camera
/// rotation.
///
/// Pure: the same inputs always produce the same unit quaternion. The
/// caller decides whether an all-zero sample should be applied at all.
#[must_use]
pub fn compute_orientation(
    angles: DeviceAngles,
    screen: ScreenOrientation,
    config: TransformConfig,
) -> Quat {
    let mut rotation = device_rotation(angles);
    let has_heading = angles.alpha != 0.0;
    if has_heading || !config.skip_world_correction_without_heading {
        rotation *= world_correction();
    }
    (rotation * screen_correction(screen)).normalize()
}

/// Matrix form of [`compute_orientation`], for embedders that store
/// rotations as matrices. Derived from the quaternion so the two never
/// disagree.
#[must_use]
pub fn compute_orientation_matrix(
    angles: DeviceAngles,
    screen: ScreenOrientation,
    config: TransformConfig,
) -> Mat3 {
    Mat3::from_quat(compute_orientation(angles, screen, config))
}
