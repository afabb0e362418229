use glam::{EulerRot, Quat};

/// Roll about the view axis, the Z component of the YXZ decomposition.
///
/// For rotations built by the sensor transform this is where the device
/// heading ends up once the world correction has been applied.
#[must_use]
pub fn view_roll(rotation: Quat) -> f32 {
    let (_, _, roll) = rotation.to_euler(EulerRot::YXZ);
    roll
}

/// Replace the view roll of `rotation` with `target_roll`, keeping its
/// yaw and pitch.
#[must_use]
pub fn with_view_roll(rotation: Quat, target_roll: f32) -> Quat {
    let correction = target_roll - view_roll(rotation);
    (rotation * Quat::from_rotation_z(correction)).normalize()
}
