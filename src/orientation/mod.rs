//! Device-orientation samples and the transform that turns them into a
//! camera rotation.

/// Sensor samples and screen orientation.
pub mod sample;
/// Device-frame to camera-frame rotation math.
pub mod transform;

pub use sample::{DeviceAngles, OrientationSample, ScreenOrientation};
pub use transform::{
    compute_orientation, compute_orientation_matrix, TransformConfig,
};
