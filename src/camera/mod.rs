//! Camera contract and reference implementation.
//!
//! The controller writes to any [`CameraHandle`]; [`PerspectiveCamera`] is
//! a ready-made one for embedders without their own scene graph.

/// Camera handle trait and perspective camera.
pub mod core;
/// Field-of-view normalization across viewport resizes.
pub mod fov;

pub use self::core::{CameraHandle, PerspectiveCamera};
pub use fov::FovNormalizer;
