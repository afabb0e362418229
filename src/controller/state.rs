use serde::{Deserialize, Serialize};

use crate::gesture::{RotateGesture, ZoomGesture};

/// Who currently controls the camera.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    /// The device sensor drives the camera.
    #[default]
    Auto,
    /// A drag gesture drives the camera orientation.
    ManualRotate,
    /// A pinch gesture drives the camera field of view.
    ManualZoom,
}

/// Control state together with the baseline of the active gesture.
///
/// Holding the gesture inside the variant means a rotate baseline cannot
/// exist while zooming, and a gesture's baseline is dropped exactly when
/// the state leaves its variant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    /// No gesture in progress.
    #[default]
    Auto,
    /// Drag in progress.
    Rotate(RotateGesture),
    /// Pinch in progress.
    Zoom(ZoomGesture),
}

impl Interaction {
    /// The control mode this state represents.
    #[must_use]
    pub fn mode(&self) -> ControlMode {
        match self {
            Self::Auto => ControlMode::Auto,
            Self::Rotate(_) => ControlMode::ManualRotate,
            Self::Zoom(_) => ControlMode::ManualZoom,
        }
    }

    /// The drag in progress, if any.
    #[must_use]
    pub fn rotate_gesture(&self) -> Option<&RotateGesture> {
        match self {
            Self::Rotate(gesture) => Some(gesture),
            _ => None,
        }
    }

    /// The pinch in progress, if any.
    #[must_use]
    pub fn zoom_gesture(&self) -> Option<&ZoomGesture> {
        match self {
            Self::Zoom(gesture) => Some(gesture),
            _ => None,
        }
    }
}
