//! Scripted input replay.
//!
//! A replay script is a TOML file describing a viewport and a list of
//! frames, each carrying the [`InputEvent`]s delivered before that frame's
//! update:
//!
//! ```toml
//! width = 1200.0
//! height = 800.0
//!
//! [[frames]]
//! events = [{ type = "device_orientation", alpha = 90.0, beta = 0.0, gamma = 0.0 }]
//!
//! [[frames]]
//! events = [
//!     { type = "pointer_down", x = 100.0, y = 100.0 },
//!     { type = "pointer_move", x = 200.0, y = 150.0 },
//! ]
//! ```

use std::path::Path;

use glam::Quat;
use serde::{Deserialize, Serialize};

use crate::camera::PerspectiveCamera;
use crate::controller::{ControlMode, DeviceOrientationController};
use crate::error::GyrocamError;
use crate::input::InputEvent;
use crate::options::Options;

/// A viewport plus the frames to play back through a controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Viewport width in pixels.
    #[serde(default = "default_width")]
    pub width: f32,
    /// Viewport height in pixels.
    #[serde(default = "default_height")]
    pub height: f32,
    /// Starting vertical field of view in degrees.
    #[serde(default = "default_fov")]
    pub fov: f32,
    /// Frames in playback order.
    #[serde(default)]
    pub frames: Vec<ReplayFrame>,
}

/// Events delivered before one update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReplayFrame {
    /// Events in delivery order.
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

/// Camera and controller state after one frame's update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameState {
    /// Zero-based frame index.
    pub frame: usize,
    /// Control mode after the update.
    pub mode: ControlMode,
    /// Camera orientation after the update.
    pub orientation: Quat,
    /// Camera field of view after the update.
    pub fov: f32,
}

fn default_width() -> f32 {
    1200.0
}

fn default_height() -> f32 {
    800.0
}

fn default_fov() -> f32 {
    75.0
}

impl ReplayScript {
    /// Load a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GyrocamError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a script from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, GyrocamError> {
        toml::from_str(content)
            .map_err(|e| GyrocamError::ScriptParse(e.to_string()))
    }

    /// Play every frame through a fresh, connected controller driving a
    /// [`PerspectiveCamera`], returning the state after each update.
    #[must_use]
    pub fn run(&self, options: Options) -> Vec<FrameState> {
        let aspect = self.width / self.height.max(1.0);
        let mut camera = PerspectiveCamera::new(self.fov, aspect, 0.1, 1000.0);
        let mut controller = DeviceOrientationController::with_options(
            &camera,
            self.width,
            self.height,
            options,
        );
        controller.connect();

        self.frames
            .iter()
            .enumerate()
            .map(|(frame, events)| {
                for event in &events.events {
                    controller.handle_event(event, &camera);
                }
                controller.update(&mut camera);
                log::debug!(
                    "frame {frame}: {:?} fov {:.2}",
                    controller.mode(),
                    camera.fovy
                );
                FrameState {
                    frame,
                    mode: controller.mode(),
                    orientation: camera.orientation,
                    fov: camera.fovy,
                }
            })
            .collect()
    }
}
