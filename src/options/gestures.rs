use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Manual drag (rotate) and pinch (zoom) override parameters.
pub struct GestureOptions {
    /// Allow pointer and single-touch drags to take over the camera.
    #[schemars(title = "Manual Rotate")]
    pub enable_rotate: bool,
    /// Allow two-finger pinches to change the field of view.
    #[schemars(title = "Manual Zoom")]
    pub enable_zoom: bool,
    /// Degrees of rotation per pixel on the reference viewport.
    #[schemars(title = "Drag Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub drag_sensitivity: f32,
    /// Viewport width the sensitivity is calibrated against.
    #[schemars(skip)]
    pub reference_width: f32,
    /// Viewport height the sensitivity is calibrated against.
    #[schemars(skip)]
    pub reference_height: f32,
    /// Keep following the device heading while a gesture is active.
    #[schemars(title = "Preserve Heading")]
    pub preserve_heading: bool,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            enable_rotate: true,
            enable_zoom: true,
            drag_sensitivity: 0.1,
            reference_width: 1200.0,
            reference_height: 800.0,
            preserve_heading: false,
        }
    }
}
