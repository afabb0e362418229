use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What happens to the field of view when a pinch gesture ends.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomEndPolicy {
    /// Return to the normalized field of view for the current viewport.
    #[default]
    Restore,
    /// Keep the field of view the gesture ended on.
    Keep,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Field of View", inline)]
#[serde(default)]
/// Field-of-view normalization and zoom parameters.
pub struct FovOptions {
    /// Vertical field of view (degrees) assumed when the camera has none.
    #[schemars(title = "Default FOV", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub default_fov: f32,
    /// Recompute the field of view on resize so the vertical extent of
    /// the scene stays constant.
    #[schemars(title = "Normalize On Resize")]
    pub normalize_on_resize: bool,
    /// Distance of the reference frustum plane used for normalization.
    #[schemars(skip)]
    pub reference_distance: f32,
    /// Field-of-view policy when a pinch ends.
    #[schemars(title = "On Zoom End")]
    pub zoom_end: ZoomEndPolicy,
}

impl Default for FovOptions {
    fn default() -> Self {
        Self {
            default_fov: 75.0,
            normalize_on_resize: true,
            reference_distance: 2000.0,
            zoom_end: ZoomEndPolicy::Restore,
        }
    }
}
