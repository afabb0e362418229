use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sensor Transform", inline)]
#[serde(default)]
/// Device-orientation transform and automatic-write parameters.
pub struct TransformOptions {
    /// Leave out the -90° world correction when alpha is exactly zero.
    ///
    /// Platforms without a compass report alpha as 0; correcting those
    /// samples makes the view jump once a heading arrives.
    #[schemars(title = "Skip Correction Without Heading")]
    pub skip_world_correction_without_heading: bool,
    /// Slerp factor applied to automatic writes (0 writes the sample
    /// orientation unchanged).
    #[schemars(title = "Smoothing", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub smoothing: f32,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            skip_world_correction_without_heading: true,
            smoothing: 0.0,
        }
    }
}
