//! Centralized controller options with TOML preset support.
//!
//! All tweakable settings (sensor transform, gesture overrides, field of
//! view handling) are consolidated here. Options serialize to/from TOML so
//! embedders can ship presets alongside their scenes.

mod fov;
mod gestures;
mod transform;

use std::path::Path;

pub use fov::{FovOptions, ZoomEndPolicy};
pub use gestures::GestureOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transform::TransformOptions;

use crate::error::GyrocamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gestures]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Sensor transform parameters.
    pub transform: TransformOptions,
    /// Manual gesture parameters.
    pub gestures: GestureOptions,
    /// Field-of-view parameters.
    pub fov: FovOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GyrocamError> {
        let content =
            std::fs::read_to_string(path).map_err(GyrocamError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, GyrocamError> {
        let opts: Self = toml::from_str(content)
            .map_err(|e| GyrocamError::OptionsParse(e.to_string()))?;
        let sanitized = opts.clone().sanitized();
        if sanitized != opts {
            log::warn!("options contained out-of-range values; repaired");
        }
        Ok(sanitized)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GyrocamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GyrocamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GyrocamError::Io)?;
        }
        std::fs::write(path, content).map_err(GyrocamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Clamp values that would break the control loop into usable ranges.
    ///
    /// Hand-edited presets can carry zero reference sizes or a smoothing
    /// factor outside `[0, 1]`; those fall back to the defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.transform.smoothing = self.transform.smoothing.clamp(0.0, 1.0);
        self.gestures.reference_width = positive_or(
            self.gestures.reference_width,
            defaults.gestures.reference_width,
        );
        self.gestures.reference_height = positive_or(
            self.gestures.reference_height,
            defaults.gestures.reference_height,
        );
        self.fov.reference_distance = positive_or(
            self.fov.reference_distance,
            defaults.fov.reference_distance,
        );
        if self.fov.default_fov >= 180.0 {
            self.fov.default_fov = defaults.fov.default_fov;
        }
        self.fov.default_fov =
            positive_or(self.fov.default_fov, defaults.fov.default_fov);
        self
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
