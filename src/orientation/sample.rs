use serde::{Deserialize, Serialize};

/// One W3C `deviceorientation` reading.
///
/// Angles are in degrees and absent when the platform did not report
/// them. Only the latest sample is kept; there is no history.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationSample {
    /// Rotation about the device Z axis (compass heading), `[0, 360)`.
    pub alpha: Option<f32>,
    /// Front-back tilt about the device X' axis, `[-180, 180)`.
    pub beta: Option<f32>,
    /// Left-right tilt about the device Y'' axis, `[-90, 90)`.
    pub gamma: Option<f32>,
    /// Whether alpha is referenced to magnetic north.
    pub absolute: bool,
    /// Platform compass heading in degrees, when provided.
    pub compass_heading: Option<f32>,
    /// Platform compass accuracy in degrees, when provided.
    pub compass_accuracy: Option<f32>,
}

impl OrientationSample {
    /// Sample with all three angles present.
    #[must_use]
    pub fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self {
            alpha: Some(alpha),
            beta: Some(beta),
            gamma: Some(gamma),
            ..Self::default()
        }
    }

    /// `false` until the sensor has produced a non-zero angle.
    ///
    /// Browsers fire an initial all-zero (or all-null) event before the
    /// sensor warms up; treating it as data would snap the camera to the
    /// identity orientation.
    #[must_use]
    pub fn has_data(&self) -> bool {
        [self.alpha, self.beta, self.gamma]
            .into_iter()
            .any(|angle| angle.is_some_and(|a| a != 0.0 && a.is_finite()))
    }
}

/// Device angles in radians, ready for the transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeviceAngles {
    /// Heading about Z.
    pub alpha: f32,
    /// Tilt about X'.
    pub beta: f32,
    /// Tilt about Y''.
    pub gamma: f32,
}

impl DeviceAngles {
    /// Convert a sample's degrees to radians, reading absent or
    /// non-finite angles as zero.
    #[must_use]
    pub fn from_sample(sample: &OrientationSample) -> Self {
        let rad = |angle: Option<f32>| {
            angle.filter(|a| a.is_finite()).unwrap_or(0.0).to_radians()
        };
        Self {
            alpha: rad(sample.alpha),
            beta: rad(sample.beta),
            gamma: rad(sample.gamma),
        }
    }
}

/// Rotation of the visible viewport relative to the device's natural
/// orientation, normalized to 0, 90, 180 or 270 degrees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "i32", into = "i32")]
pub struct ScreenOrientation(u16);

impl ScreenOrientation {
    /// Natural (portrait on phones) orientation.
    pub const NATURAL: Self = Self(0);

    /// Normalize a platform angle. `window.orientation` reports -90 for
    /// clockwise landscape, which maps to 270. Angles between quadrants
    /// snap to the nearest one.
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Self {
        let snapped = ((degrees as f32 / 90.0).round() as i32) * 90;
        Self(snapped.rem_euclid(360) as u16)
    }

    /// Angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Angle in radians.
    #[must_use]
    pub fn radians(self) -> f32 {
        f32::from(self.0).to_radians()
    }

    /// Whether the viewport is rotated a quarter turn from natural.
    #[must_use]
    pub fn is_landscape(self) -> bool {
        self.0 == 90 || self.0 == 270
    }
}

impl From<i32> for ScreenOrientation {
    fn from(degrees: i32) -> Self {
        Self::from_degrees(degrees)
    }
}

impl From<ScreenOrientation> for i32 {
    fn from(orientation: ScreenOrientation) -> Self {
        i32::from(orientation.0)
    }
}
