use glam::{Quat, Vec2};

/// Pinch distances below this (pixels) are treated as coincident fingers.
const MIN_PINCH_DISTANCE: f32 = 1e-3;

/// An in-progress pinch.
///
/// Zoom is one-sided: spreading the fingers narrows the field of view,
/// closing them past the start distance leaves it unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomGesture {
    touches: [Vec2; 2],
    start_distance: f32,
    baseline_fov: f32,
    baseline_orientation: Quat,
}

impl ZoomGesture {
    /// Begin a pinch between `a` and `b` from the camera's current field
    /// of view (degrees) and orientation.
    #[must_use]
    pub fn start(
        a: Vec2,
        b: Vec2,
        baseline_fov: f32,
        baseline_orientation: Quat,
    ) -> Self {
        Self {
            touches: [a, b],
            start_distance: a.distance(b),
            baseline_fov,
            baseline_orientation,
        }
    }

    /// Track both fingers.
    pub fn move_to(&mut self, a: Vec2, b: Vec2) {
        self.touches = [a, b];
    }

    /// Distance between the fingers when the pinch started.
    #[must_use]
    pub fn start_distance(&self) -> f32 {
        self.start_distance
    }

    /// Current distance between the fingers.
    #[must_use]
    pub fn current_distance(&self) -> f32 {
        self.touches[0].distance(self.touches[1])
    }

    /// Field of view captured at the start of the pinch.
    #[must_use]
    pub fn baseline_fov(&self) -> f32 {
        self.baseline_fov
    }

    /// Camera orientation captured at the start of the pinch.
    #[must_use]
    pub fn baseline_orientation(&self) -> Quat {
        self.baseline_orientation
    }

    /// Replace the baseline orientation (heading re-injection).
    pub fn set_baseline_orientation(&mut self, orientation: Quat) {
        self.baseline_orientation = orientation;
    }

    /// `start_distance / current_distance`, or `None` when either distance
    /// is degenerate.
    #[must_use]
    pub fn factor(&self) -> Option<f32> {
        let current = self.current_distance();
        if self.start_distance < MIN_PINCH_DISTANCE
            || current < MIN_PINCH_DISTANCE
        {
            return None;
        }
        Some(self.start_distance / current)
    }

    /// New field of view, or `None` when the pinch should not change it.
    #[must_use]
    pub fn fov(&self) -> Option<f32> {
        self.factor()
            .filter(|factor| *factor <= 1.0)
            .map(|factor| self.baseline_fov * factor)
    }
}
