/// Keeps the perceived vertical field of view constant across resizes.
///
/// At construction the camera's field of view defines a frustum height
/// `H = D * tan(fov / 2)` on a plane at the reference distance `D`. After
/// a resize the field of view is recomputed so that plane shows
/// `H * height / initial_height`, i.e. the scene keeps its on-screen
/// scale and a taller window reveals more of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovNormalizer {
    initial_height: f32,
    frustum_height: f32,
    reference_distance: f32,
}

impl FovNormalizer {
    /// Capture the reference frustum for `initial_fov` (degrees) at a
    /// viewport `initial_height` pixels tall.
    #[must_use]
    pub fn new(
        initial_fov: f32,
        initial_height: f32,
        reference_distance: f32,
    ) -> Self {
        Self {
            initial_height: initial_height.max(1.0),
            frustum_height: reference_distance
                * (initial_fov.to_radians() / 2.0).tan(),
            reference_distance,
        }
    }

    /// Viewport height the reference frustum was captured at.
    #[must_use]
    pub fn initial_height(&self) -> f32 {
        self.initial_height
    }

    /// Vertical field of view (degrees) for a viewport `height` pixels
    /// tall.
    #[must_use]
    pub fn normalized_fov(&self, height: f32) -> f32 {
        let scaled = self.frustum_height * (height.max(1.0) / self.initial_height);
        (2.0 * (scaled / self.reference_distance).atan()).to_degrees()
    }
}
