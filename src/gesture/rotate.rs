use glam::{Quat, Vec2};

use crate::options::GestureOptions;

/// Degrees of rotation per pixel for the given viewport, so a drag across
/// the same fraction of the screen turns the view by the same angle on
/// any resolution.
#[must_use]
pub fn scroll_speed(viewport: Vec2, options: &GestureOptions) -> Vec2 {
    let viewport = viewport.max(Vec2::ONE);
    Vec2::new(
        options.reference_width / viewport.x,
        options.reference_height / viewport.y,
    ) * options.drag_sensitivity
}

/// Local rotation for a drag offset: `lon` degrees of yaw about Y, then
/// `lat` degrees of pitch about X (YXZ order with no roll, the sensor
/// transform's convention).
#[must_use]
pub fn drag_rotation(lat: f32, lon: f32) -> Quat {
    Quat::from_rotation_y(lon.to_radians())
        * Quat::from_rotation_x(lat.to_radians())
}

/// An in-progress drag.
///
/// The baseline orientation and start position are captured together in
/// [`RotateGesture::start`]; every output is `baseline * delta`, so the
/// drag turns the view about its own axes whatever the heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateGesture {
    start: Vec2,
    current: Vec2,
    scroll_speed: Vec2,
    baseline: Quat,
}

impl RotateGesture {
    /// Begin a drag at `pointer` from the camera's current orientation.
    #[must_use]
    pub fn start(pointer: Vec2, baseline: Quat, scroll_speed: Vec2) -> Self {
        Self {
            start: pointer,
            current: pointer,
            scroll_speed,
            baseline,
        }
    }

    /// Track the pointer.
    pub fn move_to(&mut self, pointer: Vec2) {
        self.current = pointer;
    }

    /// Pointer position the drag started at.
    #[must_use]
    pub fn start_position(&self) -> Vec2 {
        self.start
    }

    /// Latest pointer position.
    #[must_use]
    pub fn current_position(&self) -> Vec2 {
        self.current
    }

    /// Camera orientation captured at the start of the drag.
    #[must_use]
    pub fn baseline(&self) -> Quat {
        self.baseline
    }

    /// Replace the baseline (heading re-injection).
    pub fn set_baseline(&mut self, baseline: Quat) {
        self.baseline = baseline;
    }

    /// `(lat, lon)` drag offset in degrees. Dragging up or left gives
    /// positive values.
    #[must_use]
    pub fn offset_degrees(&self) -> Vec2 {
        let travel = self.start - self.current;
        Vec2::new(
            travel.y * self.scroll_speed.y,
            travel.x * self.scroll_speed.x,
        )
    }

    /// Camera orientation for the current pointer position.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        let offset = self.offset_degrees();
        (self.baseline * drag_rotation(offset.x, offset.y)).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn speed_for(width: f32, height: f32) -> Vec2 {
        scroll_speed(Vec2::new(width, height), &GestureOptions::default())
    }

    #[test]
    fn reference_viewport_uses_raw_sensitivity() {
        let speed = speed_for(1200.0, 800.0);
        assert!(speed.abs_diff_eq(Vec2::splat(0.1), EPS));
    }

    #[test]
    fn smaller_viewport_drags_faster() {
        let speed = speed_for(600.0, 400.0);
        assert!(speed.abs_diff_eq(Vec2::splat(0.2), EPS));
    }

    #[test]
    fn empty_viewport_does_not_divide_by_zero() {
        let speed = speed_for(0.0, 0.0);
        assert!(speed.is_finite());
    }

    #[test]
    fn zero_delta_returns_baseline() {
        let baseline = Quat::from_rotation_y(0.8) * Quat::from_rotation_x(0.2);
        let gesture = RotateGesture::start(
            Vec2::new(300.0, 200.0),
            baseline,
            speed_for(1200.0, 800.0),
        );
        assert!(gesture.rotation().abs_diff_eq(baseline, EPS));
    }

    #[test]
    fn drag_composes_delta_after_baseline() {
        let baseline = Quat::from_rotation_y(1.2);
        let mut gesture = RotateGesture::start(
            Vec2::new(100.0, 100.0),
            baseline,
            speed_for(1200.0, 800.0),
        );
        gesture.move_to(Vec2::new(200.0, 150.0));

        let offset = gesture.offset_degrees();
        assert!((offset.x + 5.0).abs() < EPS, "lat = {}", offset.x);
        assert!((offset.y + 10.0).abs() < EPS, "lon = {}", offset.y);

        let expected = baseline * drag_rotation(-5.0, -10.0);
        assert!(gesture.rotation().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn output_depends_only_on_endpoints() {
        let speed = speed_for(1200.0, 800.0);
        let mut direct =
            RotateGesture::start(Vec2::ZERO, Quat::IDENTITY, speed);
        direct.move_to(Vec2::new(40.0, -30.0));

        let mut wandering =
            RotateGesture::start(Vec2::ZERO, Quat::IDENTITY, speed);
        for p in [
            Vec2::new(500.0, 10.0),
            Vec2::new(-80.0, 90.0),
            Vec2::new(40.0, -30.0),
        ] {
            wandering.move_to(p);
        }
        assert!(direct.rotation().abs_diff_eq(wandering.rotation(), EPS));
    }

    #[test]
    fn horizontal_drag_is_pure_yaw() {
        let q = drag_rotation(0.0, 90.0);
        assert!(q.abs_diff_eq(
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            EPS
        ));
    }
}
