//! The device-orientation controller.
//!
//! Event handlers (see [`input`]) record sensor, screen and gesture state on
//! the controller and emit notifications; they never touch the camera.
//! [`DeviceOrientationController::update`], called once per frame by the
//! embedder, is the only place the camera is written.

/// Outbound notifications and subscriber registry.
pub mod events;
/// Event handlers and gesture transitions.
pub mod input;
/// Control mode state machine.
pub mod state;

use glam::{Quat, Vec2};

pub use events::{ControllerEvent, EventBus, SubscriptionId};
pub use state::{ControlMode, Interaction};

use crate::camera::{CameraHandle, FovNormalizer};
use crate::gesture::heading::{view_roll, with_view_roll};
use crate::options::Options;
use crate::orientation::{
    compute_orientation, DeviceAngles, OrientationSample, ScreenOrientation,
    TransformConfig,
};

/// Steers a camera from device-orientation samples, with drag and pinch
/// overrides.
///
/// Starts disconnected and frozen; call [`connect`](Self::connect) before
/// feeding events.
///
/// ```ignore
/// let mut controller = DeviceOrientationController::new(&camera, 1200.0, 800.0);
/// controller.connect();
///
/// // From the platform's event callbacks:
/// controller.handle_event(&event, &camera);
///
/// // Once per frame:
/// controller.update(&mut camera);
/// ```
#[derive(Debug)]
pub struct DeviceOrientationController {
    options: Options,
    connected: bool,
    frozen: bool,
    sample: OrientationSample,
    screen: ScreenOrientation,
    viewport: Vec2,
    interaction: Interaction,
    device_rotation: Option<Quat>,
    initial_fov: f32,
    fov_normalizer: FovNormalizer,
    pending_fov: Option<f32>,
    events: EventBus<Self>,
}

impl DeviceOrientationController {
    /// Create a controller for `camera` on a `width` × `height` viewport
    /// with default options.
    #[must_use]
    pub fn new(camera: &impl CameraHandle, width: f32, height: f32) -> Self {
        Self::with_options(camera, width, height, Options::default())
    }

    /// Create a controller with explicit options.
    ///
    /// The camera's current field of view (or the configured default) and
    /// the viewport height become the reference for field-of-view
    /// normalization.
    #[must_use]
    pub fn with_options(
        camera: &impl CameraHandle,
        width: f32,
        height: f32,
        options: Options,
    ) -> Self {
        let options = options.sanitized();
        let initial_fov = camera.fov().unwrap_or(options.fov.default_fov);
        let fov_normalizer = FovNormalizer::new(
            initial_fov,
            height,
            options.fov.reference_distance,
        );
        Self {
            options,
            connected: false,
            frozen: true,
            sample: OrientationSample::default(),
            screen: ScreenOrientation::NATURAL,
            viewport: Vec2::new(width, height),
            interaction: Interaction::Auto,
            device_rotation: None,
            initial_fov,
            fov_normalizer,
            pending_fov: None,
            events: EventBus::new(),
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Start accepting events and clear the freeze flag. Calling it again
    /// while connected does nothing.
    pub fn connect(&mut self) {
        if self.connected {
            return;
        }
        self.connected = true;
        self.frozen = false;
        log::debug!("device orientation controller connected");
    }

    /// Stop accepting events and set the freeze flag. A gesture in
    /// progress loses its input source and ends here. Calling it again
    /// while disconnected does nothing.
    pub fn disconnect(&mut self) {
        if !self.connected {
            return;
        }
        self.end_interaction();
        self.frozen = true;
        self.connected = false;
        log::debug!("device orientation controller disconnected");
    }

    /// Whether the controller is accepting events.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Suppress (or resume) automatic orientation writes.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    /// Whether automatic orientation writes are suppressed.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    // ── Configuration ────────────────────────────────────────────────────

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options. A gesture in progress keeps its baseline.
    pub fn set_options(&mut self, options: Options) {
        self.options = options.sanitized();
        self.fov_normalizer = FovNormalizer::new(
            self.initial_fov,
            self.fov_normalizer.initial_height(),
            self.options.fov.reference_distance,
        );
    }

    /// Enable or disable drag-to-rotate. Only gates new gestures.
    pub fn set_rotate_enabled(&mut self, enabled: bool) {
        self.options.gestures.enable_rotate = enabled;
    }

    /// Enable or disable pinch-to-zoom. Only gates new gestures.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.options.gestures.enable_zoom = enabled;
    }

    // ── State queries ────────────────────────────────────────────────────

    /// Current control mode.
    #[must_use]
    pub fn mode(&self) -> ControlMode {
        self.interaction.mode()
    }

    /// Current control state, including the active gesture's baseline.
    #[must_use]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Latest sensor sample.
    #[must_use]
    pub fn sample(&self) -> &OrientationSample {
        &self.sample
    }

    /// Current screen orientation.
    #[must_use]
    pub fn screen_orientation(&self) -> ScreenOrientation {
        self.screen
    }

    /// Current viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Camera rotation from the most recent sample that carried data.
    #[must_use]
    pub fn device_rotation(&self) -> Option<Quat> {
        self.device_rotation
    }

    // ── Notifications ────────────────────────────────────────────────────

    /// Register `listener` for `event`. Listeners receive the controller
    /// that emitted the notification.
    pub fn subscribe<F>(
        &mut self,
        event: ControllerEvent,
        listener: F,
    ) -> SubscriptionId
    where
        F: FnMut(ControllerEvent, &Self) + 'static,
    {
        self.events.subscribe(event, listener)
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    fn emit(&mut self, event: ControllerEvent) {
        log::trace!("emit {event}");
        // Listeners borrow the controller, so the bus is moved out while
        // they run.
        let mut events = std::mem::take(&mut self.events);
        events.dispatch(event, self);
        self.events = events;
    }

    // ── Update cycle ─────────────────────────────────────────────────────

    /// Write this frame's orientation and field of view to `camera`.
    ///
    /// In [`ControlMode::Auto`] the latest sensor rotation is written
    /// unless frozen or no sample with data has arrived yet. During a
    /// gesture the gesture's output is written instead. Field-of-view
    /// changes scheduled by event handlers are flushed here.
    pub fn update(&mut self, camera: &mut impl CameraHandle) {
        if !self.connected {
            return;
        }
        self.refresh_device_rotation();

        if let Some(fov) = self.pending_fov.take() {
            apply_fov(camera, fov);
        }

        let heading_roll = self
            .device_rotation
            .filter(|_| self.options.gestures.preserve_heading)
            .map(view_roll);

        match &mut self.interaction {
            Interaction::Auto => {
                if self.frozen {
                    return;
                }
                if let Some(target) = self.device_rotation {
                    let smoothing = self.options.transform.smoothing;
                    let orientation = if smoothing > 0.0 {
                        camera.orientation().slerp(target, smoothing)
                    } else {
                        target
                    };
                    camera.set_orientation(orientation);
                }
            }
            Interaction::Rotate(gesture) => {
                let mut orientation = match heading_roll {
                    Some(roll) => {
                        gesture.set_baseline(with_view_roll(
                            gesture.baseline(),
                            roll,
                        ));
                        with_view_roll(gesture.rotation(), roll)
                    }
                    None => gesture.rotation(),
                };
                if !orientation.is_finite() {
                    orientation = gesture.baseline();
                }
                camera.set_orientation(orientation);
            }
            Interaction::Zoom(gesture) => {
                if let Some(fov) = gesture.fov() {
                    if camera.fov() != Some(fov) {
                        apply_fov(camera, fov);
                    }
                }
                if let Some(roll) = heading_roll {
                    let orientation =
                        with_view_roll(gesture.baseline_orientation(), roll);
                    gesture.set_baseline_orientation(orientation);
                    camera.set_orientation(orientation);
                }
            }
        }
    }

    fn refresh_device_rotation(&mut self) {
        if !self.sample.has_data() {
            return;
        }
        let rotation = compute_orientation(
            DeviceAngles::from_sample(&self.sample),
            self.screen,
            TransformConfig::from(&self.options.transform),
        );
        log::trace!("device rotation {rotation:?}");
        self.device_rotation = Some(rotation);
    }

    /// Field of view to return to when a pinch ends or the viewport
    /// resizes.
    fn resting_fov(&self, baseline_fov: f32) -> f32 {
        if self.options.fov.normalize_on_resize {
            self.fov_normalizer.normalized_fov(self.viewport.y)
        } else {
            baseline_fov
        }
    }
}

fn apply_fov(camera: &mut impl CameraHandle, fov: f32) {
    camera.set_fov(fov);
    camera.update_projection();
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::camera::PerspectiveCamera;
    use crate::gesture::ZoomGesture;
    use crate::options::ZoomEndPolicy;

    const EPS: f32 = 1e-5;

    /// Camera that counts writes.
    #[derive(Default)]
    struct RecordingCamera {
        inner: PerspectiveCamera,
        orientation_writes: usize,
        fov_writes: usize,
        projection_updates: usize,
    }

    impl CameraHandle for RecordingCamera {
        fn orientation(&self) -> Quat {
            self.inner.orientation()
        }

        fn set_orientation(&mut self, orientation: Quat) {
            self.orientation_writes += 1;
            self.inner.set_orientation(orientation);
        }

        fn fov(&self) -> Option<f32> {
            self.inner.fov()
        }

        fn set_fov(&mut self, fov: f32) {
            self.fov_writes += 1;
            self.inner.set_fov(fov);
        }

        fn update_projection(&mut self) {
            self.projection_updates += 1;
            self.inner.update_projection();
        }
    }

    fn connected(camera: &impl CameraHandle) -> DeviceOrientationController {
        let mut controller =
            DeviceOrientationController::new(camera, 1200.0, 800.0);
        controller.connect();
        controller
    }

    fn record_events(
        controller: &mut DeviceOrientationController,
    ) -> Rc<RefCell<Vec<ControllerEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        for event in ControllerEvent::ALL {
            let log = Rc::clone(&seen);
            let _id = controller.subscribe(event, move |event, _| {
                log.borrow_mut().push(event);
            });
        }
        seen
    }

    #[test]
    fn starts_disconnected_and_frozen() {
        let camera = PerspectiveCamera::default();
        let controller =
            DeviceOrientationController::new(&camera, 1200.0, 800.0);
        assert!(!controller.is_connected());
        assert!(controller.is_frozen());
        assert_eq!(controller.mode(), ControlMode::Auto);
    }

    #[test]
    fn connect_and_disconnect_are_idempotent() {
        let camera = PerspectiveCamera::default();
        let mut controller =
            DeviceOrientationController::new(&camera, 1200.0, 800.0);

        controller.disconnect();
        assert!(!controller.is_connected());

        controller.connect();
        controller.connect();
        assert!(controller.is_connected());
        assert!(!controller.is_frozen());

        controller.disconnect();
        controller.disconnect();
        assert!(!controller.is_connected());
        assert!(controller.is_frozen());
    }

    #[test]
    fn automatic_update_writes_sensor_rotation() {
        let mut camera = RecordingCamera::default();
        let mut controller = connected(&camera);
        controller.on_device_orientation(OrientationSample::new(90.0, 0.0, 0.0));
        controller.update(&mut camera);

        let expected = Quat::from_xyzw(-0.5, 0.5, 0.5, 0.5);
        assert!(camera.orientation().abs_diff_eq(expected, EPS));
        assert_eq!(camera.orientation_writes, 1);
    }

    #[test]
    fn all_zero_sample_skips_write() {
        let mut camera = RecordingCamera::default();
        camera.inner.orientation = Quat::from_rotation_y(0.3);
        let mut controller = connected(&camera);
        controller.on_device_orientation(OrientationSample::new(0.0, 0.0, 0.0));
        controller.update(&mut camera);

        assert_eq!(camera.orientation_writes, 0);
        assert!(camera
            .orientation()
            .abs_diff_eq(Quat::from_rotation_y(0.3), EPS));
    }

    #[test]
    fn frozen_controller_skips_automatic_write() {
        let mut camera = RecordingCamera::default();
        let mut controller = connected(&camera);
        controller.set_frozen(true);
        controller.on_device_orientation(OrientationSample::new(45.0, 10.0, 0.0));
        controller.update(&mut camera);
        assert_eq!(camera.orientation_writes, 0);
        // The rotation is still tracked for when the freeze lifts
        assert!(controller.device_rotation().is_some());

        controller.set_frozen(false);
        controller.update(&mut camera);
        assert_eq!(camera.orientation_writes, 1);
    }

    #[test]
    fn screen_orientation_is_applied_to_next_update() {
        let mut camera = PerspectiveCamera::default();
        let mut controller = connected(&camera);
        let seen = record_events(&mut controller);

        controller.on_device_orientation(OrientationSample::new(30.0, 60.0, 0.0));
        controller.on_screen_orientation(-90);
        controller.update(&mut camera);

        assert_eq!(controller.screen_orientation().degrees(), 270);
        let expected = compute_orientation(
            DeviceAngles::from_sample(&OrientationSample::new(30.0, 60.0, 0.0)),
            ScreenOrientation::from_degrees(270),
            TransformConfig::default(),
        );
        assert!(camera.orientation().abs_diff_eq(expected, EPS));
        assert_eq!(
            *seen.borrow(),
            vec![ControllerEvent::ScreenOrientationChanged]
        );
    }

    #[test]
    fn smoothing_moves_part_way() {
        let mut camera = PerspectiveCamera::default();
        let mut options = Options::default();
        options.transform.smoothing = 0.5;
        let mut controller =
            DeviceOrientationController::with_options(&camera, 1200.0, 800.0, options);
        controller.connect();
        controller.on_device_orientation(OrientationSample::new(90.0, 0.0, 0.0));
        controller.update(&mut camera);

        let target = Quat::from_xyzw(-0.5, 0.5, 0.5, 0.5);
        let expected = Quat::IDENTITY.slerp(target, 0.5);
        assert!(camera.orientation().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn rotate_gesture_overrides_sensor() {
        let mut camera = PerspectiveCamera::default();
        let mut controller = connected(&camera);
        controller.on_device_orientation(OrientationSample::new(90.0, 0.0, 0.0));
        controller.update(&mut camera);
        let baseline = camera.orientation();

        controller.on_pointer_down(Vec2::new(100.0, 100.0), &camera);
        controller.on_pointer_move(Vec2::new(200.0, 150.0));
        // A new sample during the drag must not fight it
        controller.on_device_orientation(OrientationSample::new(10.0, 50.0, 5.0));
        controller.update(&mut camera);

        let expected = baseline
            * Quat::from_rotation_y((-10f32).to_radians())
            * Quat::from_rotation_x((-5f32).to_radians());
        assert!(camera.orientation().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn rotate_gesture_preserving_heading_follows_device_roll() {
        let mut camera = PerspectiveCamera::default();
        let mut options = Options::default();
        options.gestures.preserve_heading = true;
        let mut controller =
            DeviceOrientationController::with_options(&camera, 1200.0, 800.0, options);
        controller.connect();

        controller.on_pointer_down(Vec2::new(0.0, 0.0), &camera);
        controller.on_pointer_move(Vec2::new(-50.0, 30.0));
        controller.on_device_orientation(OrientationSample::new(40.0, 70.0, 0.0));
        controller.update(&mut camera);

        let device_roll = view_roll(controller.device_rotation().unwrap_or_default());
        assert!((view_roll(camera.orientation()) - device_roll).abs() < 1e-4);
    }

    #[test]
    fn zoom_writes_fov_and_updates_projection() {
        let mut camera = RecordingCamera::default();
        let mut controller = connected(&camera);

        let a = Vec2::new(100.0, 400.0);
        controller.on_touch_start(&[a, Vec2::new(200.0, 400.0)], &camera);
        controller.on_touch_move(&[a, Vec2::new(300.0, 400.0)]);
        controller.update(&mut camera);

        assert_eq!(camera.fov(), Some(37.5));
        assert_eq!(camera.fov_writes, 1);
        assert_eq!(camera.projection_updates, 1);

        // Same distance next frame: nothing to write
        controller.update(&mut camera);
        assert_eq!(camera.fov_writes, 1);
    }

    #[test]
    fn zoom_end_restores_fov_on_next_update() {
        let mut camera = PerspectiveCamera::default();
        let mut controller = connected(&camera);

        let a = Vec2::new(100.0, 400.0);
        controller.on_touch_start(&[a, Vec2::new(200.0, 400.0)], &camera);
        controller.on_touch_move(&[a, Vec2::new(300.0, 400.0)]);
        controller.update(&mut camera);
        controller.on_touch_end(&[]);
        // Handlers never write to the camera
        assert_eq!(camera.fov(), Some(37.5));

        controller.update(&mut camera);
        assert!((camera.fovy - 75.0).abs() < 1e-3);
    }

    #[test]
    fn repinch_within_a_frame_starts_from_restored_fov() {
        let mut camera = PerspectiveCamera::default();
        let mut controller = connected(&camera);

        let a = Vec2::new(100.0, 400.0);
        let b = Vec2::new(300.0, 400.0);
        controller.on_touch_start(&[a, Vec2::new(200.0, 400.0)], &camera);
        controller.on_touch_move(&[a, b]);
        controller.update(&mut camera);
        assert_eq!(camera.fov(), Some(37.5));

        // One finger lifts and lands again before the next frame
        controller.on_touch_end(&[a]);
        controller.on_touch_start(&[a, b], &camera);
        let baseline = controller
            .interaction()
            .zoom_gesture()
            .map(ZoomGesture::baseline_fov);
        assert!(baseline.is_some_and(|fov| (fov - 75.0).abs() < 1e-3));

        controller.update(&mut camera);
        assert!((camera.fovy - 75.0).abs() < 1e-3);
    }

    #[test]
    fn pinch_preserving_heading_follows_device_roll() {
        let mut camera = PerspectiveCamera::default();
        let mut options = Options::default();
        options.gestures.preserve_heading = true;
        let mut controller =
            DeviceOrientationController::with_options(&camera, 1200.0, 800.0, options);
        controller.connect();

        controller.on_touch_start(&[Vec2::ZERO, Vec2::new(100.0, 0.0)], &camera);
        controller.on_device_orientation(OrientationSample::new(40.0, 70.0, 0.0));
        controller.update(&mut camera);

        assert_eq!(controller.mode(), ControlMode::ManualZoom);
        let device_roll = view_roll(controller.device_rotation().unwrap_or_default());
        assert!((view_roll(camera.orientation()) - device_roll).abs() < 1e-4);
        let baseline = controller
            .interaction()
            .zoom_gesture()
            .map(ZoomGesture::baseline_orientation);
        assert_eq!(baseline, Some(camera.orientation()));
    }

    #[test]
    fn resize_during_pinch_queues_no_fov_write() {
        let mut camera = RecordingCamera::default();
        let mut controller = connected(&camera);

        controller.on_touch_start(&[Vec2::ZERO, Vec2::new(100.0, 0.0)], &camera);
        controller.on_resize(1200.0, 1600.0);
        controller.update(&mut camera);

        assert_eq!(camera.fov_writes, 0);
        assert_eq!(camera.fov(), Some(75.0));
    }

    #[test]
    fn zoom_end_can_keep_fov() {
        let mut camera = PerspectiveCamera::default();
        let mut options = Options::default();
        options.fov.zoom_end = ZoomEndPolicy::Keep;
        let mut controller =
            DeviceOrientationController::with_options(&camera, 1200.0, 800.0, options);
        controller.connect();

        let a = Vec2::new(0.0, 0.0);
        controller.on_touch_start(&[a, Vec2::new(100.0, 0.0)], &camera);
        controller.on_touch_move(&[a, Vec2::new(400.0, 0.0)]);
        controller.update(&mut camera);
        controller.on_touch_end(&[]);
        controller.update(&mut camera);

        assert_eq!(camera.fovy, 18.75);
    }

    #[test]
    fn resize_normalizes_fov() {
        let mut camera = PerspectiveCamera::default();
        let mut controller = connected(&camera);
        controller.on_resize(1200.0, 1600.0);
        controller.update(&mut camera);

        let expected = FovNormalizer::new(75.0, 800.0, 2000.0).normalized_fov(1600.0);
        assert!((camera.fovy - expected).abs() < 1e-4);
        assert!(camera.fovy > 75.0);
    }

    #[test]
    fn disconnected_controller_writes_nothing() {
        let mut camera = RecordingCamera::default();
        let mut controller = connected(&camera);
        controller.disconnect();
        let seen = record_events(&mut controller);

        controller.on_device_orientation(OrientationSample::new(90.0, 10.0, 0.0));
        controller.on_screen_orientation(90);
        controller.on_compass_needs_calibration();
        controller.on_pointer_down(Vec2::new(5.0, 5.0), &camera);
        controller.on_pointer_move(Vec2::new(50.0, 5.0));
        controller.on_touch_start(&[Vec2::ZERO, Vec2::ONE], &camera);
        controller.on_resize(10.0, 10.0);
        controller.update(&mut camera);

        assert!(seen.borrow().is_empty());
        assert_eq!(camera.orientation_writes, 0);
        assert_eq!(camera.fov_writes, 0);
        assert_eq!(controller.mode(), ControlMode::Auto);
    }

    #[test]
    fn disconnect_ends_active_gesture() {
        let camera = PerspectiveCamera::default();
        let mut controller = connected(&camera);
        let seen = record_events(&mut controller);

        controller.on_pointer_down(Vec2::new(5.0, 5.0), &camera);
        controller.disconnect();

        assert_eq!(controller.mode(), ControlMode::Auto);
        assert_eq!(
            *seen.borrow(),
            vec![
                ControllerEvent::InteractionStart,
                ControllerEvent::RotateStart,
                ControllerEvent::InteractionEnd,
                ControllerEvent::RotateEnd,
            ]
        );
    }

    #[test]
    fn set_options_is_sanitized_and_applies_to_new_gestures() {
        let camera = PerspectiveCamera::default();
        let mut controller = connected(&camera);
        let mut options = Options::default();
        options.gestures.enable_rotate = false;
        options.transform.smoothing = -3.0;
        controller.set_options(options);

        assert_eq!(controller.options().transform.smoothing, 0.0);
        controller.on_pointer_down(Vec2::ZERO, &camera);
        assert_eq!(controller.mode(), ControlMode::Auto);
    }

    #[test]
    fn listeners_see_the_emitting_controller() {
        let camera = PerspectiveCamera::default();
        let mut controller = connected(&camera);
        let modes = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&modes);
        let _id = controller.subscribe(ControllerEvent::ZoomStart, move |_, source| {
            log.borrow_mut().push(source.mode());
        });

        controller.on_touch_start(&[Vec2::ZERO, Vec2::new(10.0, 0.0)], &camera);
        assert_eq!(*modes.borrow(), vec![ControlMode::ManualZoom]);
    }
}
