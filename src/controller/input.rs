//! Event handlers: sensor, screen, viewport and gesture transitions.
//!
//! Every handler is a no-op while the controller is disconnected. None of
//! them write to the camera; gesture starts only read its current
//! orientation and field of view for the baseline.

use glam::Vec2;

use super::events::ControllerEvent;
use super::state::Interaction;
use super::DeviceOrientationController;
use crate::camera::CameraHandle;
use crate::gesture::{scroll_speed, RotateGesture, ZoomGesture};
use crate::input::InputEvent;
use crate::options::ZoomEndPolicy;
use crate::orientation::{OrientationSample, ScreenOrientation};

impl DeviceOrientationController {
    /// Dispatch a platform-agnostic input event to its handler.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        camera: &impl CameraHandle,
    ) {
        match event {
            InputEvent::DeviceOrientation(sample) => {
                self.on_device_orientation(*sample);
            }
            InputEvent::ScreenOrientation { degrees } => {
                self.on_screen_orientation(*degrees);
            }
            InputEvent::CompassNeedsCalibration => {
                self.on_compass_needs_calibration();
            }
            InputEvent::Resized { width, height } => {
                self.on_resize(*width, *height);
            }
            InputEvent::PointerDown { x, y } => {
                self.on_pointer_down(Vec2::new(*x, *y), camera);
            }
            InputEvent::PointerMove { x, y } => {
                self.on_pointer_move(Vec2::new(*x, *y));
            }
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::TouchStart { touches } => {
                self.on_touch_start(touches, camera);
            }
            InputEvent::TouchMove { touches } => self.on_touch_move(touches),
            InputEvent::TouchEnd { touches } => self.on_touch_end(touches),
        }
    }

    // ── Sensor, screen and viewport ──────────────────────────────────────

    /// Record a new sensor reading. Replaces the previous one.
    pub fn on_device_orientation(&mut self, sample: OrientationSample) {
        if !self.connected {
            return;
        }
        log::trace!(
            "sample alpha={:?} beta={:?} gamma={:?}",
            sample.alpha,
            sample.beta,
            sample.gamma
        );
        self.sample = sample;
    }

    /// Record a new screen orientation (degrees; -90 is read as 270).
    pub fn on_screen_orientation(&mut self, degrees: i32) {
        if !self.connected {
            return;
        }
        self.screen = ScreenOrientation::from_degrees(degrees);
        log::debug!("screen orientation {}°", self.screen.degrees());
        self.emit(ControllerEvent::ScreenOrientationChanged);
    }

    /// Forward a platform compass-calibration request to listeners.
    pub fn on_compass_needs_calibration(&mut self) {
        if !self.connected {
            return;
        }
        log::info!("compass needs calibration");
        self.emit(ControllerEvent::CompassNeedsCalibration);
    }

    /// Record a new viewport size and schedule field-of-view
    /// normalization for the next update.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        if !self.connected {
            return;
        }
        self.viewport = Vec2::new(width, height);
        let zooming = matches!(self.interaction, Interaction::Zoom(_));
        if self.options.fov.normalize_on_resize && !zooming {
            self.pending_fov =
                Some(self.fov_normalizer.normalized_fov(self.viewport.y));
        }
    }

    // ── Pointer ──────────────────────────────────────────────────────────

    /// Primary pointer pressed: start a drag if the sensor has control.
    pub fn on_pointer_down(
        &mut self,
        position: Vec2,
        camera: &impl CameraHandle,
    ) {
        if self.can_start_rotate() {
            self.start_rotate(position, camera);
        }
    }

    /// Pointer moved: track the drag.
    pub fn on_pointer_move(&mut self, position: Vec2) {
        if !self.connected {
            return;
        }
        if let Interaction::Rotate(gesture) = &mut self.interaction {
            gesture.move_to(position);
        }
    }

    /// Primary pointer released: end the drag.
    pub fn on_pointer_up(&mut self) {
        if !self.connected {
            return;
        }
        if matches!(self.interaction, Interaction::Rotate(_)) {
            self.end_interaction();
        }
    }

    // ── Touch ────────────────────────────────────────────────────────────

    /// Fingers touched down. `touches` is the full active set: one finger
    /// starts a drag, two start a pinch. Ignored while another gesture is
    /// in progress.
    pub fn on_touch_start(
        &mut self,
        touches: &[Vec2],
        camera: &impl CameraHandle,
    ) {
        match *touches {
            [position] if self.can_start_rotate() => {
                self.start_rotate(position, camera);
            }
            [a, b] if self.can_start_zoom() => {
                self.start_zoom(a, b, camera);
            }
            _ => {}
        }
    }

    /// Fingers moved. A drag with no finger left, or a pinch with fewer
    /// than two, ends.
    pub fn on_touch_move(&mut self, touches: &[Vec2]) {
        if !self.connected {
            return;
        }
        let lost_finger = match &mut self.interaction {
            Interaction::Rotate(gesture) => match *touches {
                [position, ..] => {
                    gesture.move_to(position);
                    false
                }
                [] => true,
            },
            Interaction::Zoom(gesture) => match *touches {
                [a, b, ..] => {
                    gesture.move_to(a, b);
                    false
                }
                _ => true,
            },
            Interaction::Auto => false,
        };
        if lost_finger {
            log::debug!("{:?} lost its fingers mid-gesture", self.mode());
            self.end_interaction();
        }
    }

    /// Fingers lifted. `touches` holds the fingers still down: a drag ends
    /// when none are left, a pinch when fewer than two are.
    pub fn on_touch_end(&mut self, touches: &[Vec2]) {
        if !self.connected {
            return;
        }
        let ended = match self.interaction {
            Interaction::Rotate(_) => touches.is_empty(),
            Interaction::Zoom(_) => touches.len() < 2,
            Interaction::Auto => false,
        };
        if ended {
            self.end_interaction();
        }
    }

    // ── Transitions ──────────────────────────────────────────────────────

    fn can_start_rotate(&self) -> bool {
        self.connected
            && self.options.gestures.enable_rotate
            && matches!(self.interaction, Interaction::Auto)
    }

    fn can_start_zoom(&self) -> bool {
        self.connected
            && self.options.gestures.enable_zoom
            && matches!(self.interaction, Interaction::Auto)
    }

    fn start_rotate(&mut self, position: Vec2, camera: &impl CameraHandle) {
        let speed = scroll_speed(self.viewport, &self.options.gestures);
        self.interaction = Interaction::Rotate(RotateGesture::start(
            position,
            camera.orientation(),
            speed,
        ));
        log::debug!("manual rotate started at {position}");
        self.emit(ControllerEvent::InteractionStart);
        self.emit(ControllerEvent::RotateStart);
    }

    fn start_zoom(&mut self, a: Vec2, b: Vec2, camera: &impl CameraHandle) {
        // A restore queued by the previous pinch has not reached the camera
        // yet when fingers land again within one frame.
        let fov = self
            .pending_fov
            .or_else(|| camera.fov())
            .unwrap_or(self.options.fov.default_fov);
        self.interaction = Interaction::Zoom(ZoomGesture::start(
            a,
            b,
            fov,
            camera.orientation(),
        ));
        log::debug!("manual zoom started at {:.1}px", a.distance(b));
        self.emit(ControllerEvent::InteractionStart);
        self.emit(ControllerEvent::ZoomStart);
    }

    /// Return control to the sensor, dropping the gesture baseline.
    pub(super) fn end_interaction(&mut self) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Auto => {}
            Interaction::Rotate(_) => {
                log::debug!("manual rotate ended");
                self.emit(ControllerEvent::InteractionEnd);
                self.emit(ControllerEvent::RotateEnd);
            }
            Interaction::Zoom(gesture) => {
                if self.options.fov.zoom_end == ZoomEndPolicy::Restore {
                    self.pending_fov =
                        Some(self.resting_fov(gesture.baseline_fov()));
                }
                log::debug!("manual zoom ended");
                self.emit(ControllerEvent::InteractionEnd);
                self.emit(ControllerEvent::ZoomEnd);
            }
        }
    }
}
