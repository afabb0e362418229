//! Conversions from browser events (`web-sys`) into controller inputs.
//!
//! Event listener registration stays with the embedder; these helpers
//! only read the event payloads.

use glam::Vec2;
use web_sys::{DeviceOrientationEvent, MouseEvent, TouchEvent, TouchList};

use super::event::InputEvent;
use crate::orientation::OrientationSample;

impl From<&DeviceOrientationEvent> for OrientationSample {
    fn from(event: &DeviceOrientationEvent) -> Self {
        Self {
            alpha: event.alpha().map(|a| a as f32),
            beta: event.beta().map(|b| b as f32),
            gamma: event.gamma().map(|g| g as f32),
            absolute: event.absolute(),
            compass_heading: None,
            compass_accuracy: None,
        }
    }
}

/// Page position of a mouse event.
#[must_use]
pub fn pointer_position(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.page_x() as f32, event.page_y() as f32)
}

/// Page positions of every touch in a list.
#[must_use]
pub fn touch_positions(list: &TouchList) -> Vec<Vec2> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|touch| Vec2::new(touch.page_x() as f32, touch.page_y() as f32))
        .collect()
}

/// `mousedown` as a controller input.
#[must_use]
pub fn mouse_down(event: &MouseEvent) -> InputEvent {
    let p = pointer_position(event);
    InputEvent::PointerDown { x: p.x, y: p.y }
}

/// `mousemove` as a controller input.
#[must_use]
pub fn mouse_move(event: &MouseEvent) -> InputEvent {
    let p = pointer_position(event);
    InputEvent::PointerMove { x: p.x, y: p.y }
}

/// `touchstart` as a controller input.
#[must_use]
pub fn touch_start(event: &TouchEvent) -> InputEvent {
    InputEvent::TouchStart {
        touches: touch_positions(&event.touches()),
    }
}

/// `touchmove` as a controller input.
#[must_use]
pub fn touch_move(event: &TouchEvent) -> InputEvent {
    InputEvent::TouchMove {
        touches: touch_positions(&event.touches()),
    }
}

/// `touchend`/`touchcancel` as a controller input. `touches` on these
/// events already excludes the lifted finger.
#[must_use]
pub fn touch_end(event: &TouchEvent) -> InputEvent {
    InputEvent::TouchEnd {
        touches: touch_positions(&event.touches()),
    }
}
