use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::orientation::OrientationSample;

/// Platform-agnostic controller inputs.
///
/// Everything the sensor, screen, window and pointer sources can report
/// is one of these. They are fed into
/// [`DeviceOrientationController::handle_event`](crate::controller::DeviceOrientationController::handle_event)
/// and serialize with a `type` tag so replay scripts stay readable:
///
/// ```toml
/// events = [
///     { type = "device_orientation", alpha = 90.0, beta = 0.0, gamma = 0.0 },
///     { type = "pointer_down", x = 100.0, y = 100.0 },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// New sensor reading.
    DeviceOrientation(OrientationSample),
    /// Viewport rotated relative to the device.
    ScreenOrientation {
        /// Platform angle in degrees (-90 is accepted for 270).
        degrees: i32,
    },
    /// The platform asked for the compass to be calibrated.
    CompassNeedsCalibration,
    /// Viewport resized.
    Resized {
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
    },
    /// Primary pointer pressed.
    PointerDown {
        /// Horizontal position in viewport pixels.
        x: f32,
        /// Vertical position in viewport pixels.
        y: f32,
    },
    /// Pointer moved.
    PointerMove {
        /// Horizontal position in viewport pixels.
        x: f32,
        /// Vertical position in viewport pixels.
        y: f32,
    },
    /// Primary pointer released.
    PointerUp,
    /// A finger touched down; `touches` holds every active finger.
    TouchStart {
        /// Active touch positions in viewport pixels.
        touches: Vec<Vec2>,
    },
    /// Fingers moved; `touches` holds every active finger.
    TouchMove {
        /// Active touch positions in viewport pixels.
        touches: Vec<Vec2>,
    },
    /// A finger lifted; `touches` holds the fingers still down.
    TouchEnd {
        /// Remaining touch positions in viewport pixels.
        touches: Vec<Vec2>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_events_parse_from_json() {
        let events: Vec<InputEvent> = serde_json::from_str(
            r#"[
                {"type": "device_orientation", "alpha": 90.0, "beta": 0.0},
                {"type": "screen_orientation", "degrees": -90},
                {"type": "pointer_up"},
                {"type": "touch_start", "touches": [[10.0, 20.0], [30.0, 40.0]]}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            events[0],
            InputEvent::DeviceOrientation(OrientationSample {
                alpha: Some(90.0),
                beta: Some(0.0),
                ..OrientationSample::default()
            })
        );
        assert_eq!(events[1], InputEvent::ScreenOrientation { degrees: -90 });
        assert_eq!(events[2], InputEvent::PointerUp);
        assert_eq!(
            events[3],
            InputEvent::TouchStart {
                touches: vec![Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0)],
            }
        );
    }
}
