//! Manual gesture trackers: drag-to-rotate and pinch-to-zoom.
//!
//! Each tracker captures its baseline when it starts and computes its
//! output relative to that baseline, so the result depends only on the
//! start and current pointer positions, never on how many move events
//! arrived in between.

/// Compass heading re-injection during gestures.
pub mod heading;
/// Single-pointer drag rotation.
pub mod rotate;
/// Two-finger pinch zoom.
pub mod zoom;

pub use rotate::{drag_rotation, scroll_speed, RotateGesture};
pub use zoom::ZoomGesture;
