// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera controller driven by device-orientation sensors, with
//! drag-to-rotate and pinch-to-zoom overrides.
//!
//! Gyrocam turns alpha/beta/gamma readings into a camera rotation, lets the
//! user take over with a one-finger drag or a two-finger pinch, and hands
//! control back to the sensor when the gesture ends.
//!
//! # Key entry points
//!
//! - [`controller::DeviceOrientationController`] - the controller; feed it
//!   [`input::InputEvent`]s and call `update` once per frame
//! - [`orientation::compute_orientation`] - the pure sensor-to-camera
//!   transform
//! - [`camera::CameraHandle`] - what the controller writes to
//! - [`options::Options`] - runtime configuration (transform, gestures,
//!   field of view)
//! - [`replay::ReplayScript`] - scripted event playback, used by the
//!   `gyrocam-replay` binary
//!
//! # Architecture
//!
//! Event handlers only record state: the latest sample, the screen angle,
//! the active gesture and its baseline. All camera writes happen in
//! `update`, so the camera only changes at frame boundaries. Gesture
//! trackers in [`gesture`] compute their
//! output from the start and current pointer positions alone.

pub mod camera;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod input;
pub mod options;
pub mod orientation;
pub mod replay;

pub use camera::{CameraHandle, PerspectiveCamera};
pub use controller::{ControlMode, ControllerEvent, DeviceOrientationController};
pub use error::GyrocamError;
pub use input::InputEvent;
pub use options::Options;
pub use orientation::{OrientationSample, ScreenOrientation};
