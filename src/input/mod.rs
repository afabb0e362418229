//! Input handling: the platform-agnostic event vocabulary and adapters
//! from windowing and browser event types.

/// Platform-agnostic input events.
pub mod event;
/// Browser event conversions.
#[cfg(feature = "web")]
pub mod web;
/// `winit` window event translation.
#[cfg(feature = "winit")]
pub mod window;

pub use event::InputEvent;
#[cfg(feature = "winit")]
pub use window::WinitInputAdapter;
