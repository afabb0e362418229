//! Translation of `winit` window events into [`InputEvent`]s.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

use super::event::InputEvent;

/// Tracks cursor position and active touches across `winit` events.
///
/// `winit` reports touches one finger at a time while the controller
/// expects the whole active set, so fingers are kept here by id in the
/// order they touched down.
#[derive(Debug, Default, Clone)]
pub struct WinitInputAdapter {
    cursor: Vec2,
    touches: Vec<(u64, Vec2)>,
}

impl WinitInputAdapter {
    /// Adapter with no active touches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one window event, or `None` if the controller does not
    /// care about it.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: size.width as f32,
                height: size.height as f32,
            }),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(InputEvent::PointerMove {
                    x: self.cursor.x,
                    y: self.cursor.y,
                })
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => Some(match state {
                ElementState::Pressed => InputEvent::PointerDown {
                    x: self.cursor.x,
                    y: self.cursor.y,
                },
                ElementState::Released => InputEvent::PointerUp,
            }),
            WindowEvent::Touch(touch) => {
                let position =
                    Vec2::new(touch.location.x as f32, touch.location.y as f32);
                Some(self.track_touch(touch.id, touch.phase, position))
            }
            _ => None,
        }
    }

    fn track_touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        position: Vec2,
    ) -> InputEvent {
        match phase {
            TouchPhase::Started => {
                self.touches.retain(|(existing, _)| *existing != id);
                self.touches.push((id, position));
                InputEvent::TouchStart {
                    touches: self.positions(),
                }
            }
            TouchPhase::Moved => {
                if let Some(entry) =
                    self.touches.iter_mut().find(|(existing, _)| *existing == id)
                {
                    entry.1 = position;
                }
                InputEvent::TouchMove {
                    touches: self.positions(),
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|(existing, _)| *existing != id);
                InputEvent::TouchEnd {
                    touches: self.positions(),
                }
            }
        }
    }

    fn positions(&self) -> Vec<Vec2> {
        self.touches.iter().map(|(_, position)| *position).collect()
    }
}
