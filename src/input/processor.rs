//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection, modifier keys). It is the only thing between raw window
//! events and [`NavEngine::execute`](crate::NavEngine::execute).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::mouse::{PointerState, Release};
use crate::engine::command::NavCommand;

/// Converts raw window events into [`NavCommand`]s.
///
/// A left press and release with no drag in between is a click. Dragging
/// with the left button rotates the camera, or pans it while shift is held.
/// The wheel zooms.
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    pointer: PointerState,
    shift_pressed: bool,
}

impl InputProcessor {
    /// Create a processor with no button held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<NavCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(Vec2::new(x, y)),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(NavCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    fn handle_cursor_moved(&mut self, position: Vec2) -> Option<NavCommand> {
        let delta = self.pointer.move_to(position);
        if !self.pointer.is_pressed() || delta == Vec2::ZERO {
            return None;
        }
        if self.shift_pressed {
            Some(NavCommand::PanCamera { delta })
        } else {
            Some(NavCommand::RotateCamera { delta })
        }
    }

    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) -> Option<NavCommand> {
        if button != MouseButton::Left {
            return None;
        }
        if pressed {
            self.pointer.press();
            return None;
        }
        match self.pointer.release() {
            Release::Click(at) => Some(NavCommand::Click { x: at.x, y: at.y }),
            Release::NoAction => None,
        }
    }
}
