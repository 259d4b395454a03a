//! Input handling: event types, pointer tracking, and the processor that
//! converts raw window events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Cursor position and click/drag detection.
pub(crate) mod mouse;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
