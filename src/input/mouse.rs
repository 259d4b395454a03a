use glam::Vec2;

/// Squared cursor travel, in pixels, above which a press becomes a drag.
const DRAG_THRESHOLD_SQ: f32 = 1.0;

/// What a button release amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Release {
    /// Press and release with no drag in between.
    Click(Vec2),
    /// The press turned into a drag, or there was no matching press.
    NoAction,
}

/// Cursor position and press/drag tracking for the primary button.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointerState {
    pub(crate) position: Vec2,
    pressed: bool,
    dragging: bool,
}

impl PointerState {
    /// Move the cursor and return the delta from the previous position.
    pub(crate) fn move_to(&mut self, position: Vec2) -> Vec2 {
        let delta = position - self.position;
        self.position = position;
        if self.pressed && delta.length_squared() > DRAG_THRESHOLD_SQ {
            self.dragging = true;
        }
        delta
    }

    pub(crate) fn press(&mut self) {
        self.pressed = true;
        self.dragging = false;
    }

    pub(crate) fn release(&mut self) -> Release {
        let was_pressed = std::mem::take(&mut self.pressed);
        let was_dragging = std::mem::take(&mut self.dragging);
        if was_pressed && !was_dragging {
            Release::Click(self.position)
        } else {
            Release::NoAction
        }
    }

    pub(crate) fn is_pressed(&self) -> bool {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_release_in_place_is_a_click() {
        let mut state = PointerState::default();
        let _ = state.move_to(Vec2::new(10.0, 20.0));
        state.press();
        assert_eq!(state.release(), Release::Click(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn sub_pixel_jitter_is_still_a_click() {
        let mut state = PointerState::default();
        state.press();
        let _ = state.move_to(Vec2::new(0.5, 0.5));
        assert!(matches!(state.release(), Release::Click(_)));
    }

    #[test]
    fn drag_suppresses_click() {
        let mut state = PointerState::default();
        state.press();
        let delta = state.move_to(Vec2::new(5.0, 0.0));
        assert_eq!(delta, Vec2::new(5.0, 0.0));
        assert_eq!(state.release(), Release::NoAction);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = PointerState::default();
        assert_eq!(state.release(), Release::NoAction);
    }
}
