use crate::coords::Vec2;

use super::types::{InputEvent, Modifiers};

/// Events received since the last frame, in arrival order.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Held modifiers and the last pointer position, for one window.
///
/// Platform events that carry no position of their own (winit's mouse
/// buttons) are stamped from here.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    /// `None` while the cursor is outside the window.
    pub pointer: Option<Vec2>,
}

impl InputState {
    /// Folds `event` into the held state and queues it on `frame`.
    pub fn record(&mut self, frame: &mut InputFrame, event: InputEvent) {
        match event {
            InputEvent::Key { modifiers, .. } | InputEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
            }
            InputEvent::PointerMoved { position } => self.pointer = Some(position),
            InputEvent::PointerLeft => self.pointer = None,
            InputEvent::PointerButton { position, .. } => self.pointer = Some(position),
            InputEvent::Focused(_) | InputEvent::Touch { .. } => {}
        }
        frame.events.push(event);
    }

    /// Pointer position for events that carry none of their own.
    pub fn pointer_or_origin(&self) -> Vec2 {
        self.pointer.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    fn button(pressed: bool) -> InputEvent {
        InputEvent::PointerButton {
            button: MouseButton::Left,
            pressed,
            position: Vec2::new(4.0, 5.0),
        }
    }

    #[test]
    fn events_queue_in_order_until_cleared() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.record(&mut frame, InputEvent::PointerMoved { position: Vec2::new(1.0, 2.0) });
        state.record(&mut frame, button(true));
        assert_eq!(frame.events.len(), 2);
        assert!(matches!(frame.events[0], InputEvent::PointerMoved { .. }));

        frame.clear();
        assert!(frame.is_empty());
    }

    #[test]
    fn button_press_moves_pointer() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.record(&mut frame, button(true));
        assert_eq!(state.pointer_or_origin(), Vec2::new(4.0, 5.0));
    }

    #[test]
    fn modifier_changes_are_held() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let shift = Modifiers { shift: true, ..Modifiers::default() };
        state.record(&mut frame, InputEvent::ModifiersChanged(shift));
        assert_eq!(state.modifiers, shift);
    }

    #[test]
    fn leaving_the_window_forgets_the_pointer() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.record(&mut frame, InputEvent::PointerMoved { position: Vec2::new(9.0, 9.0) });
        state.record(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_or_origin(), Vec2::zero());
    }
}
