use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitButton, Touch, TouchPhase as WinitPhase, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::Window;

use crate::coords::Vec2;
use crate::input::{InputEvent, InputState, Key, KeyState, Modifiers, MouseButton, TouchPhase};

/// `KeyA..=KeyZ` in alphabetical order.
const LETTER_CODES: [KeyCode; 26] = [
    KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE,
    KeyCode::KeyF, KeyCode::KeyG, KeyCode::KeyH, KeyCode::KeyI, KeyCode::KeyJ,
    KeyCode::KeyK, KeyCode::KeyL, KeyCode::KeyM, KeyCode::KeyN, KeyCode::KeyO,
    KeyCode::KeyP, KeyCode::KeyQ, KeyCode::KeyR, KeyCode::KeyS, KeyCode::KeyT,
    KeyCode::KeyU, KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX, KeyCode::KeyY,
    KeyCode::KeyZ,
];

/// Top-row and numpad code for each digit `0..=9`.
const DIGIT_CODES: [(KeyCode, KeyCode); 10] = [
    (KeyCode::Digit0, KeyCode::Numpad0),
    (KeyCode::Digit1, KeyCode::Numpad1),
    (KeyCode::Digit2, KeyCode::Numpad2),
    (KeyCode::Digit3, KeyCode::Numpad3),
    (KeyCode::Digit4, KeyCode::Numpad4),
    (KeyCode::Digit5, KeyCode::Numpad5),
    (KeyCode::Digit6, KeyCode::Numpad6),
    (KeyCode::Digit7, KeyCode::Numpad7),
    (KeyCode::Digit8, KeyCode::Numpad8),
    (KeyCode::Digit9, KeyCode::Numpad9),
];

/// Converts a winit window event into an [`InputEvent`], if it is input.
pub(crate) fn translate_window_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::CursorMoved { position, .. } => InputEvent::PointerMoved {
            position: logical(window, *position),
        },

        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,

        // Button events carry no position in winit 0.30.
        WindowEvent::MouseInput { state: st, button, .. } => InputEvent::PointerButton {
            button: mouse_button(*button),
            pressed: *st == ElementState::Pressed,
            position: state.pointer_or_origin(),
        },

        WindowEvent::Touch(Touch { id, phase, location, .. }) => InputEvent::Touch {
            id: *id,
            phase: touch_phase(*phase),
            position: logical(window, *location),
        },

        WindowEvent::KeyboardInput { event, .. } => InputEvent::Key {
            key: key(event.physical_key),
            state: match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            },
            modifiers: state.modifiers,
            repeat: event.repeat,
        },

        WindowEvent::ModifiersChanged(m) => InputEvent::ModifiersChanged(modifiers(m.state())),

        WindowEvent::Focused(f) => InputEvent::Focused(*f),

        _ => return None,
    };
    Some(ev)
}

fn logical(window: &Window, pos: PhysicalPosition<f64>) -> Vec2 {
    let p = pos.to_logical::<f64>(window.scale_factor());
    Vec2::new(p.x as f32, p.y as f32)
}

fn touch_phase(phase: WinitPhase) -> TouchPhase {
    match phase {
        WinitPhase::Started => TouchPhase::Started,
        WinitPhase::Moved => TouchPhase::Moved,
        WinitPhase::Ended => TouchPhase::Ended,
        WinitPhase::Cancelled => TouchPhase::Cancelled,
    }
}

fn mouse_button(b: WinitButton) -> MouseButton {
    match b {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Middle => MouseButton::Middle,
        WinitButton::Back => MouseButton::Other(3),
        WinitButton::Forward => MouseButton::Other(4),
        WinitButton::Other(v) => MouseButton::Other(v),
    }
}

fn modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn key(pk: PhysicalKey) -> Key {
    // Native codes have no stable numeric form in winit 0.30.
    let PhysicalKey::Code(code) = pk else {
        return Key::Unknown(0);
    };

    if let Some(i) = LETTER_CODES.iter().position(|&c| c == code) {
        return Key::Letter(char::from(b'a' + i as u8));
    }
    if let Some(d) = DIGIT_CODES.iter().position(|&(top, pad)| code == top || code == pad) {
        return Key::Digit(d as u8);
    }

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Space => Key::Space,
        KeyCode::Delete => Key::Delete,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,
        other => Key::Unknown(other as u32),
    }
}
