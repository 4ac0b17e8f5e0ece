//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit window events into `NativeEvent`s.
//
// Architecture:
//   Winit WindowEvent → map_window_event() → NativeEvent → event queue
//
// One Winit event can yield two native events: a key press that carries
// text produces `KeyDown` followed by `TextInput`. Unmapped physical keys
// (F13-F24, media keys, exotic keyboards) are filtered out.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::*;
use winit::{
    event::{ElementState, Ime, KeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use super::native_event::NativeEvent;
use crate::input::{KeyCode, MouseCode};

//=== Event Processing ====================================================

/// Maps one Winit window event, handing every resulting native event to
/// `emit` in order. Events with no native counterpart emit nothing.
pub(crate) fn map_window_event(event: WindowEvent, mut emit: impl FnMut(NativeEvent)) {
    match event {
        //--- Window Lifecycle ----------------------------------------------
        WindowEvent::CloseRequested | WindowEvent::Destroyed => emit(NativeEvent::Quit),

        WindowEvent::Resized(size) => emit(NativeEvent::Resized {
            width: size.width,
            height: size.height,
        }),

        WindowEvent::Moved(position) => emit(NativeEvent::Moved {
            x: position.x,
            y: position.y,
        }),

        WindowEvent::Focused(true) => emit(NativeEvent::FocusGained),
        WindowEvent::Focused(false) => emit(NativeEvent::FocusLost),

        //--- Keyboard --------------------------------------------------------
        WindowEvent::KeyboardInput { event: key_event, .. } => process_key_event(&key_event, &mut emit),

        WindowEvent::Ime(Ime::Commit(text)) => emit(NativeEvent::TextInput(text)),

        //--- Mouse -----------------------------------------------------------
        WindowEvent::CursorMoved { position, .. } => emit(NativeEvent::MouseMotion {
            x: position.x as f32,
            y: position.y as f32,
        }),

        WindowEvent::MouseWheel { delta, .. } => {
            let (x, y) = match delta {
                MouseScrollDelta::LineDelta(x, y) => (x, y),
                MouseScrollDelta::PixelDelta(position) => (position.x as f32, position.y as f32),
            };
            emit(NativeEvent::MouseWheel { x, y });
        }

        WindowEvent::MouseInput { state, button, .. } => {
            let code = MouseCode::from(button);
            match state {
                ElementState::Pressed => emit(NativeEvent::MouseButtonDown(code)),
                ElementState::Released => emit(NativeEvent::MouseButtonUp(code)),
            }
        }

        //--- Unhandled -------------------------------------------------------
        _ => {
            // Ignore: ScaleFactorChanged, RedrawRequested, Touch, etc.
        }
    }
}

/// Converts a Winit key event (filters unmapped keys).
fn process_key_event(key_event: &KeyEvent, emit: &mut impl FnMut(NativeEvent)) {
    let key_code = match key_event.physical_key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        _ => KeyCode::UNKNOWN,
    };

    if key_code == KeyCode::UNKNOWN {
        trace!(target: "platform::input", "Unmapped key ignored: {:?}", key_event.physical_key);
    } else {
        match key_event.state {
            ElementState::Pressed => emit(NativeEvent::KeyDown {
                key_code,
                repeat: key_event.repeat,
            }),
            ElementState::Released => emit(NativeEvent::KeyUp { key_code }),
        }
    }

    // Text is independent of the physical key mapping
    if key_event.state == ElementState::Pressed {
        if let Some(text) = &key_event.text {
            emit(NativeEvent::TextInput(text.to_string()));
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

//=== Key Conversion ======================================================
//
// Maps `WinitKeyCode` values to the engine's `KeyCode` table. Keys the
// table has no slot for become `KeyCode::UNKNOWN`.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Numeric keys -----------------------------------------------------
            Digit0 => KeyCode::D0, Digit1 => KeyCode::D1,
            Digit2 => KeyCode::D2, Digit3 => KeyCode::D3,
            Digit4 => KeyCode::D4, Digit5 => KeyCode::D5,
            Digit6 => KeyCode::D6, Digit7 => KeyCode::D7,
            Digit8 => KeyCode::D8, Digit9 => KeyCode::D9,

            //--- Alphabetic keys --------------------------------------------------
            KeyA => KeyCode::A, KeyB => KeyCode::B, KeyC => KeyCode::C,
            KeyD => KeyCode::D, KeyE => KeyCode::E, KeyF => KeyCode::F,
            KeyG => KeyCode::G, KeyH => KeyCode::H, KeyI => KeyCode::I,
            KeyJ => KeyCode::J, KeyK => KeyCode::K, KeyL => KeyCode::L,
            KeyM => KeyCode::M, KeyN => KeyCode::N, KeyO => KeyCode::O,
            KeyP => KeyCode::P, KeyQ => KeyCode::Q, KeyR => KeyCode::R,
            KeyS => KeyCode::S, KeyT => KeyCode::T, KeyU => KeyCode::U,
            KeyV => KeyCode::V, KeyW => KeyCode::W, KeyX => KeyCode::X,
            KeyY => KeyCode::Y, KeyZ => KeyCode::Z,

            //--- Punctuation ------------------------------------------------------
            Space => KeyCode::SPACE,
            Quote => KeyCode::APOSTROPHE,
            Comma => KeyCode::COMMA,
            Minus => KeyCode::MINUS,
            Period => KeyCode::PERIOD,
            Slash => KeyCode::SLASH,
            Semicolon => KeyCode::SEMICOLON,
            Equal => KeyCode::EQUAL,
            BracketLeft => KeyCode::LEFT_BRACKET,
            Backslash => KeyCode::BACKSLASH,
            BracketRight => KeyCode::RIGHT_BRACKET,
            Backquote => KeyCode::GRAVE_ACCENT,
            IntlBackslash => KeyCode::WORLD_1,
            IntlRo => KeyCode::WORLD_2,

            //--- Editing & control ------------------------------------------------
            Escape => KeyCode::ESCAPE,
            Enter => KeyCode::ENTER,
            Tab => KeyCode::TAB,
            Backspace => KeyCode::BACKSPACE,
            Insert => KeyCode::INSERT,
            Delete => KeyCode::DELETE,
            Pause => KeyCode::PAUSE,
            PrintScreen => KeyCode::PRINT_SCREEN,
            ContextMenu => KeyCode::MENU,

            //--- Navigation -------------------------------------------------------
            ArrowUp => KeyCode::UP, ArrowDown => KeyCode::DOWN,
            ArrowLeft => KeyCode::LEFT, ArrowRight => KeyCode::RIGHT,
            Home => KeyCode::HOME, End => KeyCode::END,
            PageUp => KeyCode::PAGE_UP, PageDown => KeyCode::PAGE_DOWN,

            //--- Function keys ----------------------------------------------------
            F1 => KeyCode::F1, F2 => KeyCode::F2, F3 => KeyCode::F3,
            F4 => KeyCode::F4, F5 => KeyCode::F5, F6 => KeyCode::F6,
            F7 => KeyCode::F7, F8 => KeyCode::F8, F9 => KeyCode::F9,
            F10 => KeyCode::F10, F11 => KeyCode::F11, F12 => KeyCode::F12,

            //--- Keypad -----------------------------------------------------------
            Numpad0 => KeyCode::KP_0, Numpad1 => KeyCode::KP_1,
            Numpad2 => KeyCode::KP_2, Numpad3 => KeyCode::KP_3,
            Numpad4 => KeyCode::KP_4, Numpad5 => KeyCode::KP_5,
            Numpad6 => KeyCode::KP_6, Numpad7 => KeyCode::KP_7,
            Numpad8 => KeyCode::KP_8, Numpad9 => KeyCode::KP_9,
            NumpadDecimal => KeyCode::KP_DECIMAL,
            NumpadDivide => KeyCode::KP_DIVIDE,
            NumpadMultiply => KeyCode::KP_MULTIPLY,
            NumpadSubtract => KeyCode::KP_SUBTRACT,
            NumpadAdd => KeyCode::KP_ADD,
            NumpadEnter => KeyCode::KP_ENTER,
            NumpadEqual => KeyCode::KP_EQUAL,

            //--- Locks & modifiers ------------------------------------------------
            NumLock => KeyCode::NUM_LOCK,
            CapsLock => KeyCode::CAPS_LOCK,
            ScrollLock => KeyCode::SCROLL_LOCK,
            ShiftLeft => KeyCode::LEFT_SHIFT, ShiftRight => KeyCode::RIGHT_SHIFT,
            ControlLeft => KeyCode::LEFT_CONTROL, ControlRight => KeyCode::RIGHT_CONTROL,
            AltLeft => KeyCode::LEFT_ALT, AltRight => KeyCode::RIGHT_ALT,
            SuperLeft => KeyCode::LEFT_SUPER, SuperRight => KeyCode::RIGHT_SUPER,

            //--- Fallback ---------------------------------------------------------
            _ => KeyCode::UNKNOWN,
        }
    }
}

//=== Mouse Conversion ====================================================
//
// Left/Middle/Right/Back/Forward take SDL's 1..=5; `Other(n)` keeps the
// platform's button number.
//

impl From<WinitMouseButton> for MouseCode {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseCode::LEFT,
            WinitMouseButton::Middle => MouseCode::MIDDLE,
            WinitMouseButton::Right => MouseCode::RIGHT,
            WinitMouseButton::Back => MouseCode::X1,
            WinitMouseButton::Forward => MouseCode::X2,
            WinitMouseButton::Other(n) => MouseCode(n),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};

    fn map(event: WindowEvent) -> Vec<NativeEvent> {
        let mut out = Vec::new();
        map_window_event(event, |native| out.push(native));
        out
    }

    //=====================================================================
    // Window Events
    //=====================================================================

    #[test]
    fn close_requested_becomes_quit() {
        assert_eq!(map(WindowEvent::CloseRequested), vec![NativeEvent::Quit]);
    }

    #[test]
    fn resize_carries_physical_size() {
        assert_eq!(
            map(WindowEvent::Resized(PhysicalSize::new(640, 480))),
            vec![NativeEvent::Resized { width: 640, height: 480 }]
        );
    }

    #[test]
    fn focus_and_move_are_mapped() {
        assert_eq!(map(WindowEvent::Focused(true)), vec![NativeEvent::FocusGained]);
        assert_eq!(map(WindowEvent::Focused(false)), vec![NativeEvent::FocusLost]);
        assert_eq!(
            map(WindowEvent::Moved(PhysicalPosition::new(-5, 12))),
            vec![NativeEvent::Moved { x: -5, y: 12 }]
        );
    }

    #[test]
    fn ime_commit_becomes_text_input() {
        assert_eq!(
            map(WindowEvent::Ime(Ime::Commit("ok".to_string()))),
            vec![NativeEvent::TextInput("ok".to_string())]
        );
    }

    #[test]
    fn unsupported_events_emit_nothing() {
        assert!(map(WindowEvent::RedrawRequested).is_empty());
        assert!(map(WindowEvent::Occluded(true)).is_empty());
    }

    //=====================================================================
    // Conversions
    //=====================================================================

    #[test]
    fn letter_and_digit_keys_map_to_ascii_codes() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::A);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ).value(), b'z' as u16);
        assert_eq!(KeyCode::from(WinitKeyCode::Digit7), KeyCode::D7);
    }

    #[test]
    fn special_keys_map_to_named_codes() {
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::ESCAPE);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::LEFT);
        assert_eq!(KeyCode::from(WinitKeyCode::F12), KeyCode::F12);
        assert_eq!(KeyCode::from(WinitKeyCode::ShiftLeft), KeyCode::LEFT_SHIFT);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::KP_ENTER);
    }

    #[test]
    fn unmapped_keys_become_unknown() {
        assert_eq!(KeyCode::from(WinitKeyCode::F20), KeyCode::UNKNOWN);
        assert_eq!(KeyCode::from(WinitKeyCode::MediaPlayPause), KeyCode::UNKNOWN);
    }

    #[test]
    fn mouse_buttons_use_sdl_numbering() {
        assert_eq!(MouseCode::from(WinitMouseButton::Left), MouseCode(1));
        assert_eq!(MouseCode::from(WinitMouseButton::Middle), MouseCode(2));
        assert_eq!(MouseCode::from(WinitMouseButton::Right), MouseCode(3));
        assert_eq!(MouseCode::from(WinitMouseButton::Back), MouseCode(4));
        assert_eq!(MouseCode::from(WinitMouseButton::Forward), MouseCode(5));
        assert_eq!(MouseCode::from(WinitMouseButton::Other(9)), MouseCode(9));
    }
}
