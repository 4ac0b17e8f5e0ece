//=========================================================================
// Platform Event Mapper
//
// Converts `NativeEvent`s into engine `Event`s.
//
// Responsibilities:
// - Apply the native → engine translation table, one event per entry
// - Reduce text input to the code of its first character
// - Drop native kinds the engine does not model
//
// Translation table:
// ```text
// Quit                 → WindowCloseEvent
// Resized(w, h)        → WindowResizeEvent(w, h)
// KeyDown(code, rep)   → KeyPressedEvent(code, rep)
// KeyUp(code)          → KeyReleasedEvent(code)
// TextInput(text)      → KeyTypedEvent(first char)
// MouseMotion(x, y)    → MouseMovedEvent(x, y)
// MouseWheel(x, y)     → MouseScrolledEvent(x, y)
// MouseButtonDown(b)   → MouseButtonPressedEvent(b)
// MouseButtonUp(b)     → MouseButtonReleasedEvent(b)
// FocusGained          → WindowFocusEvent
// FocusLost            → WindowLostFocusEvent
// Moved(x, y)          → WindowMovedEvent(x, y)
// Unidentified         → (dropped)
// ```
//
//=========================================================================

use log::*;

use super::native_event::NativeEvent;
use crate::event::{
    Event, KeyPressedEvent, KeyReleasedEvent, KeyTypedEvent, MouseButtonPressedEvent,
    MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent, WindowCloseEvent,
    WindowFocusEvent, WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};
use crate::input::KeyCode;

//=== Full Event Conversion ===============================================

/// Translates one native event; `None` means the event is dropped.
pub(crate) fn translate(native: NativeEvent) -> Option<Event> {
    let event = match native {
        //--- Window ------------------------------------------------------
        NativeEvent::Quit => Event::from(WindowCloseEvent),
        NativeEvent::Resized { width, height } => WindowResizeEvent::new(width, height).into(),
        NativeEvent::FocusGained => WindowFocusEvent.into(),
        NativeEvent::FocusLost => WindowLostFocusEvent.into(),
        NativeEvent::Moved { x, y } => WindowMovedEvent::new(x, y).into(),

        //--- Keyboard ----------------------------------------------------
        NativeEvent::KeyDown { key_code, repeat } => KeyPressedEvent::new(key_code, repeat).into(),
        NativeEvent::KeyUp { key_code } => KeyReleasedEvent::new(key_code).into(),
        NativeEvent::TextInput(text) => {
            // Control characters (Enter, Tab, Backspace, Escape) are not typed text
            let key_code = text
                .chars()
                .next()
                .filter(|c| !c.is_control())
                .and_then(KeyCode::from_char);
            match key_code {
                Some(code) => KeyTypedEvent::new(code).into(),
                None => {
                    trace!(target: "platform::input", "Text input without usable character: {:?}", text);
                    return None;
                }
            }
        }

        //--- Mouse -------------------------------------------------------
        NativeEvent::MouseMotion { x, y } => MouseMovedEvent::new(x, y).into(),
        NativeEvent::MouseWheel { x, y } => MouseScrolledEvent::new(x, y).into(),
        NativeEvent::MouseButtonDown(button) => MouseButtonPressedEvent::new(button).into(),
        NativeEvent::MouseButtonUp(button) => MouseButtonReleasedEvent::new(button).into(),

        //--- Unhandled ---------------------------------------------------
        NativeEvent::Unidentified => {
            trace!(target: "platform::input", "Unidentified native event dropped");
            return None;
        }
    };

    Some(event)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::input::MouseCode;

    fn kind_of(native: NativeEvent) -> Option<EventKind> {
        translate(native).map(|event| event.kind())
    }

    #[test]
    fn every_modelled_native_kind_translates() {
        let cases = [
            (NativeEvent::Quit, EventKind::WindowClose),
            (NativeEvent::Resized { width: 1, height: 1 }, EventKind::WindowResize),
            (NativeEvent::FocusGained, EventKind::WindowFocus),
            (NativeEvent::FocusLost, EventKind::WindowLostFocus),
            (NativeEvent::Moved { x: 0, y: 0 }, EventKind::WindowMoved),
            (NativeEvent::KeyDown { key_code: KeyCode::A, repeat: false }, EventKind::KeyPressed),
            (NativeEvent::KeyUp { key_code: KeyCode::A }, EventKind::KeyReleased),
            (NativeEvent::TextInput("a".into()), EventKind::KeyTyped),
            (NativeEvent::MouseMotion { x: 0.0, y: 0.0 }, EventKind::MouseMoved),
            (NativeEvent::MouseWheel { x: 0.0, y: 1.0 }, EventKind::MouseScrolled),
            (NativeEvent::MouseButtonDown(MouseCode::LEFT), EventKind::MouseButtonPressed),
            (NativeEvent::MouseButtonUp(MouseCode::LEFT), EventKind::MouseButtonReleased),
        ];

        for (native, expected) in cases {
            assert_eq!(kind_of(native.clone()), Some(expected), "{:?}", native);
        }
    }

    #[test]
    fn payload_is_carried_over() {
        let event = translate(NativeEvent::KeyDown { key_code: KeyCode::Q, repeat: true })
            .expect("key down translates");
        assert_eq!(event.describe(), "KeyPressedEvent: 113 (repeat = true)");

        let event = translate(NativeEvent::MouseWheel { x: 0.0, y: -1.0 }).expect("wheel translates");
        assert_eq!(event.describe(), "MouseScrolledEvent: 0, -1");
    }

    #[test]
    fn text_input_uses_first_character() {
        let event = translate(NativeEvent::TextInput("hello".into())).expect("text translates");
        assert_eq!(event.get::<KeyTypedEvent>(), Some(&KeyTypedEvent::new(KeyCode::H)));
    }

    #[test]
    fn empty_text_input_is_dropped() {
        assert!(translate(NativeEvent::TextInput(String::new())).is_none());
    }

    #[test]
    fn text_outside_16_bits_is_dropped() {
        assert!(translate(NativeEvent::TextInput("🦀".into())).is_none());
    }

    #[test]
    fn control_character_text_is_dropped() {
        for text in ["\u{1b}", "\r", "\u{8}", "\t"] {
            assert!(
                translate(NativeEvent::TextInput(text.into())).is_none(),
                "{:?} must not become a typed key",
                text
            );
        }
    }

    #[test]
    fn unidentified_is_dropped() {
        assert!(translate(NativeEvent::Unidentified).is_none());
    }

    #[test]
    fn translated_events_start_unhandled() {
        let event = translate(NativeEvent::Quit).expect("quit translates");
        assert!(!event.is_handled());
    }
}
