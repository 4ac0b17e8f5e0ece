//=========================================================================
// Event Model
//
// Typed events produced by the platform layer and consumed by the
// application and its feature handlers.
//
// Design:
// Every event is a variant of the closed `EventPayload` enum, wrapped in
// an `Event` that adds the `handled` flag. Kind, categories and names are
// plain `match`es over `EventKind`, so no runtime type information is
// needed to route an event.
//
// ```text
//   NativeEvent ─translate─> Event { payload, handled }
//                                │
//                    EventDispatcher::dispatch::<T>()
//                                │
//                          handler(&T) -> bool
// ```
//
// Event Table:
// ```text
// Kind                  Payload type                 Categories
// WindowClose           WindowCloseEvent             APPLICATION
// WindowResize          WindowResizeEvent            APPLICATION
// WindowFocus           WindowFocusEvent             APPLICATION
// WindowLostFocus       WindowLostFocusEvent         APPLICATION
// WindowMoved           WindowMovedEvent             APPLICATION
// AppTick/Update/Render App*Event                    APPLICATION
// KeyPressed/Released   Key*Event                    KEYBOARD | INPUT
// KeyTyped              KeyTypedEvent                KEYBOARD | INPUT
// MouseMoved/Scrolled   Mouse*Event                  MOUSE | INPUT
// MouseButton*          MouseButton*Event            MOUSE | INPUT | MOUSE_BUTTON
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Event Type Registration =============================================
//
// Binds a payload struct to its `EventKind` variant: narrowing from the
// payload enum plus the `From` conversions used to build events.
//
macro_rules! event_type {
    ($ty:ident => $kind:ident) => {
        impl $crate::event::EventType for $ty {
            const KIND: $crate::event::EventKind = $crate::event::EventKind::$kind;

            fn from_payload(payload: &$crate::event::EventPayload) -> Option<&Self> {
                match payload {
                    $crate::event::EventPayload::$kind(event) => Some(event),
                    _ => None,
                }
            }
        }

        impl From<$ty> for $crate::event::EventPayload {
            fn from(event: $ty) -> Self {
                $crate::event::EventPayload::$kind(event)
            }
        }

        impl From<$ty> for $crate::event::Event {
            fn from(event: $ty) -> Self {
                $crate::event::Event::new(event)
            }
        }
    };
}

//=== Module Declarations =================================================

pub mod application;
pub mod dispatcher;
pub mod key;
pub mod mouse;

//=== Public API ==========================================================

pub use application::{
    AppRenderEvent, AppTickEvent, AppUpdateEvent, WindowCloseEvent, WindowFocusEvent,
    WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};
pub use dispatcher::EventDispatcher;
pub use key::{KeyEvent, KeyPressedEvent, KeyReleasedEvent, KeyTypedEvent};
pub use mouse::{
    MouseButtonEvent, MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent,
    MouseScrolledEvent,
};

//=== EventCategory =======================================================

bitflags::bitflags! {
    /// Coarse classification of events along several axes at once.
    ///
    /// A mouse button event is simultaneously `MOUSE`, `INPUT` and
    /// `MOUSE_BUTTON`, so filters can be as broad or narrow as needed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventCategory: u8 {
        const APPLICATION  = 1 << 0;
        const INPUT        = 1 << 1;
        const KEYBOARD     = 1 << 2;
        const MOUSE        = 1 << 3;
        const MOUSE_BUTTON = 1 << 4;
    }
}

//=== EventKind ===========================================================

/// Discriminant of every event the engine can produce.
///
/// `None` is a placeholder kind: no payload carries it and it belongs to
/// no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    None,
    WindowClose,
    WindowResize,
    WindowFocus,
    WindowLostFocus,
    WindowMoved,
    AppTick,
    AppUpdate,
    AppRender,
    KeyPressed,
    KeyReleased,
    KeyTyped,
    MouseButtonPressed,
    MouseButtonReleased,
    MouseMoved,
    MouseScrolled,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [EventKind; 16] = [
        EventKind::None,
        EventKind::WindowClose,
        EventKind::WindowResize,
        EventKind::WindowFocus,
        EventKind::WindowLostFocus,
        EventKind::WindowMoved,
        EventKind::AppTick,
        EventKind::AppUpdate,
        EventKind::AppRender,
        EventKind::KeyPressed,
        EventKind::KeyReleased,
        EventKind::KeyTyped,
        EventKind::MouseButtonPressed,
        EventKind::MouseButtonReleased,
        EventKind::MouseMoved,
        EventKind::MouseScrolled,
    ];

    /// Fixed category mask for this kind.
    pub const fn categories(self) -> EventCategory {
        use EventKind::*;
        match self {
            None => EventCategory::empty(),

            WindowClose | WindowResize | WindowFocus | WindowLostFocus | WindowMoved
            | AppTick | AppUpdate | AppRender => EventCategory::APPLICATION,

            KeyPressed | KeyReleased | KeyTyped => {
                EventCategory::KEYBOARD.union(EventCategory::INPUT)
            }

            MouseMoved | MouseScrolled => EventCategory::MOUSE.union(EventCategory::INPUT),

            MouseButtonPressed | MouseButtonReleased => EventCategory::MOUSE
                .union(EventCategory::INPUT)
                .union(EventCategory::MOUSE_BUTTON),
        }
    }

    /// Kind name, also the description of events without payload data.
    pub const fn name(self) -> &'static str {
        use EventKind::*;
        match self {
            None => "None",
            WindowClose => "WindowClose",
            WindowResize => "WindowResize",
            WindowFocus => "WindowFocus",
            WindowLostFocus => "WindowLostFocus",
            WindowMoved => "WindowMoved",
            AppTick => "AppTick",
            AppUpdate => "AppUpdate",
            AppRender => "AppRender",
            KeyPressed => "KeyPressed",
            KeyReleased => "KeyReleased",
            KeyTyped => "KeyTyped",
            MouseButtonPressed => "MouseButtonPressed",
            MouseButtonReleased => "MouseButtonReleased",
            MouseMoved => "MouseMoved",
            MouseScrolled => "MouseScrolled",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=== EventType ===========================================================

/// Implemented by every concrete payload struct.
///
/// Ties the type to its static kind and lets [`EventDispatcher`] narrow an
/// [`Event`] to the concrete payload without downcasting.
pub trait EventType: fmt::Display + Into<EventPayload> + Sized {
    const KIND: EventKind;
    const CATEGORIES: EventCategory = Self::KIND.categories();

    /// Returns the payload if it is this type's variant.
    fn from_payload(payload: &EventPayload) -> Option<&Self>;
}

//=== EventPayload ========================================================

/// Closed set of event payloads, one variant per non-`None` kind.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    WindowClose(WindowCloseEvent),
    WindowResize(WindowResizeEvent),
    WindowFocus(WindowFocusEvent),
    WindowLostFocus(WindowLostFocusEvent),
    WindowMoved(WindowMovedEvent),
    AppTick(AppTickEvent),
    AppUpdate(AppUpdateEvent),
    AppRender(AppRenderEvent),
    KeyPressed(KeyPressedEvent),
    KeyReleased(KeyReleasedEvent),
    KeyTyped(KeyTypedEvent),
    MouseButtonPressed(MouseButtonPressedEvent),
    MouseButtonReleased(MouseButtonReleasedEvent),
    MouseMoved(MouseMovedEvent),
    MouseScrolled(MouseScrolledEvent),
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::WindowClose(_) => EventKind::WindowClose,
            Self::WindowResize(_) => EventKind::WindowResize,
            Self::WindowFocus(_) => EventKind::WindowFocus,
            Self::WindowLostFocus(_) => EventKind::WindowLostFocus,
            Self::WindowMoved(_) => EventKind::WindowMoved,
            Self::AppTick(_) => EventKind::AppTick,
            Self::AppUpdate(_) => EventKind::AppUpdate,
            Self::AppRender(_) => EventKind::AppRender,
            Self::KeyPressed(_) => EventKind::KeyPressed,
            Self::KeyReleased(_) => EventKind::KeyReleased,
            Self::KeyTyped(_) => EventKind::KeyTyped,
            Self::MouseButtonPressed(_) => EventKind::MouseButtonPressed,
            Self::MouseButtonReleased(_) => EventKind::MouseButtonReleased,
            Self::MouseMoved(_) => EventKind::MouseMoved,
            Self::MouseScrolled(_) => EventKind::MouseScrolled,
        }
    }
}

impl fmt::Display for EventPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowClose(e) => fmt::Display::fmt(e, f),
            Self::WindowResize(e) => fmt::Display::fmt(e, f),
            Self::WindowFocus(e) => fmt::Display::fmt(e, f),
            Self::WindowLostFocus(e) => fmt::Display::fmt(e, f),
            Self::WindowMoved(e) => fmt::Display::fmt(e, f),
            Self::AppTick(e) => fmt::Display::fmt(e, f),
            Self::AppUpdate(e) => fmt::Display::fmt(e, f),
            Self::AppRender(e) => fmt::Display::fmt(e, f),
            Self::KeyPressed(e) => fmt::Display::fmt(e, f),
            Self::KeyReleased(e) => fmt::Display::fmt(e, f),
            Self::KeyTyped(e) => fmt::Display::fmt(e, f),
            Self::MouseButtonPressed(e) => fmt::Display::fmt(e, f),
            Self::MouseButtonReleased(e) => fmt::Display::fmt(e, f),
            Self::MouseMoved(e) => fmt::Display::fmt(e, f),
            Self::MouseScrolled(e) => fmt::Display::fmt(e, f),
        }
    }
}

//=== Event ===============================================================

/// A single event plus its `handled` flag.
///
/// Created by the platform layer right before the window's callback runs
/// and dropped once it returns.
///
/// # Handled Flag
///
/// Starts `false`. It only ever moves to `true` (through
/// [`Event::mark_handled`] or a dispatch whose handler returns `true`),
/// never back.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    payload: EventPayload,
    handled: bool,
}

impl Event {
    pub fn new(payload: impl Into<EventPayload>) -> Self {
        Self {
            payload: payload.into(),
            handled: false,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }

    pub fn categories(&self) -> EventCategory {
        self.kind().categories()
    }

    /// True iff this event shares at least one category bit with `category`.
    pub fn is_in_category(&self, category: EventCategory) -> bool {
        self.categories().intersects(category)
    }

    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    /// Narrows to a concrete payload type.
    pub fn get<T: EventType>(&self) -> Option<&T> {
        T::from_payload(&self.payload)
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    pub fn mark_handled(&mut self) {
        self.handled = true;
    }

    /// Human-readable rendering used for logging and assertions.
    pub fn describe(&self) -> String {
        self.payload.to_string()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.payload, f)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, MouseCode};

    //--- Fixtures ---------------------------------------------------------

    /// One instance of every concrete payload type.
    fn one_of_each() -> Vec<Event> {
        vec![
            WindowCloseEvent.into(),
            WindowResizeEvent::new(800, 600).into(),
            WindowFocusEvent.into(),
            WindowLostFocusEvent.into(),
            WindowMovedEvent::new(10, -20).into(),
            AppTickEvent.into(),
            AppUpdateEvent.into(),
            AppRenderEvent.into(),
            KeyPressedEvent::new(KeyCode::A, false).into(),
            KeyReleasedEvent::new(KeyCode::A).into(),
            KeyTypedEvent::new(KeyCode::A).into(),
            MouseButtonPressedEvent::new(MouseCode::LEFT).into(),
            MouseButtonReleasedEvent::new(MouseCode::RIGHT).into(),
            MouseMovedEvent::new(500.0, 300.0).into(),
            MouseScrolledEvent::new(0.0, -1.0).into(),
        ]
    }

    fn single_categories() -> [EventCategory; 5] {
        [
            EventCategory::APPLICATION,
            EventCategory::INPUT,
            EventCategory::KEYBOARD,
            EventCategory::MOUSE,
            EventCategory::MOUSE_BUTTON,
        ]
    }

    //=====================================================================
    // Kind & Category Table
    //=====================================================================

    #[test]
    fn category_table_matches_declared_masks() {
        use EventCategory as C;

        let expected = [
            (EventKind::None, C::empty()),
            (EventKind::WindowClose, C::APPLICATION),
            (EventKind::WindowResize, C::APPLICATION),
            (EventKind::WindowFocus, C::APPLICATION),
            (EventKind::WindowLostFocus, C::APPLICATION),
            (EventKind::WindowMoved, C::APPLICATION),
            (EventKind::AppTick, C::APPLICATION),
            (EventKind::AppUpdate, C::APPLICATION),
            (EventKind::AppRender, C::APPLICATION),
            (EventKind::KeyPressed, C::KEYBOARD | C::INPUT),
            (EventKind::KeyReleased, C::KEYBOARD | C::INPUT),
            (EventKind::KeyTyped, C::KEYBOARD | C::INPUT),
            (EventKind::MouseButtonPressed, C::MOUSE | C::INPUT | C::MOUSE_BUTTON),
            (EventKind::MouseButtonReleased, C::MOUSE | C::INPUT | C::MOUSE_BUTTON),
            (EventKind::MouseMoved, C::MOUSE | C::INPUT),
            (EventKind::MouseScrolled, C::MOUSE | C::INPUT),
        ];

        for (kind, mask) in expected {
            assert_eq!(kind.categories(), mask, "wrong categories for {kind}");
        }
    }

    #[test]
    fn static_kind_matches_instance_kind() {
        assert_eq!(WindowResizeEvent::KIND, EventKind::WindowResize);
        assert_eq!(KeyPressedEvent::KIND, EventKind::KeyPressed);
        assert_eq!(MouseScrolledEvent::KIND, EventKind::MouseScrolled);
        assert_eq!(
            MouseButtonPressedEvent::CATEGORIES,
            EventKind::MouseButtonPressed.categories()
        );

        let a = Event::from(WindowResizeEvent::new(1, 2));
        let b = Event::from(WindowResizeEvent::new(3000, 4000));
        assert_eq!(a.kind(), b.kind(), "kind must not depend on payload");
        assert_eq!(a.categories(), b.categories());
    }

    #[test]
    fn every_payload_type_is_covered_once() {
        let kinds: Vec<EventKind> = one_of_each().iter().map(Event::kind).collect();
        let expected: Vec<EventKind> = EventKind::ALL
            .into_iter()
            .filter(|kind| *kind != EventKind::None)
            .collect();
        assert_eq!(kinds, expected);
    }

    #[test]
    fn is_in_category_for_every_pair() {
        // Columns: APPLICATION, INPUT, KEYBOARD, MOUSE, MOUSE_BUTTON
        const APP: [bool; 5] = [true, false, false, false, false];
        const KEY: [bool; 5] = [false, true, true, false, false];
        const MOUSE: [bool; 5] = [false, true, false, true, false];
        const BUTTON: [bool; 5] = [false, true, false, true, true];
        let membership = [
            APP, APP, APP, APP, APP, APP, APP, APP, // window and app events
            KEY, KEY, KEY,
            BUTTON, BUTTON,
            MOUSE, MOUSE,
        ];

        let events = one_of_each();
        assert_eq!(events.len(), membership.len());

        for (event, row) in events.iter().zip(membership) {
            for (category, expected) in single_categories().into_iter().zip(row) {
                assert_eq!(
                    event.is_in_category(category),
                    expected,
                    "{} vs {:?}",
                    event.kind(),
                    category
                );
            }
        }
    }

    #[test]
    fn is_in_category_accepts_combined_masks() {
        let event = Event::from(KeyTypedEvent::new(KeyCode::A));
        assert!(event.is_in_category(EventCategory::MOUSE | EventCategory::KEYBOARD));
        assert!(!event.is_in_category(EventCategory::MOUSE | EventCategory::APPLICATION));
        assert!(!event.is_in_category(EventCategory::empty()));
    }

    //=====================================================================
    // Handled Flag
    //=====================================================================

    #[test]
    fn handled_starts_false_and_stays_true() {
        let mut event = Event::from(WindowCloseEvent);
        assert!(!event.is_handled());

        event.mark_handled();
        assert!(event.is_handled());

        event.mark_handled();
        assert!(event.is_handled(), "handled must never reset");
    }

    //=====================================================================
    // Descriptions
    //=====================================================================

    #[test]
    fn describe_renders_payload_fields() {
        let cases = [
            (Event::from(WindowResizeEvent::new(800, 600)), "WindowResizeEvent: 800, 600"),
            (Event::from(WindowMovedEvent::new(10, -20)), "WindowMovedEvent: 10, -20"),
            (
                Event::from(KeyPressedEvent::new(KeyCode::A, false)),
                "KeyPressedEvent: 97 (repeat = false)",
            ),
            (Event::from(KeyReleasedEvent::new(KeyCode::A)), "KeyReleasedEvent: 97"),
            (Event::from(KeyTypedEvent::new(KeyCode::A)), "KeyTypedEvent: 97"),
            (Event::from(MouseMovedEvent::new(500.0, 300.0)), "MouseMovedEvent: 500, 300"),
            (Event::from(MouseScrolledEvent::new(0.0, -1.0)), "MouseScrolledEvent: 0, -1"),
            (
                Event::from(MouseButtonPressedEvent::new(MouseCode::LEFT)),
                "MouseButtonPressedEvent: 1",
            ),
            (
                Event::from(MouseButtonReleasedEvent::new(MouseCode::MIDDLE)),
                "MouseButtonReleasedEvent: 2",
            ),
        ];

        for (event, expected) in cases {
            assert_eq!(event.describe(), expected);
        }
    }

    #[test]
    fn describe_defaults_to_kind_name() {
        assert_eq!(Event::from(WindowCloseEvent).describe(), "WindowClose");
        assert_eq!(Event::from(WindowFocusEvent).describe(), "WindowFocus");
        assert_eq!(Event::from(WindowLostFocusEvent).describe(), "WindowLostFocus");
        assert_eq!(Event::from(AppTickEvent).describe(), "AppTick");
        assert_eq!(Event::from(AppUpdateEvent).describe(), "AppUpdate");
        assert_eq!(Event::from(AppRenderEvent).describe(), "AppRender");
    }

    #[test]
    fn describe_is_deterministic_and_matches_display() {
        let event = Event::from(MouseMovedEvent::new(1.5, 2.25));
        assert_eq!(event.describe(), event.describe());
        assert_eq!(event.describe(), format!("{event}"));
        assert_eq!(event.describe(), "MouseMovedEvent: 1.5, 2.25");
    }

    //=====================================================================
    // Narrowing
    //=====================================================================

    #[test]
    fn get_narrows_only_to_matching_type() {
        let event = Event::from(WindowResizeEvent::new(800, 600));
        let resize = event.get::<WindowResizeEvent>().expect("resize payload");
        assert_eq!((resize.width(), resize.height()), (800, 600));
        assert!(event.get::<KeyPressedEvent>().is_none());
    }
}
