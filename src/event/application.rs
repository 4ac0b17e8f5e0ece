//=========================================================================
// Application & Window Events
//=========================================================================

use std::fmt;

use super::EventType;

//=== Window Events =======================================================

/// Window client area changed size (physical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResizeEvent {
    width: u32,
    height: u32,
}

impl WindowResizeEvent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for WindowResizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowResizeEvent: {}, {}", self.width, self.height)
    }
}

event_type!(WindowResizeEvent => WindowResize);

/// Window moved; position of its outer top-left corner on the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMovedEvent {
    x: i32,
    y: i32,
}

impl WindowMovedEvent {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

impl fmt::Display for WindowMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowMovedEvent: {}, {}", self.x, self.y)
    }
}

event_type!(WindowMovedEvent => WindowMoved);

//=== Payload-Free Events =================================================
//
// Described by their kind name alone.
//
macro_rules! unit_event {
    ($(#[$meta:meta])* $ty:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $ty;

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(<$ty as EventType>::KIND.name())
            }
        }

        event_type!($ty => $kind);
    };
}

unit_event!(
    /// Close requested by the user or the OS. Stops the application loop.
    WindowCloseEvent => WindowClose
);
unit_event!(
    /// Window gained keyboard focus.
    WindowFocusEvent => WindowFocus
);
unit_event!(
    /// Window lost keyboard focus.
    WindowLostFocusEvent => WindowLostFocus
);
unit_event!(AppTickEvent => AppTick);
unit_event!(AppUpdateEvent => AppUpdate);
unit_event!(AppRenderEvent => AppRender);
