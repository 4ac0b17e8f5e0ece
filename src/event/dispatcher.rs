//=========================================================================
// Event Dispatcher
//=========================================================================
//
// Routes one borrowed event to typed handlers.
//
// Usage:
// ```text
//   let mut dispatcher = EventDispatcher::new(&mut event);
//   dispatcher.dispatch::<WindowResizeEvent, _>(|e| on_resize(e));
//   dispatcher.dispatch::<KeyPressedEvent, _>(|e| on_key(e));
// ```
//
// At most one `dispatch` call matches per event since the kind is a
// discriminant. Handlers still run on events a previous handler already
// claimed; skipping those is the caller's policy.
//
//=========================================================================

use super::{Event, EventType};

//=== EventDispatcher =====================================================

/// Single-event router; borrows the event for its whole lifetime.
pub struct EventDispatcher<'a> {
    event: &'a mut Event,
}

impl<'a> EventDispatcher<'a> {
    pub fn new(event: &'a mut Event) -> Self {
        Self { event }
    }

    /// Runs `handler` if the bound event is a `T`.
    ///
    /// The handler's return value is OR-ed into the event's handled flag.
    /// Returns whether the kinds matched, regardless of what the handler
    /// returned.
    pub fn dispatch<T, F>(&mut self, handler: F) -> bool
    where
        T: EventType,
        F: FnOnce(&T) -> bool,
    {
        let Some(typed) = T::from_payload(&self.event.payload) else {
            return false;
        };

        if handler(typed) {
            self.event.handled = true;
        }
        true
    }

    /// The bound event, e.g. to check whether it was already handled.
    pub fn event(&self) -> &Event {
        self.event
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{
        KeyPressedEvent, MouseMovedEvent, WindowCloseEvent, WindowResizeEvent,
    };
    use crate::input::KeyCode;

    //=====================================================================
    // Matching
    //=====================================================================

    #[test]
    fn matching_kind_invokes_handler_with_payload() {
        let mut event = Event::from(WindowResizeEvent::new(800, 600));
        let mut dispatcher = EventDispatcher::new(&mut event);

        let mut seen = None;
        let matched = dispatcher.dispatch::<WindowResizeEvent, _>(|e| {
            seen = Some((e.width(), e.height()));
            false
        });

        assert!(matched);
        assert_eq!(seen, Some((800, 600)));
    }

    #[test]
    fn mismatched_kind_skips_handler() {
        let mut event = Event::from(WindowResizeEvent::new(800, 600));
        let mut dispatcher = EventDispatcher::new(&mut event);

        let mut called = false;
        let matched = dispatcher.dispatch::<KeyPressedEvent, _>(|_| {
            called = true;
            true
        });

        assert!(!matched, "dispatch must report no match");
        assert!(!called, "handler must not run for another kind");
        assert!(!event.is_handled());
    }

    #[test]
    fn exactly_one_of_several_dispatches_matches() {
        let mut event = Event::from(MouseMovedEvent::new(1.0, 2.0));
        let mut dispatcher = EventDispatcher::new(&mut event);

        let results = [
            dispatcher.dispatch::<WindowResizeEvent, _>(|_| true),
            dispatcher.dispatch::<KeyPressedEvent, _>(|_| true),
            dispatcher.dispatch::<MouseMovedEvent, _>(|_| false),
            dispatcher.dispatch::<WindowCloseEvent, _>(|_| true),
        ];

        assert_eq!(results, [false, false, true, false]);
        assert!(!event.is_handled(), "only the matching handler affects the flag");
    }

    //=====================================================================
    // Handled Accumulation
    //=====================================================================

    #[test]
    fn handler_returning_true_marks_handled() {
        let mut event = Event::from(KeyPressedEvent::new(KeyCode::A, false));
        let mut dispatcher = EventDispatcher::new(&mut event);

        assert!(!dispatcher.event().is_handled());
        dispatcher.dispatch::<KeyPressedEvent, _>(|_| true);
        assert!(dispatcher.event().is_handled());
    }

    #[test]
    fn handler_returning_false_leaves_flag_untouched() {
        let mut event = Event::from(KeyPressedEvent::new(KeyCode::A, false));
        EventDispatcher::new(&mut event).dispatch::<KeyPressedEvent, _>(|_| false);
        assert!(!event.is_handled());
    }

    #[test]
    fn handled_is_or_accumulated_and_never_reset() {
        let mut event = Event::from(WindowCloseEvent);

        EventDispatcher::new(&mut event).dispatch::<WindowCloseEvent, _>(|_| true);
        assert!(event.is_handled());

        EventDispatcher::new(&mut event).dispatch::<WindowCloseEvent, _>(|_| false);
        assert!(event.is_handled(), "a later false must not clear the flag");
    }

    #[test]
    fn already_handled_events_still_reach_handlers() {
        let mut event = Event::from(WindowCloseEvent);
        event.mark_handled();

        let mut called = false;
        let matched = EventDispatcher::new(&mut event).dispatch::<WindowCloseEvent, _>(|_| {
            called = true;
            false
        });

        assert!(matched);
        assert!(called, "dispatcher does not short-circuit on handled events");
    }
}
