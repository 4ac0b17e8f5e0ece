//=========================================================================
// Native Event Queue
//
// Channel-backed FIFO of `NativeEvent`s.
//
// Architecture:
//   producer (winit handler / test) ─NativeEventSender─> channel
//   channel ─QueuedEventSource::poll_event()─> NativeWindow
//
// The winit backend pushes into a sender while the event loop is being
// pumped; headless runs and tests push directly. Draining uses
// `try_recv`, so an empty queue never blocks the frame.
//
//=========================================================================

//=== External Crates =====================================================

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::*;

//=== Internal Imports ====================================================

use super::native_event::{NativeEvent, NativeEventSource};

//=== NativeEventSender ===================================================

/// Producer half of a native event queue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct NativeEventSender {
    sender: Sender<NativeEvent>,
}

impl NativeEventSender {
    /// Appends an event to the queue.
    ///
    /// If the receiving window is gone the event is dropped with a warning;
    /// producers never fail because the consumer shut down first.
    pub fn send(&self, event: NativeEvent) {
        if self.sender.send(event).is_err() {
            warn!(target: "platform::queue", "Queue disconnected, dropping native event");
        }
    }

    /// Appends several events, preserving their order.
    pub fn send_all(&self, events: impl IntoIterator<Item = NativeEvent>) {
        for event in events {
            self.send(event);
        }
    }
}

//=== QueuedEventSource ===================================================

/// Consumer half of a native event queue.
#[derive(Debug)]
pub struct QueuedEventSource {
    receiver: Receiver<NativeEvent>,
}

impl QueuedEventSource {
    /// Creates an empty queue, returning its producer and consumer halves.
    pub fn channel() -> (NativeEventSender, Self) {
        let (sender, receiver) = unbounded();
        (NativeEventSender { sender }, Self { receiver })
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl NativeEventSource for QueuedEventSource {
    fn poll_event(&mut self) -> Option<NativeEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_polls_none() {
        let (_tx, mut source) = QueuedEventSource::channel();
        assert!(source.poll_event().is_none());
        assert!(source.is_empty());
    }

    #[test]
    fn events_come_out_in_send_order() {
        let (tx, mut source) = QueuedEventSource::channel();
        tx.send_all([
            NativeEvent::FocusGained,
            NativeEvent::Resized { width: 1, height: 2 },
            NativeEvent::Quit,
        ]);

        assert_eq!(source.len(), 3);
        assert_eq!(source.poll_event(), Some(NativeEvent::FocusGained));
        assert_eq!(source.poll_event(), Some(NativeEvent::Resized { width: 1, height: 2 }));
        assert_eq!(source.poll_event(), Some(NativeEvent::Quit));
        assert_eq!(source.poll_event(), None);
    }

    #[test]
    fn disconnected_sender_still_drains_pending_events() {
        let (tx, mut source) = QueuedEventSource::channel();
        tx.send(NativeEvent::Quit);
        drop(tx);

        assert_eq!(source.poll_event(), Some(NativeEvent::Quit));
        assert_eq!(source.poll_event(), None, "disconnect is reported as empty");
    }

    #[test]
    fn send_after_consumer_dropped_does_not_panic() {
        let (tx, source) = QueuedEventSource::channel();
        drop(source);

        // Should not panic, just log a warning
        tx.send(NativeEvent::FocusLost);
    }
}
