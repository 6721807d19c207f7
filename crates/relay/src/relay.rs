use frame::{Frame, FrameError, FrameFormat};
use std::pin::pin;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;

struct Slot {
    pending: Option<Frame>,
    closed: bool,
}

struct Shared {
    slot: Mutex<Slot>,
    notify: Notify,
}

/// Single-slot, latest-wins hand-off between one producer and one consumer.
///
/// Holds at most one pending frame. `publish` replaces any unread frame
/// instead of queueing behind it; the overwrite is the back-pressure
/// mechanism, not an error. Clones share the same slot, so the producer
/// and consumer contexts each hold their own handle.
///
/// The pending frame and the closed flag live behind one mutex, so once
/// `close` has run no frame is ever observable again.
pub struct FrameRelay {
    format: FrameFormat,
    shared: Arc<Shared>,
}

impl Clone for FrameRelay {
    fn clone(&self) -> Self {
        Self {
            format: self.format,
            shared: Arc::clone(&self.shared),
        }
    }
}

impl std::fmt::Debug for FrameRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameRelay")
            .field("format", &self.format)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl FrameRelay {
    /// Create an open relay for a session with the given fixed format.
    pub fn new(format: FrameFormat) -> Self {
        Self {
            format,
            shared: Arc::new(Shared {
                slot: Mutex::new(Slot {
                    pending: None,
                    closed: false,
                }),
                notify: Notify::new(),
            }),
        }
    }

    /// The session format every published frame must carry.
    pub fn format(&self) -> FrameFormat {
        self.format
    }

    /// Hand a frame to the consumer, superseding any unread one.
    ///
    /// Never waits on the consumer. Publishing to a closed relay is a
    /// silent no-op. A frame whose format differs from the session format
    /// is rejected.
    pub fn publish(&self, frame: Frame) -> Result<(), FrameError> {
        if frame.format() != self.format {
            return Err(FrameError::Format {
                expected: self.format,
                actual: frame.format(),
            });
        }

        {
            let mut slot = self.lock_slot();
            if slot.closed {
                log::trace!("relay closed, dropping frame seq {}", frame.seq());
                return Ok(());
            }
            if let Some(old) = slot.pending.replace(frame) {
                log::trace!("superseding unread frame seq {}", old.seq());
            }
        }

        self.shared.notify.notify_waiters();
        Ok(())
    }

    /// Take the most recent unread frame, or `None` if nothing is pending.
    ///
    /// Never waits; an event-driven consumer that only acts on the newest
    /// frame polls this.
    pub fn consume(&self) -> Option<Frame> {
        self.lock_slot().pending.take()
    }

    /// Wait for the next frame.
    ///
    /// Returns `None` once the relay is closed and drained. Cancel-safe:
    /// dropping the future before completion takes no frame out of the
    /// slot.
    pub async fn recv(&self) -> Option<Frame> {
        loop {
            // Register the waiter before inspecting the slot, so a publish
            // racing this check still wakes us.
            let mut notified = pin!(self.shared.notify.notified());
            notified.as_mut().enable();

            {
                let mut slot = self.lock_slot();
                if let Some(frame) = slot.pending.take() {
                    return Some(frame);
                }
                if slot.closed {
                    return None;
                }
            }

            notified.await;
        }
    }

    /// Close the relay and discard any pending frame. Idempotent.
    ///
    /// Later publishes become no-ops, later consumes return `None`, and
    /// all waiting receivers wake up.
    pub fn close(&self) {
        {
            let mut slot = self.lock_slot();
            slot.closed = true;
            slot.pending = None;
        }
        self.shared.notify.notify_waiters();
    }

    pub fn is_closed(&self) -> bool {
        self.lock_slot().closed
    }

    fn lock_slot(&self) -> MutexGuard<'_, Slot> {
        // A panic while holding the lock leaves plain data behind, so
        // poisoning is recoverable.
        self.shared.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}
