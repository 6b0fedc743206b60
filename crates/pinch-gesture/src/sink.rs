//! Gesture event sink
//!
//! A single slot. Emitting overwrites, reading clears. There is no queue and
//! no backpressure: a consumer polling slower than events are produced only
//! ever sees the latest one.

use std::mem;

use pinch_core::GestureEvent;

#[derive(Debug, Clone, Default)]
pub struct GestureSink {
    slot: GestureEvent,
    /// Unread events replaced by a newer emission
    overwritten: u64,
}

impl GestureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an event, replacing any unread one
    pub fn emit(&mut self, event: GestureEvent) {
        if !self.slot.is_none() {
            self.overwritten += 1;
        }
        self.slot = event;
    }

    /// Get-and-clear
    pub fn take(&mut self) -> GestureEvent {
        mem::take(&mut self.slot)
    }

    /// Look without clearing
    pub fn peek(&self) -> GestureEvent {
        self.slot
    }

    pub fn is_pending(&self) -> bool {
        !self.slot.is_none()
    }

    pub fn overwritten(&self) -> u64 {
        self.overwritten
    }
}
