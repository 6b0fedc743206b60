//! Shared engine handle
//!
//! A capture loop and any number of pollers may hold clones of the same
//! handle. Every frame update and every poll goes through one mutex, so state
//! transitions and get-and-clear reads never interleave.

use std::sync::Arc;

use parking_lot::Mutex;

use pinch_core::{Frame, GestureEvent, GestureMessage};
use pinch_gesture::CursorState;

use crate::{FrameReport, GestureEngine, RuntimeStats};

#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<GestureEngine>>,
}

impl SharedEngine {
    pub fn new(engine: GestureEngine) -> Self {
        SharedEngine {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn process_frame(&self, frame: &Frame) -> FrameReport {
        self.inner.lock().process_frame(frame)
    }

    pub fn poll_gesture(&self) -> GestureEvent {
        self.inner.lock().poll_gesture()
    }

    pub fn poll_message(&self) -> GestureMessage {
        self.inner.lock().poll_message()
    }

    pub fn cursor_state(&self) -> CursorState {
        self.inner.lock().cursor_state()
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> RuntimeStats {
        self.inner.lock().stats().clone()
    }

    /// Run `f` with exclusive access to the engine
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut GestureEngine) -> R) -> R {
        let mut engine = self.inner.lock();
        f(&mut *engine)
    }
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new(GestureEngine::new())
    }
}
