//! Gesture tracker - cursor machine wired to its sink

use pinch_core::GestureEvent;

use crate::{Anchor, CursorMachine, CursorState, GestureConfig, GestureSink, PinchSample, Transition};

#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    machine: CursorMachine,
    sink: GestureSink,
    /// Events produced since creation
    emitted: u64,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        GestureTracker {
            machine: CursorMachine::with_config(config),
            sink: GestureSink::new(),
            emitted: 0,
        }
    }

    /// Apply a sample; a released event lands in the sink
    pub fn feed(&mut self, sample: PinchSample) -> Transition {
        let transition = self.machine.update(sample);
        if let Some(event) = transition.event() {
            self.sink.emit(event);
            self.emitted += 1;
        }
        transition
    }

    /// Get-and-clear the buffered event
    pub fn poll(&mut self) -> GestureEvent {
        self.sink.take()
    }

    pub fn peek(&self) -> GestureEvent {
        self.sink.peek()
    }

    pub fn state(&self) -> CursorState {
        self.machine.state()
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.machine.anchor()
    }

    pub fn config(&self) -> &GestureConfig {
        self.machine.config()
    }

    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn overwritten(&self) -> u64 {
        self.sink.overwritten()
    }

    /// Idle, nothing buffered
    pub fn reset(&mut self) {
        self.machine.reset();
        self.sink.take();
    }
}
