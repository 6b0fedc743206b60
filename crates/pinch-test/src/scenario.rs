//! Scripted gesture scenarios
//!
//! A script is a list of frames. Running it feeds every frame to an engine
//! and polls once after each, the way a consumer polling at frame rate would.

use std::sync::Arc;

use parking_lot::Mutex;

use pinch_core::{Frame, GestureEvent};
use pinch_gesture::{CursorState, PinchSample};
use pinch_runtime::{FrameReport, GestureEngine, HandReport, OverlaySink};

use crate::synth::{frame_of, SyntheticHand, FRAME_HEIGHT, FRAME_WIDTH};

/// Ordered frames to replay
#[derive(Debug, Clone, Default)]
pub struct GestureScript {
    frames: Vec<Frame>,
}

impl GestureScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    /// One frame holding the given hands
    pub fn hands(self, hands: &[SyntheticHand]) -> Self {
        self.frame(frame_of(hands))
    }

    /// A frame with no hands detected
    pub fn empty(self) -> Self {
        self.frame(Frame::empty(FRAME_WIDTH, FRAME_HEIGHT))
    }

    /// Left hand pinched at `(x, y)`
    pub fn pinch(self, x: i32, y: i32) -> Self {
        self.hands(&[SyntheticHand::left(x, y).pinched()])
    }

    /// Left hand released at `(x, y)`
    pub fn release(self, x: i32, y: i32) -> Self {
        self.hands(&[SyntheticHand::left(x, y).released()])
    }

    /// Pinch and release at the same spot
    pub fn click(self, x: i32, y: i32) -> Self {
        self.pinch(x, y).release(x, y)
    }

    /// Pinch at `from`, drag by `(dx, dy)` over `steps` frames, release there
    pub fn drag(mut self, from: (i32, i32), dx: i32, dy: i32, steps: i32) -> Self {
        let steps = steps.max(1);
        for i in 0..=steps {
            self = self.pinch(from.0 + dx * i / steps, from.1 + dy * i / steps);
        }
        self.release(from.0 + dx, from.1 + dy)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Feed every frame, polling after each
    pub fn run(&self, engine: &mut GestureEngine) -> ScenarioOutcome {
        let mut outcome = ScenarioOutcome::default();
        for frame in &self.frames {
            outcome.reports.push(engine.process_frame(frame));
            outcome.states.push(engine.cursor_state());
            let event = engine.poll_gesture();
            if !event.is_none() {
                outcome.events.push(event);
            }
        }
        outcome
    }
}

/// What a script produced
#[derive(Debug, Clone, Default)]
pub struct ScenarioOutcome {
    /// Non-empty polls in order
    pub events: Vec<GestureEvent>,
    /// Cursor state after each frame
    pub states: Vec<CursorState>,
    pub reports: Vec<FrameReport>,
}

impl ScenarioOutcome {
    pub fn final_state(&self) -> Option<CursorState> {
        self.states.last().copied()
    }
}

/// Everything an overlay was handed
#[derive(Debug, Clone, Default)]
pub struct OverlayLog {
    pub hands: Vec<HandReport>,
    pub pinches: Vec<(PinchSample, bool)>,
    pub frames: usize,
}

/// Overlay that records into a shared log readable after the engine owns it
#[derive(Debug, Clone, Default)]
pub struct RecordingOverlay {
    log: Arc<Mutex<OverlayLog>>,
}

impl RecordingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> OverlayLog {
        self.log.lock().clone()
    }
}

impl OverlaySink for RecordingOverlay {
    fn on_hand(&mut self, report: &HandReport) {
        self.log.lock().hands.push(report.clone());
    }

    fn on_pinch(&mut self, sample: &PinchSample, engaged: bool) {
        self.log.lock().pinches.push((*sample, engaged));
    }

    fn on_frame_end(&mut self) {
        self.log.lock().frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_building() {
        let script = GestureScript::new().click(100, 100).empty();
        assert_eq!(script.len(), 3);
        assert!(!script.frames()[2].has_hands());

        let drag = GestureScript::new().drag((100, 100), 40, 0, 4);
        assert_eq!(drag.len(), 6);
    }

    #[test]
    fn test_click_scenario() {
        let outcome = GestureScript::new()
            .click(300, 100)
            .run(&mut GestureEngine::new());
        assert_eq!(outcome.events, vec![GestureEvent::Click]);
        assert_eq!(outcome.states, vec![CursorState::Hover, CursorState::Idle]);
    }

    #[test]
    fn test_recording_overlay() {
        let overlay = RecordingOverlay::new();
        let mut engine = GestureEngine::new().with_overlay(Box::new(overlay.clone()));
        GestureScript::new()
            .pinch(300, 100)
            .release(300, 100)
            .run(&mut engine);

        let log = overlay.snapshot();
        assert_eq!(log.frames, 2);
        assert_eq!(log.hands.len(), 2);
        assert_eq!(log.pinches.len(), 2);
        assert!(log.pinches[0].1);
        assert!(!log.pinches[1].1);
    }
}
