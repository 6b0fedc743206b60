//! Gesture engine - per-frame driver

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, trace, warn};

use pinch_core::{BoundingBox, Frame, GestureEvent, GestureMessage, PinchResult};
use pinch_gesture::{measure_pinch, CursorState, GestureTracker, PinchSample, Transition};
use pinch_hand::{hand_fingers, is_left, preprocess_hand, FingerStates, Hand};

use crate::{EngineConfig, OverlaySink};

/// What the engine derived for one hand
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HandReport {
    /// Position in the provider's detection order
    pub index: usize,
    pub is_left: bool,
    pub fingers: FingerStates,
    pub bbox: BoundingBox,
    pub area: i64,
    /// Passed the depth gate
    pub admitted: bool,
}

/// The hand that drove the gesture tracker this frame
#[derive(Clone, Debug, PartialEq)]
pub struct DriverReport {
    pub hand: usize,
    pub sample: PinchSample,
    /// Pinch distance mapped onto 0..=100
    pub level: f32,
    pub transition: Transition,
}

/// Result of processing one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub hands: Vec<HandReport>,
    pub driver: Option<DriverReport>,
}

impl FrameReport {
    /// Event released by this frame, if any
    pub fn event(&self) -> Option<GestureEvent> {
        self.driver.as_ref().and_then(|d| d.transition.event())
    }
}

#[derive(Clone, Debug, Default)]
pub struct RuntimeStats {
    pub frames: u64,
    pub empty_frames: u64,
    pub invalid_frames: u64,
    /// Frames where a hand fed the tracker
    pub driven_frames: u64,
    /// Candidate hands whose pinch was outside the activation zone
    pub outside_zone: u64,
    pub events_emitted: u64,
    pub events_polled: u64,
    pub last_frame_duration: Duration,
}

/// Landmark-to-gesture engine. One owner, driven one frame at a time.
pub struct GestureEngine {
    config: EngineConfig,
    tracker: GestureTracker,
    overlay: Option<Box<dyn OverlaySink>>,
    stats: RuntimeStats,
}

impl GestureEngine {
    /// Create an engine with the reference configuration
    pub fn new() -> Self {
        let config = EngineConfig::default();
        GestureEngine {
            tracker: GestureTracker::with_config(config.gesture),
            config,
            overlay: None,
            stats: RuntimeStats::default(),
        }
    }

    /// Create an engine with a validated custom configuration
    pub fn with_config(config: EngineConfig) -> PinchResult<Self> {
        config.validate()?;
        Ok(GestureEngine {
            tracker: GestureTracker::with_config(config.gesture),
            config,
            overlay: None,
            stats: RuntimeStats::default(),
        })
    }

    /// Attach a debug overlay
    pub fn with_overlay(mut self, overlay: Box<dyn OverlaySink>) -> Self {
        self.overlay = Some(overlay);
        self
    }

    pub fn set_overlay(&mut self, overlay: Option<Box<dyn OverlaySink>>) {
        self.overlay = overlay;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> &RuntimeStats {
        &self.stats
    }

    pub fn cursor_state(&self) -> CursorState {
        self.tracker.state()
    }

    /// Process one frame. Never fails: degenerate input only means no gesture.
    pub fn process_frame(&mut self, frame: &Frame) -> FrameReport {
        let start = Instant::now();
        self.stats.frames += 1;

        let mut report = FrameReport::default();

        if let Err(err) = frame.validate() {
            warn!(%err, "dropping frame");
            self.stats.invalid_frames += 1;
            self.stats.last_frame_duration = start.elapsed();
            return report;
        }

        if !frame.has_hands() {
            self.stats.empty_frames += 1;
        }

        for (index, raw) in frame.hands.iter().take(self.config.max_hands).enumerate() {
            let hand = preprocess_hand(raw, frame.width, frame.height);
            let hand_report = self.inspect_hand(index, &hand);

            if report.driver.is_none() && hand_report.is_left && hand_report.admitted {
                report.driver = self.drive(index, &hand);
            }

            if let Some(overlay) = self.overlay.as_mut() {
                overlay.on_hand(&hand_report);
            }
            report.hands.push(hand_report);
        }

        if let Some(overlay) = self.overlay.as_mut() {
            overlay.on_frame_end();
        }

        self.stats.last_frame_duration = start.elapsed();
        report
    }

    /// Get-and-clear the buffered gesture
    pub fn poll_gesture(&mut self) -> GestureEvent {
        let event = self.tracker.poll();
        if !event.is_none() {
            self.stats.events_polled += 1;
        }
        event
    }

    /// Polled gesture wrapped for consumers
    pub fn poll_message(&mut self) -> GestureMessage {
        GestureMessage::from(self.poll_gesture())
    }

    /// Return to Idle with nothing buffered. Stats are kept.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    fn inspect_hand(&self, index: usize, hand: &Hand) -> HandReport {
        let area = hand.bbox.area();
        let admitted = !self.config.depth_gate_enabled || self.config.depth.admits(&hand.bbox);
        let report = HandReport {
            index,
            is_left: is_left(&hand.landmarks),
            fingers: hand_fingers(hand),
            bbox: hand.bbox,
            area,
            admitted,
        };
        trace!(
            hand = index,
            left = report.is_left,
            admitted,
            area,
            "hand inspected"
        );
        report
    }

    /// Measure the pinch of a candidate hand and feed the tracker when it is
    /// inside the activation zone. `None` leaves the hand to the next candidate.
    fn drive(&mut self, index: usize, hand: &Hand) -> Option<DriverReport> {
        let gesture = self.config.gesture;
        // Unreachable with a validated config: a left hand carries all ten
        // filtered landmarks and the pinch points index inside them.
        let sample = match measure_pinch(&hand.landmarks, gesture.pinch_points) {
            Ok(sample) => sample,
            Err(err) => {
                warn!(hand = index, %err, "pinch measurement refused");
                return None;
            }
        };

        if let Some(overlay) = self.overlay.as_mut() {
            overlay.on_pinch(&sample, sample.distance < gesture.enter_threshold);
        }

        if !gesture.in_zone(sample.center) {
            self.stats.outside_zone += 1;
            return None;
        }

        let transition = self.tracker.feed(sample);
        self.stats.driven_frames += 1;
        if let Some(event) = transition.event() {
            self.stats.events_emitted += 1;
            debug!(hand = index, %event, "gesture emitted");
        }

        Some(DriverReport {
            hand: index,
            sample,
            level: self.config.pinch_range.level(sample.distance),
            transition,
        })
    }
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new()
    }
}
