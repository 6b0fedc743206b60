//! Optional debug overlay hook
//!
//! The engine never draws. An overlay receives what would be drawn: each
//! hand report, and the pinch segment of the driving hand together with
//! whether it is currently closed under the enter threshold.

use tracing::trace;

use pinch_gesture::PinchSample;

use crate::HandReport;

/// Receiver for per-frame visualization data
pub trait OverlaySink: Send {
    /// Called once per reported hand
    fn on_hand(&mut self, _report: &HandReport) {}

    /// Called for a measured pinch; `engaged` when closed under the threshold
    fn on_pinch(&mut self, _sample: &PinchSample, _engaged: bool) {}

    /// Called after all hands of a frame have been reported
    fn on_frame_end(&mut self) {}
}

/// Emits overlay data as trace events
#[derive(Debug, Default)]
pub struct TracingOverlay;

impl OverlaySink for TracingOverlay {
    fn on_hand(&mut self, report: &HandReport) {
        trace!(
            hand = report.index,
            left = report.is_left,
            admitted = report.admitted,
            area = report.area,
            fingers = ?report.fingers.to_bits(),
            "overlay hand"
        );
    }

    fn on_pinch(&mut self, sample: &PinchSample, engaged: bool) {
        trace!(
            x = sample.center.x,
            y = sample.center.y,
            distance = sample.distance,
            engaged,
            "overlay pinch"
        );
    }
}
